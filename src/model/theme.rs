use crate::foundation::color::Rgb8;
use crate::model::config::QrConfig;

/// Visual theme.
///
/// Themes are plain values: applying one rewrites the code colors in a [`QrConfig`]. Rendering
/// never looks at theme state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Stable identifier, used in export file names.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Page background.
    pub background: Rgb8,
    /// Page text.
    pub text: Rgb8,
    /// Accent color.
    pub accent: Rgb8,
    /// Light module color for codes rendered under this theme.
    pub qr_background: Rgb8,
    /// Dark module color for codes rendered under this theme.
    pub qr_foreground: Rgb8,
}

static BUILTIN: [ThemeConfig; 5] = [
    ThemeConfig {
        id: "absolute",
        name: "ABSOLUTE PROTOCOL",
        background: Rgb8::new(0x00, 0x00, 0x00),
        text: Rgb8::new(0xff, 0xff, 0xff),
        accent: Rgb8::new(0xff, 0x4d, 0x4d),
        qr_background: Rgb8::new(0xff, 0xff, 0xff),
        qr_foreground: Rgb8::new(0x00, 0x00, 0x00),
    },
    ThemeConfig {
        id: "sanga",
        name: "BLACK SÄNGA",
        background: Rgb8::new(0x14, 0x12, 0x12),
        text: Rgb8::new(0xec, 0xe5, 0xd8),
        accent: Rgb8::new(0xd4, 0x88, 0x06),
        qr_background: Rgb8::new(0xec, 0xe5, 0xd8),
        qr_foreground: Rgb8::new(0x14, 0x12, 0x12),
    },
    ThemeConfig {
        id: "clash",
        name: "CLASH VIBE",
        background: Rgb8::new(0x00, 0x00, 0x00),
        text: Rgb8::new(0xff, 0xff, 0xff),
        accent: Rgb8::new(0xff, 0x9d, 0x00),
        qr_background: Rgb8::new(0xff, 0xff, 0xff),
        qr_foreground: Rgb8::new(0x00, 0x00, 0x00),
    },
    ThemeConfig {
        id: "maghfirea",
        name: "MAGHFIREA",
        background: Rgb8::new(0xdc, 0xd7, 0xcc),
        text: Rgb8::new(0x1a, 0x1a, 0x1a),
        accent: Rgb8::new(0x8b, 0x7d, 0x6b),
        qr_background: Rgb8::new(0xff, 0xff, 0xff),
        qr_foreground: Rgb8::new(0x1a, 0x1a, 0x1a),
    },
    ThemeConfig {
        id: "minimal",
        name: "STUDIO DARK",
        background: Rgb8::new(0xff, 0xff, 0xff),
        text: Rgb8::new(0x00, 0x00, 0x00),
        accent: Rgb8::new(0x00, 0x00, 0x00),
        qr_background: Rgb8::new(0x00, 0x00, 0x00),
        qr_foreground: Rgb8::new(0xff, 0xff, 0xff),
    },
];

impl ThemeConfig {
    /// Built-in themes, default first.
    pub fn builtin() -> &'static [ThemeConfig] {
        &BUILTIN
    }

    /// Look up a built-in theme by id (case-insensitive).
    pub fn by_id(id: &str) -> Option<&'static ThemeConfig> {
        let id = id.trim();
        BUILTIN.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Overwrite the code colors in `config` with this theme's.
    pub fn apply(&self, config: &mut QrConfig) {
        config.fg_color = self.qr_foreground;
        config.bg_color = self.qr_background;
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        BUILTIN[0].clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/theme.rs"]
mod tests;
