use crate::foundation::color::Rgb8;
use crate::model::config::QrConfig;
use crate::model::request::EcLevel;
use serde::{Deserialize, Serialize};

/// Advisory style for a payload, as returned by an external suggestion service.
///
/// Suggestions only ever rewrite config inputs. A missing or malformed suggestion is logged and
/// ignored so it can never block rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestion {
    /// Suggested dark module color.
    pub primary_color: Rgb8,
    /// Suggested light module color.
    pub secondary_color: Rgb8,
    /// Short explanation of the style.
    pub description: String,
    /// Suggested error-correction level.
    pub suggested_level: EcLevel,
}

impl StyleSuggestion {
    /// Parse a suggestion, returning `None` (and logging why) when the text is not usable.
    pub fn from_json(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("empty style suggestion");
            return None;
        }
        match serde_json::from_str(text) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed style suggestion");
                None
            }
        }
    }

    /// Apply colors and level to `config`.
    pub fn apply(&self, config: &mut QrConfig) {
        config.fg_color = self.primary_color;
        config.bg_color = self.secondary_color;
        config.level = self.suggested_level;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/suggestion.rs"]
mod tests;
