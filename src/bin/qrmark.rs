use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use qrmark::{
    Compositor, CompositorOpts, DEFAULT_PRODUCT, EcLevel, MarkShape, QrConfig, Rgb8,
    StyleSuggestion, ThemeConfig, default_export_filename, export_png,
};

#[derive(Parser, Debug)]
#[command(name = "qrmark", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a code (with optional center mark) to a PNG.
    Render(RenderArgs),
    /// List built-in themes.
    Themes,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Config JSON (studio form fields). Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text or URL to encode.
    #[arg(long)]
    text: Option<String>,

    /// Theme id; sets the code colors before --fg/--bg are applied.
    #[arg(long)]
    theme: Option<String>,

    /// Style suggestion JSON file; ignored when unreadable or malformed.
    #[arg(long)]
    suggestion: Option<PathBuf>,

    /// Dark module color (#rrggbb).
    #[arg(long)]
    fg: Option<Rgb8>,

    /// Light module color (#rrggbb).
    #[arg(long)]
    bg: Option<Rgb8>,

    /// Error-correction level (L, M, Q, H).
    #[arg(long)]
    level: Option<EcLevel>,

    /// Quiet zone in modules.
    #[arg(long)]
    margin: Option<u32>,

    /// Center mark image.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Center mark edge in percent of the canvas (10..=35).
    #[arg(long)]
    logo_size: Option<u32>,

    /// Center mark outline.
    #[arg(long)]
    logo_shape: Option<MarkShape>,

    /// Mark padding in pixels at the 400px reference size.
    #[arg(long)]
    logo_padding: Option<u32>,

    /// Working resolution in pixels.
    #[arg(long, default_value_t = qrmark::DEFAULT_WORKING_RESOLUTION)]
    resolution: u32,

    /// Resample the output to this size instead of the working resolution.
    #[arg(long)]
    display_size: Option<u32>,

    /// Product name used in the default output file name.
    #[arg(long, default_value = DEFAULT_PRODUCT)]
    product: String,

    /// Output PNG path. Defaults to `<product>-<theme>-qr.png`.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Themes => cmd_themes(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn cmd_themes() -> anyhow::Result<()> {
    for t in ThemeConfig::builtin() {
        println!(
            "{:<10} {:<18} fg {} bg {}",
            t.id, t.name, t.qr_foreground, t.qr_background
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => QrConfig::from_path(path)?,
        None => QrConfig::default(),
    };

    let theme = match args.theme.as_deref() {
        Some(id) => {
            let t = ThemeConfig::by_id(id).with_context(|| format!("unknown theme '{id}'"))?;
            t.apply(&mut cfg);
            t.clone()
        }
        None => ThemeConfig::default(),
    };

    if let Some(path) = &args.suggestion {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                if let Some(s) = StyleSuggestion::from_json(&text) {
                    tracing::info!(description = %s.description, "applying style suggestion");
                    s.apply(&mut cfg);
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "style suggestion unreadable"),
        }
    }

    apply_overrides(&mut cfg, &args);

    let assets_root = if args.logo.is_some() {
        PathBuf::from(".")
    } else {
        args.config
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let request = cfg.to_request()?;
    let overlay = cfg.to_overlay(&assets_root)?;
    let compositor =
        Compositor::new(CompositorOpts::default().with_working_resolution(args.resolution))?;
    let outcome = compositor.render_detailed(&request, overlay.as_ref())?;
    if let Some(e) = &outcome.overlay_error {
        eprintln!("warning: center mark skipped: {e}");
    }

    let image = match args.display_size {
        Some(size) => outcome.image.scaled_to(size)?,
        None => outcome.image,
    };

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_export_filename(&args.product, theme.id)));
    let hint = out_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let png = export_png(&image, &hint)?;
    let out_path = out_path.with_file_name(&png.filename);

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out_path, &png.bytes)
        .with_context(|| format!("write png '{}'", out_path.display()))?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}

fn apply_overrides(cfg: &mut QrConfig, args: &RenderArgs) {
    if let Some(text) = &args.text {
        cfg.value = text.clone();
    }
    if let Some(fg) = args.fg {
        cfg.fg_color = fg;
    }
    if let Some(bg) = args.bg {
        cfg.bg_color = bg;
    }
    if let Some(level) = args.level {
        cfg.level = level;
    }
    if let Some(margin) = args.margin {
        cfg.margin = margin;
    }
    if let Some(logo) = &args.logo {
        cfg.include_image = true;
        cfg.image_src = Some(logo.to_string_lossy().into_owned());
    }
    if let Some(size) = args.logo_size {
        cfg.image_size = size;
    }
    if let Some(shape) = args.logo_shape {
        cfg.logo_shape = shape;
    }
    if let Some(padding) = args.logo_padding {
        cfg.logo_padding = padding;
    }
}
