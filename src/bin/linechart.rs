use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use linechart_rs::{ChartDataset, ChartOptions, LineChart};
use std::fs;
use std::path::{Path, PathBuf};

/// Fonts tried, in order, when `--font` is not given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Parser, Debug)]
#[command(
    name = "linechart",
    version,
    about = "Render line charts from JSON datasets to PNG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a dataset (labels + series) to a PNG or an inline <img> tag.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset JSON: {"labels": [RFC 3339...], "series": [{"name", "data"}], "y_axis_formatter"}
    #[arg(short, long)]
    input: PathBuf,
    /// Write the PNG here. Without it the <img> tag is printed to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Chart options JSON (size, scale, palette, theme, ...). CLI flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Nominal width of the chart.
    #[arg(long)]
    width: Option<u32>,
    /// Nominal height of the chart.
    #[arg(long)]
    height: Option<u32>,
    /// Output density (2 renders at twice the nominal size).
    #[arg(long)]
    scale: Option<u32>,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long)]
    locale: Option<String>,
    /// TrueType/OpenType font for labels. Defaults to a common system font.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn load_options(args: &RenderArgs) -> Result<ChartOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ChartOptions::default(),
    };
    if let Some(w) = args.width {
        options.width = w;
    }
    if let Some(h) = args.height {
        options.height = h;
    }
    if let Some(s) = args.scale {
        options.scale = s;
    }
    if let Some(l) = &args.locale {
        options.locale = l.clone();
    }
    Ok(options)
}

fn load_font(path: Option<&Path>) -> Result<&'static [u8]> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => SYSTEM_FONTS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .ok_or_else(|| anyhow::anyhow!("no system font found, pass one with --font"))?,
    };
    log::debug!("using font {}", path.display());
    let bytes = fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
    Ok(Box::leak(bytes.into_boxed_slice()))
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading dataset {}", args.input.display()))?;
    let dataset: ChartDataset = serde_json::from_str(&text)
        .with_context(|| format!("parsing dataset {}", args.input.display()))?;
    dataset.validate()?;

    let chart = LineChart::new(load_options(&args)?)?;
    linechart_rs::register_font(load_font(args.font.as_deref())?)?;
    let image = chart.render(&dataset)?;

    match args.out.as_ref() {
        Some(path) => {
            fs::write(path, &image.png)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "Wrote {}x{} chart to {}",
                image.width,
                image.height,
                path.display()
            );
        }
        None => println!("{}", image.img_tag()),
    }
    Ok(())
}
