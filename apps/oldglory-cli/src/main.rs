use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use oldglory_core::{FlagParameters, Rgba};
use oldglory_io::{FlagConfig, SvgWriter};
use oldglory_renderer::FlagRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "oldglory",
    version,
    about = "Draw a striped flag with a starred canton as SVG"
)]
struct Cli {
    /// JSON file with flag options (flagSize, proportion, stripeCount, ...)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Flag height in inches
    #[arg(long, value_name = "INCHES")]
    flag_size: Option<f64>,

    /// Width over height
    #[arg(long)]
    proportion: Option<f64>,

    #[arg(long, value_name = "N")]
    stripes: Option<f64>,

    #[arg(long, value_name = "N")]
    star_rows: Option<f64>,

    #[arg(long, value_name = "N")]
    star_cols: Option<f64>,

    #[arg(long, value_name = "COLOR")]
    odd_stripe: Option<Rgba>,

    #[arg(long, value_name = "COLOR")]
    even_stripe: Option<Rgba>,

    #[arg(long, value_name = "COLOR")]
    canton: Option<Rgba>,

    #[arg(long, value_name = "COLOR")]
    star: Option<Rgba>,

    /// Number of stacked copies to draw
    #[arg(long, value_name = "N")]
    jasperize: Option<f64>,

    /// Stop numeric options on their slider tick marks
    #[arg(long)]
    snap: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Svg,
    Json,
}

impl Cli {
    fn flag_overrides(&self) -> FlagConfig {
        FlagConfig {
            flag_size: self.flag_size,
            proportion: self.proportion,
            stripe_count: self.stripes,
            star_rows: self.star_rows,
            star_cols: self.star_cols,
            odd_stripe_color: self.odd_stripe,
            even_stripe_color: self.even_stripe,
            canton_color: self.canton,
            star_color: self.star,
            jasperize: self.jasperize,
        }
    }

    fn parameters(&self) -> Result<FlagParameters> {
        let file = match &self.config {
            Some(path) => FlagConfig::from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => FlagConfig::default(),
        };
        let params = file.merge(self.flag_overrides()).into_parameters();
        Ok(if self.snap { params.snapped() } else { params })
    }
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.parameters()?;
    log::debug!("Flag parameters: {:?}", params);

    // Validate before the output file is created.
    let renderer = FlagRenderer::new(params)?;
    let out = open_output(cli.output.as_ref())?;

    match cli.format {
        Format::Svg => {
            let summary = SvgWriter::new(out).write_renderer(&renderer)?;
            log::info!(
                "Wrote SVG: {} passes, final scale {:.4}",
                summary.passes,
                summary.final_scale
            );
        }
        Format::Json => {
            let json = renderer.command_stream().to_json()?;
            let mut out = out;
            out.write_all(json.as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(&Cli::parse())
}
