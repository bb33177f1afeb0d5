use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ochre::models::{AppConfig, Metric, OutputFormat};
use ochre::services::{Adjustment, Converter};
use ochre_color::Color;

#[derive(Parser)]
#[command(name = "ochre")]
#[command(about = "Convert colors between RGB, hex, web names, ANSI 256 and HCL")]
struct Cli {
    /// Config file (defaults to $OCHRE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every color space
    Convert {
        /// Color: hex, web name, ansi256:N, rgb(r, g, b) or hcl(h, c, l)
        color: Color,
    },
    /// Find the closest color in a palette
    Closest {
        color: Color,

        /// Palette to search: web, ansi256 or one from the config
        #[arg(short, long, default_value = "web")]
        palette: String,

        /// Distance metric (overrides the config file)
        #[arg(short, long, value_enum)]
        metric: Option<Metric>,
    },
    /// Lighten, darken, saturate or desaturate a color
    Adjust {
        color: Color,

        #[command(flatten)]
        adjustment: AdjustArgs,
    },
    /// List the colors of a palette, or all palette names
    Palette { name: Option<String> },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct AdjustArgs {
    #[arg(long, value_name = "AMOUNT")]
    lighten: Option<f64>,

    #[arg(long, value_name = "AMOUNT")]
    darken: Option<f64>,

    #[arg(long, value_name = "AMOUNT")]
    saturate: Option<f64>,

    #[arg(long, value_name = "AMOUNT")]
    desaturate: Option<f64>,
}

impl AdjustArgs {
    fn adjustment(&self) -> Option<Adjustment> {
        self.lighten
            .map(Adjustment::Lighten)
            .or(self.darken.map(Adjustment::Darken))
            .or(self.saturate.map(Adjustment::Saturate))
            .or(self.desaturate.map(Adjustment::Desaturate))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ochre=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config = AppConfig::load(config_path.as_deref());
    let format = cli.format.unwrap_or(config.format);
    let converter = Converter::from_config(&config);

    match cli.command {
        Commands::Convert { color } => {
            tracing::debug!(%color, "convert");
            emit(format, &converter.describe(&color)?)
        }
        Commands::Closest {
            color,
            palette,
            metric,
        } => {
            tracing::debug!(%color, %palette, "closest");
            emit(format, &converter.closest(&color, &palette, metric)?)
        }
        Commands::Adjust { color, adjustment } => {
            let adjustment = adjustment
                .adjustment()
                .ok_or_else(|| anyhow::anyhow!("No adjustment given"))?;
            tracing::debug!(%color, ?adjustment, "adjust");
            emit(format, &converter.adjust(&color, adjustment)?)
        }
        Commands::Palette { name: Some(name) } => {
            emit(format, &converter.palette(&name)?)
        }
        Commands::Palette { name: None } => {
            let names = converter.registry().names();
            match format {
                OutputFormat::Text => println!("{}", names.join("\n")),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
            }
            Ok(())
        }
    }
}

/// Print a report in the requested format
fn emit<T: Serialize + Display>(format: OutputFormat, report: &T) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
