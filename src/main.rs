use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colour_census::models::{CensusConfig, ConfigOverrides};
use colour_census::services::{run_batch, BatchOptions, ImageAnalyzer};

#[derive(Parser)]
#[command(name = "colour-census")]
#[command(about = "Per-image color census with reference-palette quantization")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every file in a directory, writing JSON records and histogram charts
    Batch {
        /// Directory containing the images
        #[arg(default_value = ".")]
        input: PathBuf,

        /// Directory in which the `<input>_colour_analysis` folder is created
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        census: CensusArgs,

        /// Process files in parallel
        #[arg(long)]
        parallel: bool,

        /// Exit with an error if any file could not be analyzed
        #[arg(long)]
        strict: bool,
    },
    /// Analyze a single image and print its JSON record
    Image {
        /// Image file
        file: PathBuf,

        #[command(flatten)]
        census: CensusArgs,

        /// Also write the histogram chart to this PNG file
        #[arg(long)]
        histogram: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CensusArgs {
    /// YAML config file (defaults to $CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum share of pixels for a histogram bar, 0..=1
    #[arg(long)]
    threshold: Option<f64>,

    /// Reference color; repeat to build the palette in order (replaces the config palette)
    #[arg(long = "reference", value_name = "NAME=COLOR")]
    references: Vec<String>,

    /// Color to exclude from the census; repeatable
    #[arg(long = "ignore", value_name = "COLOR")]
    ignore: Vec<String>,
}

impl CensusArgs {
    fn load_config(self) -> anyhow::Result<CensusConfig> {
        let config_file = self
            .config
            .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

        let overrides = ConfigOverrides {
            threshold: self.threshold,
            references: self.references,
            ignore: self.ignore,
        };

        let config =
            CensusConfig::load_optional(config_file.as_deref())?.with_overrides(&overrides)?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for records
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colour_census=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Batch {
            input,
            output,
            census,
            parallel,
            strict,
        } => run_batch_command(input, output, census, parallel, strict),
        Commands::Image {
            file,
            census,
            histogram,
        } => run_image_command(&file, census, histogram.as_deref()),
    }
}

/// Analyze a directory of images
fn run_batch_command(
    input: PathBuf,
    output: PathBuf,
    census: CensusArgs,
    parallel: bool,
    strict: bool,
) -> anyhow::Result<()> {
    let analyzer = ImageAnalyzer::new(census.load_config()?);
    let options = BatchOptions {
        input,
        output,
        parallel,
    };

    let report = run_batch(&analyzer, &options)?;

    println!(
        "Analyzed {} file(s) into {}",
        report.processed,
        report.output_folder.display()
    );
    if !report.failed.is_empty() {
        println!("Skipped {} file(s):", report.failed.len());
        for (path, reason) in &report.failed {
            println!("  {}: {reason}", path.display());
        }
        if strict {
            anyhow::bail!("{} file(s) could not be analyzed", report.failed.len());
        }
    }

    Ok(())
}

/// Analyze one image and print its record
fn run_image_command(
    file: &Path,
    census: CensusArgs,
    histogram: Option<&Path>,
) -> anyhow::Result<()> {
    let analyzer = ImageAnalyzer::new(census.load_config()?);
    let report = analyzer.analyze_path(file)?;

    println!("{}", report.to_json()?);

    if let Some(path) = histogram {
        let png = analyzer.render_histogram(&report)?;
        std::fs::write(path, &png)?;
        tracing::info!(path = %path.display(), bytes = png.len(), "Wrote histogram");
    }

    Ok(())
}
