use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Fund Report Scanner - extract performance metrics from semi-annual fund reports
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a folder of PDF/DOCX reports and print the chronological metric table
    Scan {
        /// Folder containing the report files
        folder: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to output text file (plain output, no color)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the full result set as JSON for the presentation layer
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            folder,
            no_color,
            output,
            json,
        } => scan(folder, no_color, output, json).await,
    }
}

async fn scan(
    folder: PathBuf,
    no_color: bool,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> anyhow::Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("Report folder not found: {}", folder.display());
    }

    let results = fundbrief_ingest::run_pipeline(&folder).await?;

    // Color only when writing a terminal-bound report
    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    output::print_result_table(&mut writer, &results, color)?;
    output::print_narrative_summary(&mut writer, &results, color)?;

    if let Some(ref json_path) = json {
        let file = std::fs::File::create(json_path)?;
        serde_json::to_writer_pretty(file, &results)?;
        writeln!(
            writer,
            "Wrote {} records to {}",
            results.len(),
            json_path.display()
        )?;
    }

    Ok(())
}
