use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use fmc::{generate, ChartKind, ChartOptions, Config};

#[derive(Parser)]
#[command(name = "fmc", about = "Feed Me Charts — financial data to interactive charts")]
struct Cli {
    /// JSON input file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Chart title.
    #[arg(long)]
    title: Option<String>,

    /// Chart kind: line|bar|area|scatter|pie|doughnut|radar|candlestick.
    #[arg(long, default_value = "line")]
    kind: ChartKind,

    /// X-axis label.
    #[arg(long, default_value = "Period")]
    x_label: String,

    /// Y-axis label.
    #[arg(long, default_value = "Value")]
    y_label: String,

    /// Artifact path. Defaults to a timestamped file in the configured
    /// output directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Open the generated chart in the default browser.
    #[arg(long)]
    open: bool,

    /// Print the report as JSON instead of a human message.
    #[arg(long)]
    json: bool,

    /// Write debug logs to /tmp/fmc-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fmc-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fmc debug log started — tail -f /tmp/fmc-debug.log");
    }

    let raw_text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let raw: serde_json::Value = serde_json::from_str(&raw_text)?;

    let config = Config::load()?;
    let options = ChartOptions {
        title: cli.title,
        kind: cli.kind,
        x_label: cli.x_label,
        y_label: cli.y_label,
        output: cli.output,
        open_viewer: cli.open,
    };

    let report = generate(&raw, &options, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
        if let Some(path) = &report.artifact {
            println!("{}", path.display());
        }
    }

    if !report.success {
        std::process::exit(1);
    }
    Ok(())
}
