use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use walkshot::{walks, BrowserConfig, Walker};

#[derive(Parser)]
#[command(name = "verify-charts")]
#[command(about = "Walk the power-consumption dashboard's chart views and capture screenshots")]
#[command(version)]
struct Cli {
    /// Document to open
    #[arg(default_value = "power_consumption.html")]
    document: PathBuf,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> walkshot::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let walk = walks::charts_walk(&cli.document)?;

    let config = BrowserConfig {
        headless: !cli.headed,
        ..Default::default()
    };

    if !cli.json {
        println!("Running: {}", walk.name);
    }

    let walker = Walker::launch(&config).await?;
    let outcome = walker.run(&walk).await;
    walker.close().await?;

    match outcome {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!();
                println!("✓ Captured {} screenshots", report.screenshots.len());
                for path in &report.screenshots {
                    println!("  {}", path.display());
                }
                println!("  Steps: {}", report.steps_executed);
                println!("  Duration: {}ms", report.duration_ms);
            }
            Ok(())
        }
        Err(e) => {
            println!();
            println!("✗ Failed");
            println!("  Error: {}", e);
            std::process::exit(1);
        }
    }
}
