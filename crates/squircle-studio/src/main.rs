use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use squircle_engine::logging::{init_logging, LoggingConfig};

mod preview;
mod session;

#[derive(Debug, Parser)]
#[command(
    name = "squircle-studio",
    about = "Render squircle previews and replay resize sessions",
    version
)]
struct Cli {
    /// Log filter (env_logger syntax), e.g. `squircle_engine=trace`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the path for one box and write SVG + PNG previews.
    Render {
        width: f64,
        height: f64,
        radius: f64,
        #[arg(default_value_t = squircle_geometry::DEFAULT_SMOOTHING)]
        smoothing: f64,
        /// PNG output; the SVG is written next to it.
        #[arg(short, long, default_value = "squircle.png")]
        out: PathBuf,
        /// SVG fill paint.
        #[arg(long, default_value = "#3a7bd5")]
        fill: String,
        /// Attribute string (`radius: 24; smoothing: 0.8`) overriding radius/smoothing.
        #[arg(long)]
        attrs: Option<String>,
    },
    /// Replay the scripted resize session against an in-memory host.
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    match cli.command {
        Command::Render { width, height, radius, smoothing, out, fill, attrs } => {
            let config = match attrs {
                Some(src) => squircle_engine::parse_attributes(&src)?,
                None => squircle_engine::sanitize(radius, smoothing),
            };
            let path = preview::render(width, height, config, &fill, &out)?;
            println!("{path}");
            Ok(())
        }
        Command::Session => {
            for (step, report) in session::replay()? {
                println!(
                    "frame {:>2}  {step:<28} recomputed={} skipped={} detached={} pruned={}",
                    report.frame, report.recomputed, report.skipped, report.detached, report.pruned
                );
            }
            Ok(())
        }
    }
}
