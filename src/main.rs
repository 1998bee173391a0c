use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};

use flythrough::cli::Cli;
use flythrough::config::FlythroughConfig;
use flythrough::frame::FixedStepFrames;
use flythrough::scene::SceneManifest;
use flythrough::trace::{simulate, ScrollPlan};

const PROGRESS_LOG_INTERVAL: u64 = 60;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FlythroughConfig::load(path)?,
        None => FlythroughConfig::default(),
    };

    if let Some(path) = &cli.manifest {
        SceneManifest::flythrough().write(path)?;
    }

    let frames = FixedStepFrames::new(cli.frames, cli.fps);
    let plan = ScrollPlan::new(cli.scroll_from, cli.scroll_to);
    let quiet = cli.no_ui;

    if !quiet {
        log::info!(
            "Simulating {} frames at {} fps, scroll {} -> {}",
            cli.frames,
            cli.fps,
            plan.from,
            plan.to
        );
    }

    let trace = simulate(&config, frames, plan, |record| {
        if !quiet && record.frame.number % PROGRESS_LOG_INTERVAL == 0 {
            log::info!(
                "frame {:>5}  progress {:.4}  bank {:+.1} deg",
                record.frame.number,
                record.transforms.progress,
                record.transforms.target_bank_deg
            );
        }
    })?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create trace file: {}", path.display()))?;
            trace.write_json(BufWriter::new(file))?;
            if !quiet {
                log::info!("Trace written to {}", path.display());
            }
        }
        None => trace.write_json(io::stdout().lock())?,
    }

    Ok(())
}
