// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flythrough")]
#[command(about = "Headless scroll-driven camera flythrough", long_about = None)]
pub struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Raw scroll offset at the first frame
    #[arg(long = "scroll-from", default_value_t = 0.0, allow_negative_numbers = true)]
    pub scroll_from: f32,

    /// Raw scroll offset at the last frame
    #[arg(long = "scroll-to", default_value_t = 1.0, allow_negative_numbers = true)]
    pub scroll_to: f32,

    /// JSON config overriding tuned constants or the path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the frame trace here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also export the scene manifest as JSON
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
