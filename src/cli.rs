use std::path::PathBuf;

use clap::Parser;

use centroid_viz::{AnimationConfig, AnimationResult};

#[derive(Parser, Debug)]
#[command(name = "centroid-viz")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of animated points
    #[arg(short = 'n', long)]
    pub point_count: Option<usize>,

    /// Fixed simulation step in seconds
    #[arg(long)]
    pub fixed_step: Option<f64>,

    /// Maximum simulation steps drained per visual frame
    #[arg(long)]
    pub max_steps_per_frame: Option<u32>,

    /// Do not draw the centroid marker
    #[arg(long)]
    pub no_marker: bool,

    /// Seed for the initial scatter (drawn from entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of visual frames to run before shutting down
    #[arg(long, default_value = "600")]
    pub frames: u32,
}

impl Args {
    /// Resolve the effective configuration: file values (when given), then
    /// flag overrides, then validation.
    pub fn resolve(&self) -> AnimationResult<AnimationConfig> {
        let mut config = match &self.config {
            Some(path) => AnimationConfig::from_json_file(path)?,
            None => AnimationConfig::default(),
        };
        if let Some(count) = self.point_count {
            config.point_count = count;
        }
        if let Some(step) = self.fixed_step {
            config.fixed_step = step;
        }
        if let Some(cap) = self.max_steps_per_frame {
            config.max_steps_per_frame = cap;
        }
        if self.no_marker {
            config.centroid_marker_enabled = false;
        }
        config.validate()?;
        Ok(config)
    }
}
