use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use centroid_viz::gpu::{RenderConfig, RenderPipeline, create_render_device};
use centroid_viz::{AnimationController, ControllerState, SeedPolicy, centroid};

mod cli;

/// Frame pacing for the demo loop when no compositor drives us
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let config = args.resolve()?;
    let policy = match args.seed {
        Some(seed) => SeedPolicy::Fixed(seed),
        None => SeedPolicy::Entropy,
    };

    let (device, queue) = pollster::block_on(create_render_device())?;
    let render_config = RenderConfig {
        width: config.width as u32,
        height: config.height as u32,
        world: config.bounds(),
        ..Default::default()
    };
    let mut pipeline = RenderPipeline::new(
        Arc::new(device),
        Arc::new(queue),
        render_config,
        config.point_count as u32,
    );

    let mut controller = AnimationController::new(config)?;
    controller.start(policy);

    let mut last = Instant::now();
    for frame in 0..args.frames {
        std::thread::sleep(FRAME_INTERVAL);
        let now = Instant::now();
        let delta = now.duration_since(last).as_secs_f64();
        last = now;

        if controller.tick(delta, &mut pipeline) == ControllerState::Stopped {
            break;
        }

        if frame % 120 == 0 {
            if let Ok(c) = centroid(controller.points()) {
                info!(frame, x = c[0], y = c[1], "centroid");
            }
        }
    }

    controller.shutdown();
    Ok(())
}
