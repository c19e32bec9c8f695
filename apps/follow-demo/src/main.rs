//! Color-Blob Follow Demo
//!
//! Runs the full Pipeline B stack against the mock camera's drifting blue
//! target: HSV mask, centroid tracking, proportional steering, command
//! publishing. Shows the command sequence converging to a stop.

use anyhow::Result;

use blob_steer::{hsv_mask, largest_blob, FollowConfig, SteeringController};
use cmd_link::{CommandSink, MockSink};
use frame_source::{convert, CameraSource, MockCamera};

const FRAME_BUDGET: u32 = 40;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("Color-blob follow demo");
    println!("======================");

    let config = FollowConfig::default();
    let controller = SteeringController::new(config.steering.clone());
    let mut camera = MockCamera::open("0")?;
    let mut sink = MockSink::open("cmd_vel")?;

    let mut first_stop = None;
    for i in 0..FRAME_BUDGET {
        let frame = camera.read()?;
        let rgb = convert::to_rgb_image(&frame)?;
        let mask = hsv_mask(&rgb, &config.hsv);

        let Some(blob) = largest_blob(&mask) else {
            println!("frame {i:02}: no target visible");
            continue;
        };
        let (cx, cy) = blob.centroid;
        let error_x = controller.error_x(cx, rgb.width());
        let cmd = controller.command(error_x);
        sink.publish(&cmd)?;
        println!("frame {i:02}: centroid=({cx:.1}, {cy:.1}) error={error_x:+6.1}px -> {cmd}");

        if cmd.is_stop() && first_stop.is_none() {
            first_stop = Some(i);
        }
    }

    println!();
    match first_stop {
        Some(i) => println!("Target centered after {i} frames; rover stopped."),
        None => println!("Target never centered within {FRAME_BUDGET} frames."),
    }
    let stops = sink.published().iter().filter(|c| c.is_stop()).count();
    println!(
        "Commands published: {} ({} steering, {} stop)",
        sink.published().len(),
        sink.published().len() - stops,
        stops
    );
    Ok(())
}
