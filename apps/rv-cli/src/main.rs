use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use arrow_detect::{
    annotate, bearing_degrees, preprocess, ArrowFinder, ShapeConfig, TemplateConfig,
    TemplateMatcher,
};
use blob_steer::{hsv_mask, largest_blob, FollowConfig, SteeringController};
use cmd_link::{CommandSink, JsonlSink, MockSink};
use frame_source::{convert, io as frame_io, CameraSource, MockCamera};

#[derive(Parser, Debug)]
#[command(
    name = "rv",
    version,
    about = "Arrow rover vision CLI",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SinkBackend {
    Mock,
    Jsonl,
}

/// Tuning for the arrow subcommand; YAML-overridable, defaults are the
/// calibrated constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ArrowRunConfig {
    shape: ShapeConfig,
    template: TemplateConfig,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available camera backends
    CamList,
    /// Open a camera and read a few frames
    CamTest {
        /// Device spec: index like 0 or a path
        #[arg(long, default_value = "0")]
        device: String,
        #[arg(long, default_value_t = 5)]
        frames: u64,
    },
    /// Arrow detection loop: contour-shape heuristics plus template matching
    Arrow {
        #[arg(long, default_value = "0")]
        device: String,
        /// Left-arrow reference image
        #[arg(long)]
        left_template: PathBuf,
        /// Right-arrow reference image
        #[arg(long)]
        right_template: PathBuf,
        /// Frames to process; 0 runs until the stream ends
        #[arg(long, default_value_t = 0)]
        frames: u64,
        /// Write annotated frames here as PNG
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// YAML tuning overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Color-blob follow loop: mask, centroid, one steering command per frame
    Follow {
        #[arg(long, default_value = "0")]
        device: String,
        /// Channel name; for the jsonl sink, a file path or "-" for stdout
        #[arg(long, default_value = "cmd_vel")]
        channel: String,
        #[arg(long, value_enum, default_value_t = SinkBackend::Mock)]
        sink: SinkBackend,
        /// Frames to process; 0 runs until the stream ends
        #[arg(long, default_value_t = 0)]
        frames: u64,
        /// YAML tuning overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::CamList => cam_list(),
        Commands::CamTest { device, frames } => cam_test(&device, frames),
        Commands::Arrow {
            device,
            left_template,
            right_template,
            frames,
            out_dir,
            config,
        } => run_arrow(
            &device,
            &left_template,
            &right_template,
            frames,
            out_dir,
            config,
        ),
        Commands::Follow {
            device,
            channel,
            sink,
            frames,
            config,
        } => match sink {
            SinkBackend::Mock => run_follow::<MockSink>(&device, &channel, frames, config),
            SinkBackend::Jsonl => run_follow::<JsonlSink>(&device, &channel, frames, config),
        },
    }
}

fn load_yaml<T: DeserializeOwned + Default>(path: Option<&PathBuf>) -> Result<T> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", p.display()))
        }
        None => Ok(T::default()),
    }
}

fn cam_list() -> Result<()> {
    println!("{:<10} {:<8} {}", "name", "driver", "notes");
    println!("{:<10} {:<8} {}", "mock0", "mock", "synthetic drifting target");
    Ok(())
}

fn cam_test(device: &str, frames: u64) -> Result<()> {
    let mut camera = MockCamera::open(device)?;
    for i in 0..frames {
        let frame = camera.read()?;
        info!(
            i,
            width = frame.width,
            height = frame.height,
            format = ?frame.pixel_format,
            "frame read"
        );
    }
    Ok(())
}

fn run_arrow(
    device: &str,
    left_template: &PathBuf,
    right_template: &PathBuf,
    frames: u64,
    out_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let cfg: ArrowRunConfig = load_yaml(config.as_ref())?;
    let finder = ArrowFinder::new(cfg.shape.clone());
    let right = frame_io::load_gray_template(right_template)?;
    let left = frame_io::load_gray_template(left_template)?;
    let matchers = [
        (
            TemplateMatcher::new(right, cfg.template.clone())?,
            "Right",
            annotate::GREEN,
        ),
        (
            TemplateMatcher::new(left, cfg.template.clone())?,
            "Left",
            annotate::BLUE,
        ),
    ];
    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output dir {}", dir.display()))?;
    }

    let mut camera = MockCamera::open(device)?;
    let mut processed = 0u64;
    loop {
        if frames > 0 && processed >= frames {
            break;
        }
        let frame = match camera.read() {
            Ok(f) => f,
            Err(e) => {
                info!(error = %e, "stream ended");
                break;
            }
        };
        let mut rgb = match convert::to_rgb_image(&frame) {
            Ok(img) => img,
            Err(e) => {
                error!(error = %e, "frame conversion failed, dropping frame");
                processed += 1;
                continue;
            }
        };

        for detection in finder.detect(&rgb) {
            annotate::draw_detection(&mut rgb, &detection);
            info!(direction = detection.direction.as_str(), "arrow direction");
        }

        // Matching runs on the annotated frame, same as the original loop.
        let gray = preprocess::to_gray_and_blur(&rgb, cfg.shape.blur_sigma);
        for (matcher, label, color) in &matchers {
            if let Some(m) = matcher.find(&gray) {
                annotate::draw_match_box(&mut rgb, m.location, matcher.box_size(&m), *color);
                let angle = bearing_degrees(m.location, rgb.width(), rgb.height());
                info!(
                    arrow = *label,
                    angle_deg = angle,
                    score = m.score,
                    scale = m.scale,
                    "template arrow detected"
                );
            }
        }

        if let Some(dir) = &out_dir {
            let path = dir.join(format!("frame_{processed:05}.png"));
            frame_io::save_annotated(&path, &rgb)?;
        }
        processed += 1;
    }
    info!(processed, "arrow loop finished");
    Ok(())
}

fn run_follow<S: CommandSink>(
    device: &str,
    channel: &str,
    frames: u64,
    config: Option<PathBuf>,
) -> Result<()> {
    let cfg: FollowConfig = load_yaml(config.as_ref())?;
    let controller = SteeringController::new(cfg.steering.clone());
    let mut sink = S::open(channel)?;
    let mut camera = MockCamera::open(device)?;

    let mut processed = 0u64;
    loop {
        if frames > 0 && processed >= frames {
            break;
        }
        let frame = match camera.read() {
            Ok(f) => f,
            Err(e) => {
                info!(error = %e, "stream ended");
                break;
            }
        };
        let rgb = match convert::to_rgb_image(&frame) {
            Ok(img) => img,
            Err(e) => {
                error!(error = %e, "image bridge failure, dropping frame");
                processed += 1;
                continue;
            }
        };

        let mask = hsv_mask(&rgb, &cfg.hsv);
        match largest_blob(&mask) {
            Some(blob) => {
                let (cx, cy) = blob.centroid;
                let error_x = controller.error_x(cx, rgb.width());
                let mut cmd = controller.command(error_x);
                if let Some(ts) = frame.ts {
                    cmd = cmd.stamped(ts);
                }
                sink.publish(&cmd)?;
                if cmd.is_stop() {
                    info!(cx, cy, "object centered, stopping rover");
                } else {
                    info!(cx, cy, error_x, %cmd, "tracking object");
                }
            }
            None => debug!("no target in this frame"),
        }
        processed += 1;
    }
    info!(processed, "follow loop finished");
    Ok(())
}
