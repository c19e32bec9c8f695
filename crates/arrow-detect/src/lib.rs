//! arrow-detect: arrow marker recognition for camera frames
//!
//! Two independent detectors over the same frame:
//!
//! - [`ArrowFinder`] walks the frame's contours, approximates each as a
//!   polygon and applies a fixed hull/vertex-count signature to recognize a
//!   seven-vertex arrow outline, then resolves which way it points.
//! - [`TemplateMatcher`] scans the frame against a fixed grayscale template
//!   at multiple scales using normalized cross-correlation.
//!
//! All image primitives are delegated to `imageproc`; this crate owns only
//! the sequencing and the threshold logic. Every per-frame miss is a `None`
//! or an empty list, never an error.

mod error;
pub use error::{Error, Result};

mod config;
pub use config::{ShapeConfig, TemplateConfig};

pub mod preprocess;

pub mod contour;

mod shape;
pub use shape::{is_arrow_candidate, locate_tip, resolve_direction, Direction};

mod detector;
pub use detector::{ArrowDetection, ArrowFinder};

mod template;
pub use template::{bearing_degrees, TemplateMatch, TemplateMatcher};

pub mod annotate;
