//! # Old Glory I/O
//!
//! JSON configuration files using the same option names as the parameter
//! sliders, and an SVG backend for the renderer's canvas.

pub mod config;
pub mod error;
pub mod svg;

pub use config::FlagConfig;
pub use error::IoError;
pub use svg::{render_svg, SvgCanvas, SvgWriter};
