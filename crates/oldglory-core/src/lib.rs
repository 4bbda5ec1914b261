//! # Old Glory Core
//!
//! Parameter model, layout derivation, and star geometry for a procedurally
//! drawn striped flag with a starred canton.
//!
//! Everything in this crate is a pure function of its inputs. Drawing lives in
//! `oldglory-renderer`; file formats live in `oldglory-io`.

pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod params;
pub mod star;
pub mod transform;

pub use color::{ColorParseError, Rgba};
pub use error::FlagError;
pub use geometry::{ClosedPath, Point, Rect};
pub use layout::{derive_layout, star_present, DerivedLayout};
pub use params::{FlagParameters, ParameterSpec, PARAMETER_SPECS};
pub use star::star_path;
pub use transform::RenderState;
