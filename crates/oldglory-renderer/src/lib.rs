//! # Old Glory Renderer
//!
//! Turns a derived flag layout into an ordered stream of drawing operations
//! against a minimal 2D [`Canvas`].
//!
//! Backends implement [`Canvas`]. [`RecordingCanvas`] captures the stream as
//! JSON-serializable [`DrawCommand`]s, which is what the tests and the
//! `--format json` output consume.

pub mod canvas;
pub mod commands;
pub mod flag;

pub use canvas::Canvas;
pub use commands::{CommandStream, DrawCommand, RecordingCanvas};
pub use flag::{render, render_flag, render_pass, FlagRenderer, RenderSummary};
