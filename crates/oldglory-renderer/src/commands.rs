use serde::{Deserialize, Serialize};

use oldglory_core::{Point, RenderState, Rgba};

use crate::canvas::Canvas;

/// One recorded canvas operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetCanvasSize { width: f64, height: f64 },
    SetFillColor { color: Rgba },
    FillRectangle { x: f64, y: f64, width: f64, height: f64 },
    FillClosedPath { points: Vec<Point> },
    Translate { dx: f64, dy: f64 },
    ScaleUniform { factor: f64 },
}

/// Complete command stream for one run, as emitted to the frontend or a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandStream {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub commands: Vec<DrawCommand>,
}

impl CommandStream {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replay the stream onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::SetCanvasSize { width, height } => {
                    canvas.set_canvas_size(*width, *height)
                }
                DrawCommand::SetFillColor { color } => canvas.set_fill_color(*color),
                DrawCommand::FillRectangle {
                    x,
                    y,
                    width,
                    height,
                } => canvas.fill_rectangle(*x, *y, *width, *height),
                DrawCommand::FillClosedPath { points } => canvas.fill_closed_path(points),
                DrawCommand::Translate { dx, dy } => canvas.translate(*dx, *dy),
                DrawCommand::ScaleUniform { factor } => canvas.scale_uniform(*factor),
            }
        }
    }
}

/// A canvas that draws nothing and remembers every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    state: RenderState,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Transform in effect for the next drawing call.
    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn into_stream(self) -> CommandStream {
        CommandStream {
            canvas_width: self.width,
            canvas_height: self.height,
            commands: self.commands,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.clone().into_stream().to_json()
    }
}

impl Canvas for RecordingCanvas {
    fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::SetCanvasSize { width, height });
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetFillColor { color });
    }

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_closed_path(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::FillClosedPath {
            points: points.to_vec(),
        });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translate(dx, dy);
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn scale_uniform(&mut self, factor: f64) {
        self.state.scale_uniform(factor);
        self.commands.push(DrawCommand::ScaleUniform { factor });
    }

    fn current_canvas_width(&self) -> f64 {
        self.width
    }

    fn current_canvas_height(&self) -> f64 {
        self.height
    }
}
