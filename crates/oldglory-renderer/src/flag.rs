use serde::Serialize;

use oldglory_core::{
    derive_layout, star_path, DerivedLayout, FlagError, FlagParameters, Point, Rgba,
};

use crate::canvas::Canvas;
use crate::commands::{CommandStream, DrawCommand, RecordingCanvas};

/// What a completed run drew.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSummary {
    pub passes: u32,
    pub stars_per_pass: usize,
    /// Cumulative scale in effect once the last pass has shrunk the canvas.
    pub final_scale: f64,
}

/// A validated flag, ready to be drawn any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagRenderer {
    params: FlagParameters,
    layout: DerivedLayout,
}

impl FlagRenderer {
    pub fn new(params: FlagParameters) -> Result<Self, FlagError> {
        let layout = derive_layout(&params)?;
        Ok(Self { params, layout })
    }

    pub fn params(&self) -> &FlagParameters {
        &self.params
    }

    /// Size the canvas and draw every stacked copy.
    pub fn render_into<C: Canvas + ?Sized>(&self, canvas: &mut C) -> RenderSummary {
        let layout = &self.layout;
        canvas.set_canvas_size(layout.page_width, layout.page_height);

        for pass in 0..layout.repeat_count {
            log::debug!("Drawing copy {} of {}", pass + 1, layout.repeat_count);
            render_pass(canvas, layout, &self.params);
        }

        let summary = RenderSummary {
            passes: layout.repeat_count,
            stars_per_pass: layout.star_count(),
            final_scale: layout.scale_factor.powi(layout.repeat_count as i32),
        };
        log::info!(
            "Rendered {:.1}x{:.1} flag: {} copies, {} stars each",
            layout.page_width,
            layout.page_height,
            summary.passes,
            summary.stars_per_pass
        );
        summary
    }

    /// Record a full run.
    pub fn command_stream(&self) -> CommandStream {
        let mut canvas = RecordingCanvas::new();
        self.render_into(&mut canvas);
        canvas.into_stream()
    }
}

/// Validate `params` and draw the whole run onto `canvas`.
///
/// Nothing is drawn when validation fails.
pub fn render<C: Canvas + ?Sized>(
    params: &FlagParameters,
    canvas: &mut C,
) -> Result<RenderSummary, FlagError> {
    let renderer = FlagRenderer::new(params.clone())?;
    Ok(renderer.render_into(canvas))
}

/// Commands for a single copy of the flag, including the closing shrink.
pub fn render_flag(layout: &DerivedLayout, params: &FlagParameters) -> Vec<DrawCommand> {
    let mut canvas = RecordingCanvas::new();
    canvas.set_canvas_size(layout.page_width, layout.page_height);
    render_pass(&mut canvas, layout, params);
    canvas
        .into_commands()
        .into_iter()
        .skip(1)
        .collect()
}

/// Draw one copy: stripes, canton, stars, shadow, then shrink the canvas
/// toward its centre for the next copy.
pub fn render_pass<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &DerivedLayout,
    params: &FlagParameters,
) {
    draw_stripes(canvas, layout, params);
    draw_canton(canvas, layout, params);
    draw_stars(canvas, layout, params);
    draw_shadow(canvas, layout);
    shrink_canvas(canvas, layout.scale_factor);
}

fn draw_stripes<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &DerivedLayout,
    params: &FlagParameters,
) {
    for index in 0..layout.stripe_count {
        // Stripes are numbered from one, so index 0 is an odd stripe.
        let color = if index % 2 == 0 {
            params.odd_stripe_color
        } else {
            params.even_stripe_color
        };
        let rect = layout.stripe_rect(index);
        canvas.set_fill_color(color);
        canvas.fill_rectangle(rect.x, rect.y, rect.width, rect.height);
    }
}

fn draw_canton<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &DerivedLayout,
    params: &FlagParameters,
) {
    let rect = layout.canton_rect();
    canvas.set_fill_color(params.canton_color);
    canvas.fill_rectangle(rect.x, rect.y, rect.width, rect.height);
}

fn draw_stars<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &DerivedLayout,
    params: &FlagParameters,
) {
    for center in layout.star_centers() {
        draw_star(canvas, center, layout.star_diameter, params.star_color);
    }
}

fn draw_star<C: Canvas + ?Sized>(canvas: &mut C, center: Point, diameter: f64, color: Rgba) {
    canvas.set_fill_color(color);
    for subpath in star_path(center, diameter) {
        canvas.fill_closed_path(&subpath.vertices);
    }
}

fn draw_shadow<C: Canvas + ?Sized>(canvas: &mut C, layout: &DerivedLayout) {
    canvas.set_fill_color(Rgba::SHADOW);
    for rect in layout.shadow_rects() {
        canvas.fill_rectangle(rect.x, rect.y, rect.width, rect.height);
    }
}

fn shrink_canvas<C: Canvas + ?Sized>(canvas: &mut C, factor: f64) {
    let width = canvas.current_canvas_width();
    let height = canvas.current_canvas_height();
    canvas.translate((width - width * factor) / 2.0, (height - height * factor) / 2.0);
    canvas.scale_uniform(factor);
}
