use oldglory_core::{Point, Rgba};

/// The drawing surface the flag renderer talks to.
///
/// Coordinates are y-up with the origin at the lower-left of the page.
/// `translate` and `scale_uniform` affect everything drawn afterwards and
/// compound with earlier calls.
pub trait Canvas {
    fn set_canvas_size(&mut self, width: f64, height: f64);

    fn set_fill_color(&mut self, color: Rgba);

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill a polygon; the last point connects back to the first.
    fn fill_closed_path(&mut self, points: &[Point]);

    fn translate(&mut self, dx: f64, dy: f64);

    fn scale_uniform(&mut self, factor: f64);

    /// Page width as set by `set_canvas_size`.
    fn current_canvas_width(&self) -> f64;

    /// Page height as set by `set_canvas_size`.
    fn current_canvas_height(&self) -> f64;
}
