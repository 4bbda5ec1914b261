//! SVG backend.
//!
//! The renderer works y-up from the lower-left corner; the document wraps all
//! geometry in a group that flips the y axis so the page reads the right way
//! up. The canvas transform is baked into each element's coordinates.

use std::fmt::Write as _;
use std::io;

use oldglory_core::{FlagParameters, Point, RenderState, Rgba};
use oldglory_renderer::{Canvas, FlagRenderer, RenderSummary};

use crate::error::IoError;

/// Canvas that accumulates SVG elements in memory.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    fill: Rgba,
    state: RenderState,
    body: String,
    element_count: usize,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            fill: Rgba::BLACK,
            state: RenderState::default(),
            body: String::new(),
            element_count: 0,
        }
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let mut doc = String::with_capacity(self.body.len() + 256);
        doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        let _ = writeln!(doc, "<g transform=\"matrix(1 0 0 -1 0 {h})\">");
        doc.push_str(&self.body);
        doc.push_str("</g>\n</svg>\n");
        doc
    }

    fn fill_attrs(&self) -> String {
        let [r, g, b, _] = self.fill.to_rgba8();
        let mut attrs = format!("fill=\"#{:02x}{:02x}{:02x}\"", r, g, b);
        let alpha = self.fill.a.clamp(0.0, 1.0);
        if alpha < 1.0 {
            let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_num(alpha));
        }
        attrs
    }
}

impl Canvas for SvgCanvas {
    fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let origin = self.state.apply(&Point::new(x, y));
        let w = self.state.apply_length(width);
        let h = self.state.apply_length(height);
        let fill = self.fill_attrs();
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(w),
            fmt_num(h),
            fill
        );
        self.element_count += 1;
    }

    fn fill_closed_path(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let p = self.state.apply(p);
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{} {} {}", cmd, fmt_num(p.x), fmt_num(p.y));
        }
        d.push_str(" Z");
        let fill = self.fill_attrs();
        let _ = writeln!(self.body, "<path d=\"{}\" {}/>", d, fill);
        self.element_count += 1;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translate(dx, dy);
    }

    fn scale_uniform(&mut self, factor: f64) {
        self.state.scale_uniform(factor);
    }

    fn current_canvas_width(&self) -> f64 {
        self.width
    }

    fn current_canvas_height(&self) -> f64 {
        self.height
    }
}

/// Render `params` to an SVG document string.
pub fn render_svg(params: &FlagParameters) -> Result<String, IoError> {
    let renderer = FlagRenderer::new(params.clone())?;
    let mut canvas = SvgCanvas::new();
    renderer.render_into(&mut canvas);
    Ok(canvas.finish())
}

/// Writes rendered flags as SVG documents.
pub struct SvgWriter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Validate, render, and write one document, then flush.
    ///
    /// Nothing reaches the writer if the parameters are rejected.
    pub fn write(&mut self, params: &FlagParameters) -> Result<RenderSummary, IoError> {
        let renderer = FlagRenderer::new(params.clone())?;
        self.write_renderer(&renderer)
    }

    /// Render an already validated flag and write it, then flush.
    pub fn write_renderer(&mut self, renderer: &FlagRenderer) -> Result<RenderSummary, IoError> {
        let mut canvas = SvgCanvas::new();
        let summary = renderer.render_into(&mut canvas);
        log::debug!("Writing {} SVG elements", canvas.element_count());
        self.writer.write_all(canvas.finish().as_bytes())?;
        self.writer.flush()?;
        Ok(summary)
    }
}

/// Fixed-point with up to four decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(136.8), "136.8");
        assert_eq!(fmt_num(72.0), "72");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(5.538461538), "5.5385");
    }

    #[test]
    fn test_rect_applies_transform() {
        let mut canvas = SvgCanvas::new();
        canvas.set_canvas_size(100.0, 50.0);
        canvas.translate(10.0, 5.0);
        canvas.scale_uniform(0.5);
        canvas.set_fill_color(Rgba::SHADOW);
        canvas.fill_rectangle(0.0, 0.0, 100.0, 50.0);
        let doc = canvas.finish();
        assert!(doc.contains(
            "<rect x=\"10\" y=\"5\" width=\"50\" height=\"25\" fill=\"#000000\" fill-opacity=\"0.5\"/>"
        ));
        assert!(doc.contains("viewBox=\"0 0 100 50\""));
        assert!(doc.contains("matrix(1 0 0 -1 0 50)"));
    }

    #[test]
    fn test_path_element() {
        let mut canvas = SvgCanvas::new();
        canvas.set_canvas_size(10.0, 10.0);
        canvas.set_fill_color(Rgba::WHITE);
        canvas.fill_closed_path(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ]);
        canvas.fill_closed_path(&[]);
        assert_eq!(canvas.element_count(), 1);
        let doc = canvas.finish();
        assert!(doc.contains("<path d=\"M 0 0 L 4 0 L 2 3 Z\" fill=\"#ffffff\"/>"));
    }

    #[test]
    fn test_writer_counts_elements() {
        let params = FlagParameters::default().with_size(1.0);
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = SvgWriter::new(&mut buffer);
        let summary = writer.write(&params).unwrap();
        assert_eq!(summary.passes, 1);

        let doc = String::from_utf8(buffer).unwrap();
        // 13 stripes, canton, two shadow rects.
        assert_eq!(doc.matches("<rect ").count(), 16);
        // Two subpaths per star.
        assert_eq!(doc.matches("<path ").count(), 100);
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn test_writer_reuses_renderer() {
        let renderer = FlagRenderer::new(FlagParameters::default().with_repeat(2.0)).unwrap();
        let mut first: Vec<u8> = Vec::new();
        let mut second: Vec<u8> = Vec::new();
        let summary = SvgWriter::new(&mut first).write_renderer(&renderer).unwrap();
        SvgWriter::new(&mut second).write(renderer.params()).unwrap();
        assert_eq!(summary.passes, 2);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_translucent_fill_keeps_alpha() {
        let mut canvas = SvgCanvas::new();
        canvas.set_canvas_size(10.0, 10.0);
        canvas.set_fill_color(Rgba::new(1.0, 1.0, 1.0, 0.25));
        canvas.fill_rectangle(0.0, 0.0, 1.0, 1.0);
        assert!(canvas.finish().contains("fill=\"#ffffff\" fill-opacity=\"0.25\""));
    }

    #[test]
    fn test_writer_rejects_without_output() {
        let params = FlagParameters::default().with_proportion(0.0);
        let mut buffer: Vec<u8> = Vec::new();
        let mut writer = SvgWriter::new(&mut buffer);
        let err = writer.write(&params).unwrap_err();
        assert!(matches!(err, IoError::Flag(_)));
        assert!(buffer.is_empty());
    }
}
