use serde::{Deserialize, Serialize};

use crate::error::FlagError;
use crate::geometry::{Point, Rect};
use crate::params::FlagParameters;

/// Points per inch.
pub const INCH: f64 = 72.0;

/// Scale applied to the drawing space after each stacked copy.
pub const SCALE_FACTOR: f64 = 0.78;

/// Shadow length as a fraction of page height.
const SHADOW_DIVISOR: f64 = 30.0;

/// Every geometric quantity the renderer needs, computed once per parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedLayout {
    pub unit: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub stripe_count: u32,
    pub stripe_height: f64,
    pub canton_width: f64,
    pub canton_height: f64,
    pub star_rows: u32,
    pub star_cols: u32,
    pub star_col_spacing: f64,
    pub star_row_spacing: f64,
    pub star_diameter: f64,
    pub shadow_length: f64,
    pub scale_factor: f64,
    pub repeat_count: u32,
}

/// Checkerboard rule: a star sits in a cell when row and column share parity.
pub fn star_present(row: u32, col: u32) -> bool {
    row % 2 == col % 2
}

/// Compute the layout for `params`.
///
/// Fails if a count rounds below one, a size or proportion is not strictly
/// positive, or any numeric field is not finite.
pub fn derive_layout(params: &FlagParameters) -> Result<DerivedLayout, FlagError> {
    let flag_size = positive("flagSize", params.flag_size)?;
    let proportion = positive("proportion", params.proportion)?;
    let stripe_count = count("stripeCount", params.stripe_count)?;
    let star_rows = count("starRows", params.star_rows)?;
    let star_cols = count("starCols", params.star_cols)?;
    let repeat_count = count("jasperize", params.repeat_count)?;

    let unit = flag_size * INCH;
    let page_width = unit * proportion;
    let page_height = unit;

    let stripe_height = page_height / stripe_count as f64;

    // Always a whole number of stripes, whatever the parity of the count.
    let canton_height = stripe_height * ((stripe_count / 2) + 1) as f64;
    let canton_width = (2.0 / 5.0) * page_width;

    let star_col_spacing = canton_width / (star_cols + 1) as f64;
    let star_row_spacing = canton_height / (star_rows + 1) as f64;
    let star_diameter = star_col_spacing.min(star_row_spacing);

    let layout = DerivedLayout {
        unit,
        page_width,
        page_height,
        stripe_count,
        stripe_height,
        canton_width,
        canton_height,
        star_rows,
        star_cols,
        star_col_spacing,
        star_row_spacing,
        star_diameter,
        shadow_length: page_height / SHADOW_DIVISOR,
        scale_factor: SCALE_FACTOR,
        repeat_count,
    };

    log::debug!(
        "Derived layout: page {:.3}x{:.3}, {} stripes, {}x{} star grid, star diameter {:.3}",
        layout.page_width,
        layout.page_height,
        layout.stripe_count,
        layout.star_rows,
        layout.star_cols,
        layout.star_diameter
    );

    Ok(layout)
}

fn positive(name: &'static str, value: f64) -> Result<f64, FlagError> {
    if !value.is_finite() {
        return Err(FlagError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(FlagError::invalid(name, value, "must be greater than zero"));
    }
    Ok(value)
}

fn count(name: &'static str, value: f64) -> Result<u32, FlagError> {
    if !value.is_finite() {
        return Err(FlagError::invalid(name, value, "must be finite"));
    }
    let rounded = value.round_ties_even();
    if rounded < 1.0 {
        return Err(FlagError::invalid(name, value, "must be at least 1"));
    }
    if rounded > u32::MAX as f64 {
        return Err(FlagError::invalid(name, value, "is too large"));
    }
    Ok(rounded as u32)
}

impl DerivedLayout {
    /// Vertical distance between consecutive stripe origins.
    pub fn stripe_step(&self) -> f64 {
        self.stripe_height
    }

    /// Rectangle of stripe `index`, counted from the bottom.
    pub fn stripe_rect(&self, index: u32) -> Rect {
        Rect::new(
            0.0,
            index as f64 * self.stripe_step(),
            self.page_width,
            self.stripe_height,
        )
    }

    /// The canton, anchored at the top-left corner of the page.
    pub fn canton_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.page_height - self.canton_height,
            self.canton_width,
            self.canton_height,
        )
    }

    /// Centre of the first grid cell (row 0, column 0).
    pub fn star_origin(&self) -> Point {
        Point::new(
            self.star_col_spacing,
            self.page_height - self.canton_height + self.star_row_spacing,
        )
    }

    /// Centres of all present stars, bottom row first, left to right.
    pub fn star_centers(&self) -> Vec<Point> {
        let origin = self.star_origin();
        let mut centers = Vec::new();
        let mut y = origin.y;
        for row in 0..self.star_rows {
            let mut x = origin.x;
            for col in 0..self.star_cols {
                if star_present(row, col) {
                    centers.push(Point::new(x, y));
                }
                x += self.star_col_spacing;
            }
            y += self.star_row_spacing;
        }
        centers
    }

    /// Number of stars drawn per copy.
    pub fn star_count(&self) -> usize {
        let rows = self.star_rows as usize;
        let cols = self.star_cols as usize;
        let even_rows = rows.div_ceil(2);
        let odd_rows = rows / 2;
        even_rows * cols.div_ceil(2) + odd_rows * (cols / 2)
    }

    /// Shadow along the bottom edge, then along the right edge.
    pub fn shadow_rects(&self) -> [Rect; 2] {
        let s = self.shadow_length;
        [
            Rect::new(s, -2.0 * s, self.page_width + s, 2.0 * s),
            Rect::new(self.page_width, 0.0, 2.0 * s, self.page_height - s),
        ]
    }
}
