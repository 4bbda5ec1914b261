use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Raw inputs for one flag.
///
/// Counts are kept as supplied (possibly fractional slider values) and are
/// rounded during [`derive_layout`](crate::layout::derive_layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagParameters {
    /// Height of the flag in inches.
    pub flag_size: f64,
    /// Width over height.
    pub proportion: f64,
    pub stripe_count: f64,
    pub star_rows: f64,
    pub star_cols: f64,
    pub odd_stripe_color: Rgba,
    pub even_stripe_color: Rgba,
    pub canton_color: Rgba,
    pub star_color: Rgba,
    /// Number of stacked copies drawn in one run.
    pub repeat_count: f64,
}

impl Default for FlagParameters {
    fn default() -> Self {
        Self {
            flag_size: 5.0,
            proportion: 1.9,
            stripe_count: 13.0,
            star_rows: 9.0,
            star_cols: 11.0,
            odd_stripe_color: Rgba::RED,
            even_stripe_color: Rgba::WHITE,
            canton_color: Rgba::BLUE,
            star_color: Rgba::WHITE,
            repeat_count: 1.0,
        }
    }
}

impl FlagParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, flag_size: f64) -> Self {
        self.flag_size = flag_size;
        self
    }

    pub fn with_proportion(mut self, proportion: f64) -> Self {
        self.proportion = proportion;
        self
    }

    pub fn with_stripes(mut self, stripe_count: f64) -> Self {
        self.stripe_count = stripe_count;
        self
    }

    pub fn with_star_grid(mut self, rows: f64, cols: f64) -> Self {
        self.star_rows = rows;
        self.star_cols = cols;
        self
    }

    pub fn with_colors(
        mut self,
        odd_stripe: Rgba,
        even_stripe: Rgba,
        canton: Rgba,
        star: Rgba,
    ) -> Self {
        self.odd_stripe_color = odd_stripe;
        self.even_stripe_color = even_stripe;
        self.canton_color = canton;
        self.star_color = star;
        self
    }

    pub fn with_repeat(mut self, repeat_count: f64) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Snap every numeric field onto its slider tick marks.
    pub fn snapped(mut self) -> Self {
        for spec in PARAMETER_SPECS {
            let field = match spec.name {
                "flagSize" => &mut self.flag_size,
                "proportion" => &mut self.proportion,
                "stripeCount" => &mut self.stripe_count,
                "starRows" => &mut self.star_rows,
                "starCols" => &mut self.star_cols,
                "jasperize" => &mut self.repeat_count,
                _ => continue,
            };
            *field = spec.snap(*field);
        }
        self
    }
}

/// Slider description for one numeric option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub tick_count: u32,
}

impl ParameterSpec {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Distance between neighbouring tick marks.
    pub fn step(&self) -> f64 {
        if self.tick_count < 2 {
            return self.max - self.min;
        }
        (self.max - self.min) / (self.tick_count - 1) as f64
    }

    /// Clamp into range and stop on the nearest tick mark.
    pub fn snap(&self, value: f64) -> f64 {
        let step = self.step();
        let clamped = self.clamp(value);
        if step <= 0.0 {
            return clamped;
        }
        let ticks = ((clamped - self.min) / step).round();
        self.clamp(self.min + ticks * step)
    }

    pub fn find(name: &str) -> Option<&'static ParameterSpec> {
        PARAMETER_SPECS.iter().find(|s| s.name == name)
    }
}

/// Recognised numeric options with their ranges and tick counts.
pub const PARAMETER_SPECS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "flagSize",
        min: 1.0,
        max: 10.0,
        default: 5.0,
        tick_count: 10,
    },
    ParameterSpec {
        name: "proportion",
        min: 1.0,
        max: 3.0,
        default: 1.9,
        tick_count: 21,
    },
    ParameterSpec {
        name: "stripeCount",
        min: 1.0,
        max: 21.0,
        default: 13.0,
        tick_count: 11,
    },
    ParameterSpec {
        name: "starRows",
        min: 1.0,
        max: 21.0,
        default: 9.0,
        tick_count: 11,
    },
    ParameterSpec {
        name: "starCols",
        min: 1.0,
        max: 21.0,
        default: 11.0,
        tick_count: 11,
    },
    ParameterSpec {
        name: "jasperize",
        min: 1.0,
        max: 6.0,
        default: 1.0,
        tick_count: 6,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_option_table() {
        let params = FlagParameters::default();
        let lookup = |name| ParameterSpec::find(name).unwrap().default;
        assert_eq!(params.flag_size, lookup("flagSize"));
        assert_eq!(params.proportion, lookup("proportion"));
        assert_eq!(params.stripe_count, lookup("stripeCount"));
        assert_eq!(params.star_rows, lookup("starRows"));
        assert_eq!(params.star_cols, lookup("starCols"));
        assert_eq!(params.repeat_count, lookup("jasperize"));
    }

    #[test]
    fn test_snap_to_ticks() {
        let stripes = ParameterSpec::find("stripeCount").unwrap();
        assert!((stripes.step() - 2.0).abs() < 1e-10);
        assert_eq!(stripes.snap(12.4), 13.0);
        assert_eq!(stripes.snap(40.0), 21.0);
        assert_eq!(stripes.snap(-3.0), 1.0);

        let proportion = ParameterSpec::find("proportion").unwrap();
        assert!((proportion.snap(1.93) - 1.9).abs() < 1e-10);
    }

    #[test]
    fn test_snapped_parameters() {
        let params = FlagParameters::new()
            .with_size(4.6)
            .with_stripes(8.0)
            .with_repeat(9.0)
            .snapped();
        assert_eq!(params.flag_size, 5.0);
        // 8 sits between ticks 7 and 9; round() goes away from zero
        assert_eq!(params.stripe_count, 9.0);
        assert_eq!(params.repeat_count, 6.0);
    }

    #[test]
    fn test_builder() {
        let params = FlagParameters::new()
            .with_proportion(1.5)
            .with_star_grid(5.0, 6.0)
            .with_colors(Rgba::BLUE, Rgba::WHITE, Rgba::RED, Rgba::BLACK);
        assert_eq!(params.proportion, 1.5);
        assert_eq!((params.star_rows, params.star_cols), (5.0, 6.0));
        assert_eq!(params.canton_color, Rgba::RED);
    }
}
