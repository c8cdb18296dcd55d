//! Color scales for chart series and legends
//!
//! Scales are piecewise-linear between fixed stops over `[0, 1]`.

use std::fmt;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Sequence of (position, color) stops with ascending positions in `[0, 1]`
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    stops: &'static [(f64, Rgb)],
}

/// Blue through light grey to red
pub const COOL_WARM: ColorScale = ColorScale {
    stops: &[
        (0.0, Rgb(59, 76, 192)),
        (0.5, Rgb(221, 221, 221)),
        (1.0, Rgb(180, 4, 38)),
    ],
};

/// Green (low risk) through yellow to red (high risk)
pub const RISK: ColorScale = ColorScale {
    stops: &[
        (0.0, Rgb(0, 104, 55)),
        (0.25, Rgb(102, 189, 99)),
        (0.5, Rgb(255, 255, 191)),
        (0.75, Rgb(244, 109, 67)),
        (1.0, Rgb(165, 0, 38)),
    ],
};

impl ColorScale {
    /// Color at `t`, clamped to `[0, 1]`; NaN maps to the first stop
    pub fn at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        for pair in self.stops.windows(2) {
            let (lo, lo_color) = pair[0];
            let (hi, hi_color) = pair[1];
            if t <= hi {
                let span = hi - lo;
                let f = if span > 0.0 { (t - lo) / span } else { 0.0 };
                return lerp(lo_color, hi_color, f);
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    pub fn stops(&self) -> &'static [(f64, Rgb)] {
        self.stops
    }
}

fn lerp(a: Rgb, b: Rgb, f: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
