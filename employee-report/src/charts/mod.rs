//! Inline SVG chart rendering

pub mod colormap;
pub mod svg;

pub use colormap::{ColorScale, Rgb, COOL_WARM, RISK};
pub use svg::{Anchor, Area, Svg, TextStyle};
