//! Minimal SVG writer for the dashboard charts

use std::fmt::Write;

use super::colormap::ColorScale;
use crate::html::escape;

/// Text anchor for [`Svg::text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Text styling for [`Svg::text`]
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f64,
    pub anchor: Anchor,
    pub bold: bool,
    /// Rotation in degrees around the text origin
    pub rotate: Option<f64>,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            anchor: Anchor::Start,
            bold: false,
            rotate: None,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Rectangle in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X coordinate at fraction `f` of the width
    pub fn x_at(&self, f: f64) -> f64 {
        self.left + self.width * f
    }

    /// Y coordinate at fraction `f` of the height, measured from the bottom
    pub fn y_at(&self, f: f64) -> f64 {
        self.bottom() - self.height * f
    }
}

/// SVG document under construction
pub struct Svg {
    width: f64,
    height: f64,
    defs: String,
    body: String,
}

// fmt::Write into a String never fails
impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, width
        );
    }

    pub fn rect(&mut self, area: Area, fill: &str, stroke: Option<&str>) {
        let stroke = stroke
            .map(|s| format!(r#" stroke="{}" stroke-width="1""#, s))
            .unwrap_or_default();
        let _ = write!(
            self.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"{}/>"#,
            area.left, area.top, area.width, area.height, fill, stroke
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.is_empty() {
            return;
        }
        let points = points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points, stroke, width
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle) {
        let weight = if style.bold { r#" font-weight="bold""# } else { "" };
        let transform = style
            .rotate
            .map(|deg| format!(r#" transform="rotate({} {:.1} {:.1})""#, deg, x, y))
            .unwrap_or_default();
        let _ = write!(
            self.body,
            r#"<text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="{}" fill="black"{}{}>{}</text>"#,
            x,
            y,
            style.size,
            style.anchor.as_str(),
            weight,
            transform,
            escape(content)
        );
    }

    /// Black border around the plot area
    pub fn frame(&mut self, area: Area) {
        self.rect(area, "none", Some("black"));
    }

    /// Vertical color bar for `scale`, low values at the bottom
    ///
    /// `id` must be unique within the page since gradients are referenced by id.
    pub fn color_bar(
        &mut self,
        id: &str,
        area: Area,
        scale: &ColorScale,
        low_label: &str,
        high_label: &str,
        caption: &str,
    ) {
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{}" x1="0" y1="1" x2="0" y2="0">"#,
            id
        );
        for (offset, color) in scale.stops() {
            let _ = write!(
                self.defs,
                r#"<stop offset="{:.0}%" stop-color="{}"/>"#,
                offset * 100.0,
                color
            );
        }
        self.defs.push_str("</linearGradient>");

        self.rect(area, &format!("url(#{})", id), Some("black"));

        let label_x = area.right() + 6.0;
        self.text(label_x, area.bottom(), low_label, TextStyle::new(11.0));
        self.text(label_x, area.top + 10.0, high_label, TextStyle::new(11.0));

        let caption_x = area.right() + 44.0;
        let caption_y = area.top + area.height / 2.0;
        self.text(
            caption_x,
            caption_y,
            caption,
            TextStyle::new(12.0).anchor(Anchor::Middle).rotate(90.0),
        );
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img"><defs>{defs}</defs><rect x="0" y="0" width="{w}" height="{h}" fill="white"/>{body}</svg>"#,
            w = self.width,
            h = self.height,
            defs = self.defs,
            body = self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::colormap::RISK;

    #[test]
    fn test_area_coordinates() {
        let area = Area {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(area.x_at(0.5), 60.0);
        assert_eq!(area.y_at(0.0), 70.0);
        assert_eq!(area.y_at(1.0), 20.0);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = Svg::new(100.0, 100.0);
        svg.text(0.0, 0.0, "<b>&", TextStyle::new(10.0));
        let out = svg.finish();
        assert!(out.contains("&lt;b&gt;&amp;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_empty_polyline_draws_nothing() {
        let mut svg = Svg::new(100.0, 100.0);
        svg.polyline(&[], "red", 2.0);
        assert!(!svg.finish().contains("polyline"));
    }

    #[test]
    fn test_color_bar_defines_gradient() {
        let mut svg = Svg::new(200.0, 200.0);
        let area = Area {
            left: 10.0,
            top: 10.0,
            width: 12.0,
            height: 100.0,
        };
        svg.color_bar("risk-scale", area, &RISK, "0", "1", "Risk");
        let out = svg.finish();
        assert!(out.contains(r#"<linearGradient id="risk-scale""#));
        assert!(out.contains(r#"fill="url(#risk-scale)""#));
        assert_eq!(out.matches("<stop ").count(), RISK.stops().len());
    }
}
