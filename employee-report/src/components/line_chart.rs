//! Cumulative positive/negative events over time

use async_trait::async_trait;
use chrono::NaiveDate;
use employee_events::EventCountRow;

use super::{DataComponent, RenderContext};
use crate::charts::{Anchor, Area, Svg, TextStyle, COOL_WARM};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 480.0;
const PLOT: Area = Area {
    left: 70.0,
    top: 60.0,
    width: 500.0,
    height: 340.0,
};
const COLOR_BAR: Area = Area {
    left: 610.0,
    top: 60.0,
    width: 14.0,
    height: 340.0,
};
const Y_TICKS: usize = 4;

/// Running totals up to and including `date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub positive: i64,
    pub negative: i64,
}

/// Sort rows by date and accumulate their counts
pub fn cumulative(rows: &[EventCountRow]) -> Vec<CumulativePoint> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|row| row.event_date);

    let mut positive = 0;
    let mut negative = 0;
    sorted
        .into_iter()
        .map(|row| {
            positive += row.positive_events;
            negative += row.negative_events;
            CumulativePoint {
                date: row.event_date,
                positive,
                negative,
            }
        })
        .collect()
}

/// Whole-number gap between y-axis ticks; the top tick is at least `max`
fn tick_step(max: i64) -> i64 {
    let ticks = Y_TICKS as i64;
    ((max.max(1) + ticks - 1) / ticks).max(1)
}

/// Two-series line chart of cumulative event counts
#[derive(Debug, Clone, Default)]
pub struct LineChart;

#[async_trait]
impl DataComponent for LineChart {
    type Data = Vec<CumulativePoint>;

    async fn component_data(&self, ctx: &RenderContext<'_>) -> Vec<CumulativePoint> {
        match ctx.entity_id {
            Some(id) => cumulative(&ctx.store.event_counts(ctx.kind, id).await),
            None => Vec::new(),
        }
    }

    fn build_component(&self, ctx: &RenderContext<'_>, data: Vec<CumulativePoint>) -> String {
        let title = format!("{} Cumulative Events", ctx.kind.display_name());
        render_line_chart(&title, &data)
    }

    fn outer_div(&self, inner: String) -> String {
        format!(r#"<div class="chart line-chart">{}</div>"#, inner)
    }
}

/// Render cumulative points as an SVG line chart
///
/// An empty series still yields the framed axes, title and legends.
pub fn render_line_chart(title: &str, points: &[CumulativePoint]) -> String {
    let mut svg = Svg::new(WIDTH, HEIGHT);
    let positive_color = COOL_WARM.at(0.8).to_string();
    let negative_color = COOL_WARM.at(0.2).to_string();

    let values = points.iter().flat_map(|p| [p.positive, p.negative]);
    let min_value = values.clone().min().unwrap_or(0);
    let max_value = values.max().unwrap_or(0);
    let step = tick_step(max_value);
    let y_max = (step * Y_TICKS as i64) as f64;

    let first = points.first().map(|p| p.date);
    let span_days = match (first, points.last()) {
        (Some(first), Some(last)) => (last.date - first).num_days(),
        _ => 0,
    };
    let x_of = |date: NaiveDate| -> f64 {
        match first {
            Some(first) if span_days > 0 => {
                PLOT.x_at((date - first).num_days() as f64 / span_days as f64)
            }
            _ => PLOT.x_at(0.5),
        }
    };

    // Horizontal gridlines with count labels
    for i in 0..=Y_TICKS {
        let f = i as f64 / Y_TICKS as f64;
        let y = PLOT.y_at(f);
        svg.line(PLOT.left, y, PLOT.right(), y, "#e0e0e0", 1.0);
        svg.text(
            PLOT.left - 8.0,
            y + 4.0,
            &(step * i as i64).to_string(),
            TextStyle::new(11.0).anchor(Anchor::End),
        );
    }

    // Date labels: first, middle and last point
    let mut labelled: Vec<&CumulativePoint> = Vec::new();
    if let Some(p) = points.first() {
        labelled.push(p);
    }
    if points.len() > 2 {
        labelled.push(&points[points.len() / 2]);
    }
    if points.len() > 1 {
        labelled.push(&points[points.len() - 1]);
    }
    for p in labelled {
        svg.text(
            x_of(p.date),
            PLOT.bottom() + 18.0,
            &p.date.format("%Y-%m-%d").to_string(),
            TextStyle::new(11.0).anchor(Anchor::Middle),
        );
    }

    let positive: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (x_of(p.date), PLOT.y_at(p.positive as f64 / y_max)))
        .collect();
    let negative: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (x_of(p.date), PLOT.y_at(p.negative as f64 / y_max)))
        .collect();
    svg.polyline(&positive, &positive_color, 2.5);
    svg.polyline(&negative, &negative_color, 2.5);

    svg.frame(PLOT);

    // Series legend, top-left inside the plot
    let legend_x = PLOT.left + 12.0;
    for (i, (label, color)) in [("Positive", &positive_color), ("Negative", &negative_color)]
        .into_iter()
        .enumerate()
    {
        let y = PLOT.top + 18.0 + i as f64 * 18.0;
        svg.line(legend_x, y - 4.0, legend_x + 24.0, y - 4.0, color, 2.5);
        svg.text(legend_x + 30.0, y, label, TextStyle::new(12.0));
    }

    svg.color_bar(
        "cumulative-intensity",
        COLOR_BAR,
        &COOL_WARM,
        &min_value.to_string(),
        &max_value.to_string(),
        "Cumulative Count Intensity",
    );

    svg.text(
        PLOT.x_at(0.5),
        PLOT.top - 24.0,
        title,
        TextStyle::new(20.0).anchor(Anchor::Middle),
    );
    svg.text(
        PLOT.x_at(0.5),
        PLOT.bottom() + 44.0,
        "Event Date",
        TextStyle::new(12.0).anchor(Anchor::Middle),
    );
    svg.text(
        PLOT.left - 48.0,
        PLOT.top + PLOT.height / 2.0,
        "Event Count",
        TextStyle::new(12.0).anchor(Anchor::Middle).rotate(-90.0),
    );

    svg.finish()
}
