//! Predicted recruitment risk bar

use std::sync::Arc;

use async_trait::async_trait;
use employee_events::{EntityKind, RiskModel};

use super::{DataComponent, RenderContext};
use crate::charts::{Anchor, Area, Svg, TextStyle, RISK};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const PLOT: Area = Area {
    left: 40.0,
    top: 70.0,
    width: 540.0,
    height: 160.0,
};
const COLOR_BAR: Area = Area {
    left: 610.0,
    top: 70.0,
    width: 14.0,
    height: 160.0,
};
const X_TICKS: usize = 5;

/// Collapse per-employee probabilities into the value shown for the entity
///
/// A team shows the mean over its members; an employee shows its single
/// probability. `None` when there is nothing to score.
pub fn risk_score(kind: EntityKind, probabilities: &[f64]) -> Option<f64> {
    let score = match kind {
        EntityKind::Team => {
            if probabilities.is_empty() {
                return None;
            }
            probabilities.iter().sum::<f64>() / probabilities.len() as f64
        }
        EntityKind::Employee => *probabilities.first()?,
    };
    Some(score.clamp(0.0, 1.0))
}

/// Horizontal bar showing the predicted risk of the selected entity
#[derive(Clone)]
pub struct BarChart {
    model: Arc<dyn RiskModel>,
}

impl BarChart {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl DataComponent for BarChart {
    type Data = Option<f64>;

    async fn component_data(&self, ctx: &RenderContext<'_>) -> Option<f64> {
        let id = ctx.entity_id?;
        let rows = ctx.store.model_data(ctx.kind, id).await;
        let probabilities = self.model.predict_proba(&rows);
        risk_score(ctx.kind, &probabilities)
    }

    fn build_component(&self, _ctx: &RenderContext<'_>, data: Option<f64>) -> String {
        render_bar_chart(data)
    }

    fn outer_div(&self, inner: String) -> String {
        format!(r#"<div class="chart bar-chart">{}</div>"#, inner)
    }
}

/// Render the risk value as a single colored bar on a 0..1 axis
///
/// `None` leaves the axis empty.
pub fn render_bar_chart(risk: Option<f64>) -> String {
    let mut svg = Svg::new(WIDTH, HEIGHT);

    for i in 0..=X_TICKS {
        let f = i as f64 / X_TICKS as f64;
        let x = PLOT.x_at(f);
        svg.line(x, PLOT.top, x, PLOT.bottom(), "#e0e0e0", 1.0);
        svg.text(
            x,
            PLOT.bottom() + 18.0,
            &format!("{:.1}", f),
            TextStyle::new(11.0).anchor(Anchor::Middle),
        );
    }

    if let Some(risk) = risk {
        let bar_height = PLOT.height * 0.6;
        let bar = Area {
            left: PLOT.left,
            top: PLOT.top + (PLOT.height - bar_height) / 2.0,
            width: PLOT.width * risk,
            height: bar_height,
        };
        svg.rect(bar, &RISK.at(risk).to_string(), Some("black"));
        svg.text(
            PLOT.x_at(risk) + 6.0,
            PLOT.top + PLOT.height / 2.0 + 5.0,
            &format_percent(risk),
            TextStyle::new(14.0).bold(),
        );
    }

    svg.frame(PLOT);

    svg.color_bar(
        "risk-level",
        COLOR_BAR,
        &RISK,
        "0",
        "1",
        "Risk Level (0 = Low, 1 = High)",
    );

    svg.text(
        PLOT.x_at(0.5),
        PLOT.top - 30.0,
        "Predicted Recruitment Risk",
        TextStyle::new(20.0).anchor(Anchor::Middle),
    );

    svg.finish()
}

/// `0.4567` → `"45.67%"`
fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::empty_store;
    use crate::components::Component;
    use employee_events::{FeatureRow, LogisticRegression};

    struct Constant(f64);

    impl RiskModel for Constant {
        fn predict_proba(&self, rows: &[FeatureRow]) -> Vec<f64> {
            vec![self.0; rows.len()]
        }
    }

    #[test]
    fn test_team_score_is_member_mean() {
        let probs = [0.2, 0.4, 0.9];
        let score = risk_score(EntityKind::Team, &probs).unwrap();
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_employee_score_is_single_probability() {
        assert_eq!(risk_score(EntityKind::Employee, &[0.73]), Some(0.73));
    }

    #[test]
    fn test_nothing_to_score() {
        assert_eq!(risk_score(EntityKind::Team, &[]), None);
        assert_eq!(risk_score(EntityKind::Employee, &[]), None);
    }

    #[test]
    fn test_score_in_unit_interval() {
        let model = LogisticRegression::new([-0.9, 1.3], 0.4);
        let rows: Vec<FeatureRow> = (0..50)
            .map(|i| FeatureRow {
                positive_events: (i * 7 % 40) as f64,
                negative_events: (i * 3 % 25) as f64,
            })
            .collect();
        let probs = model.predict_proba(&rows);

        for kind in EntityKind::ALL {
            let score = risk_score(kind, &probs).unwrap();
            assert!((0.0..=1.0).contains(&score));
        }
        for p in &probs {
            let score = risk_score(EntityKind::Employee, &[*p]).unwrap();
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.4567), "45.67%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_bar_colored_by_risk() {
        let svg = render_bar_chart(Some(0.25));
        assert!(svg.contains("25.00%"));
        assert!(svg.contains(&format!(r#"fill="{}""#, RISK.at(0.25))));
        assert!(svg.contains("Predicted Recruitment Risk"));
        assert!(svg.contains("Risk Level (0 = Low, 1 = High)"));
    }

    #[test]
    fn test_no_risk_draws_no_bar() {
        let svg = render_bar_chart(None);
        assert!(!svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains("Predicted Recruitment Risk"));
    }

    #[tokio::test]
    async fn test_without_selection_model_is_not_consulted() {
        let (_dir, store) = empty_store();
        let chart = BarChart::new(Arc::new(Constant(0.9)));
        let ctx = RenderContext::new(&store, EntityKind::Employee, None);

        assert_eq!(chart.component_data(&ctx).await, None);
        assert!(chart.render(&ctx).await.starts_with(r#"<div class="chart bar-chart">"#));
    }
}
