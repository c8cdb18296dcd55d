//! Recruitment risk model
//!
//! The classifier is trained elsewhere and exported as a small JSON document:
//!
//! ```json
//! { "coefficients": [0.12, -0.34], "intercept": 0.5 }
//! ```
//!
//! Coefficients are ordered like [`FeatureRow::as_array`]. The model is loaded
//! once at startup and shared read-only between requests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, FeatureRow, Result};

/// Number of features in a [`FeatureRow`]
pub const FEATURE_COUNT: usize = 2;

/// Binary classifier scoring recruitment risk
pub trait RiskModel: Send + Sync {
    /// Probability of the positive (at-risk) class for each row, in `[0, 1]`
    fn predict_proba(&self, rows: &[FeatureRow]) -> Vec<f64>;
}

/// Logistic regression over the summed event counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients: coefficients.to_vec(),
            intercept,
        }
    }

    /// Parse and validate an exported model
    pub fn from_json(json: &str) -> Result<Self> {
        let model: LogisticRegression = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load an exported model from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let model = Self::from_json(&json)?;
        info!(
            "Loaded risk model from {} (coefficients={:?}, intercept={})",
            path.display(),
            model.coefficients,
            model.intercept
        );
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(Error::Model(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::Model("model parameters must be finite".to_string()));
        }
        Ok(())
    }

    fn decision(&self, row: &FeatureRow) -> f64 {
        self.coefficients
            .iter()
            .zip(row.as_array())
            .map(|(coef, x)| coef * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl RiskModel for LogisticRegression {
    fn predict_proba(&self, rows: &[FeatureRow]) -> Vec<f64> {
        rows.iter().map(|row| sigmoid(self.decision(row))).collect()
    }
}

/// Logistic function, stable for large |z|
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
