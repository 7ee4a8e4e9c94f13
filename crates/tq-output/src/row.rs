//! Plain data row types written by output backends.

use tq_sweep::ExperimentPoint;

/// One results-table row.  Undefined comparisons are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub lambda:            f64,
    pub mu1:               f64,
    pub mu2:               f64,
    pub horizon:           f64,
    pub average_customers: f64,
    pub theoretical_value: Option<f64>,
    pub error_percent:     Option<f64>,
}

impl From<&ExperimentPoint> for ResultRow {
    fn from(p: &ExperimentPoint) -> Self {
        Self {
            lambda:            p.lambda,
            mu1:               p.mu1,
            mu2:               p.mu2,
            horizon:           p.horizon,
            average_customers: p.simulated_average,
            theoretical_value: p.theoretical_average,
            error_percent:     p.error.percent(),
        }
    }
}
