use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::scores::{Endpoint, EndpointResult, SurvivalEstimate};

pub const DEFAULT_HORIZON_MONTHS: u32 = 120;
pub const MAX_HORIZON_MONTHS: u32 = 1200;
const ESTIMATE_MONTHS: f64 = 60.0;
const MIN_SURVIVAL_PCT: f64 = 0.1;

/// Exponential curve through the 5-year estimate; illustrative, not fitted to patient data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve {
    pub endpoint: Endpoint,
    pub months: Vec<u32>,
    pub survival: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub endpoint: Endpoint,
    pub score: u32,
    pub max_score: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub endpoint: Endpoint,
    pub score: u32,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub horizon_months: u32,
    pub curves: Vec<SurvivalCurve>,
    pub bars: Vec<ScoreBar>,
    pub pie: Vec<PieSlice>,
}

pub fn build_charts(results: &[EndpointResult], horizon_months: u32) -> Result<Charts> {
    if horizon_months == 0 {
        bail!("chart horizon must be at least 1 month");
    }
    if horizon_months > MAX_HORIZON_MONTHS {
        bail!(
            "chart horizon {} exceeds {} months",
            horizon_months,
            MAX_HORIZON_MONTHS
        );
    }
    let mut curves = Vec::with_capacity(results.len());
    for r in results {
        let Some(est) = r.estimate else {
            bail!("{} estimate missing, cannot draw survival curve", r.endpoint);
        };
        curves.push(simulate_curve(r.endpoint, &est, horizon_months));
    }
    Ok(Charts {
        horizon_months,
        curves,
        bars: score_bars(results),
        pie: score_pie(results),
    })
}

pub fn simulate_curve(
    endpoint: Endpoint,
    estimate: &SurvivalEstimate,
    horizon_months: u32,
) -> SurvivalCurve {
    let rate = monthly_rate(estimate.value);
    let rate_low = monthly_rate(estimate.ci_low);
    let rate_high = monthly_rate(estimate.ci_high);
    let months: Vec<u32> = (0..=horizon_months).collect();
    let eval = |rate: f64| -> Vec<f64> {
        months
            .iter()
            .map(|&m| 100.0 * (-rate * m as f64).exp())
            .collect()
    };
    let survival = eval(rate);
    let lower = eval(rate_low);
    let upper = eval(rate_high);
    SurvivalCurve {
        endpoint,
        months,
        survival,
        lower,
        upper,
    }
}

// Hazard per month such that S(60) equals the given percentage.
fn monthly_rate(pct: f64) -> f64 {
    if pct >= 100.0 {
        return 0.0;
    }
    let p = pct.max(MIN_SURVIVAL_PCT) / 100.0;
    -p.ln() / ESTIMATE_MONTHS
}

pub fn score_bars(results: &[EndpointResult]) -> Vec<ScoreBar> {
    results
        .iter()
        .map(|r| ScoreBar {
            endpoint: r.endpoint,
            score: r.score,
            max_score: r.endpoint.max_score(),
            color: r.group.color().to_string(),
        })
        .collect()
}

pub fn score_pie(results: &[EndpointResult]) -> Vec<PieSlice> {
    let total: u32 = results.iter().map(|r| r.score).sum();
    results
        .iter()
        .map(|r| PieSlice {
            endpoint: r.endpoint,
            score: r.score,
            fraction: if total == 0 {
                0.0
            } else {
                r.score as f64 / total as f64
            },
        })
        .collect()
}
