use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{EndpointResult, RiskGroup};

pub struct Stage3Risk;

impl Stage3Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Risk {
    fn name(&self) -> &'static str {
        "stage3_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.scores.is_empty() {
            bail!("scores missing");
        }
        let results: Vec<EndpointResult> = ctx
            .scores
            .iter()
            .map(|s| EndpointResult {
                endpoint: s.endpoint,
                score: s.score,
                group: RiskGroup::classify(s.score),
                estimate: None,
                contributions: s.contributions.clone(),
            })
            .collect();
        for r in &results {
            info!(
                endpoint = %r.endpoint,
                group = r.group.id(),
                "risk_group_ready"
            );
        }
        ctx.results = results;
        Ok(())
    }
}
