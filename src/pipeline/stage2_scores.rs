use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{
    Endpoint, EndpointScore, corepex_dfs, corepex_os, dfs_contributions, os_contributions,
};

pub struct Stage2Scores;

impl Stage2Scores {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Scores {
    fn name(&self) -> &'static str {
        "stage2_scores"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let record = ctx.record()?;
        let scores = vec![
            EndpointScore {
                endpoint: Endpoint::Dfs,
                score: corepex_dfs(record),
                contributions: dfs_contributions(record),
            },
            EndpointScore {
                endpoint: Endpoint::Os,
                score: corepex_os(record),
                contributions: os_contributions(record),
            },
        ];
        for s in &scores {
            info!(endpoint = %s.endpoint, score = s.score, "score_ready");
        }
        ctx.scores = scores;
        Ok(())
    }
}
