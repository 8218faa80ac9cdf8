use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::estimates::load_with_overlay;
use crate::pipeline::Stage;

pub struct Stage4Estimates;

impl Stage4Estimates {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Estimates {
    fn name(&self) -> &'static str {
        "stage4_estimates"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = load_with_overlay(ctx.estimates_path.as_deref())?;
        if ctx.estimates_path.is_some() {
            ctx.warnings.push(format!(
                "survival estimates overlaid from {} (table {})",
                table.source, table.version
            ));
        }
        for r in &mut ctx.results {
            let est = table.lookup(r.endpoint, r.group.id())?;
            info!(
                endpoint = %r.endpoint,
                value = est.value,
                ci_low = est.ci_low,
                ci_high = est.ci_high,
                "estimate_ready"
            );
            r.estimate = Some(est);
        }
        ctx.estimates = Some(table);
        Ok(())
    }
}
