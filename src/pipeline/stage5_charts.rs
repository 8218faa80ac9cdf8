use anyhow::Result;
use tracing::info;

use crate::charts::build_charts;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage5Charts;

impl Stage5Charts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Charts {
    fn name(&self) -> &'static str {
        "stage5_charts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.charts {
            return Ok(());
        }
        let charts = build_charts(&ctx.results, ctx.horizon_months)?;
        info!(
            horizon_months = charts.horizon_months,
            curves = charts.curves.len(),
            "charts_ready"
        );
        ctx.chart_data = Some(charts);
        Ok(())
    }
}
