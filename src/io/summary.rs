use anyhow::Result;

use crate::ctx::Ctx;
use crate::estimates::EstimateTable;
use crate::io::format_estimate;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let record = ctx.record()?;

    let mut out = String::new();
    out.push_str(&format!("corepex v{}\n", ctx.report.version));
    out.push_str(&format!(
        "Input: margins={}, lvsi={}, pe_type={}, lymphadenectomy={}, timing={}\n",
        record.margins, record.lvsi, record.pe_type, record.lymphadenectomy, record.timing
    ));

    for r in &ctx.results {
        let name = r.endpoint.short_label();
        out.push_str(&format!(
            "{} Score: {} -> {}\n",
            name,
            r.score,
            r.group.label()
        ));
        if let Some(est) = r.estimate {
            out.push_str(&format!(
                "  5-year {}: {}\n",
                name,
                format_estimate(est.value, est.ci_low, est.ci_high)
            ));
        }
        if r.contributions.is_empty() {
            out.push_str("  Factors: none\n");
        } else {
            let parts: Vec<String> = r
                .contributions
                .iter()
                .map(|c| format!("{} (+{})", c.factor, c.points))
                .collect();
            out.push_str(&format!("  Factors: {}\n", parts.join(", ")));
        }
    }

    Ok(out)
}

pub fn format_table(table: &EstimateTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "estimates (version {}, source {}):\n",
        table.version, table.source
    ));
    for row in table.rows() {
        out.push_str(&format!(
            "{}\t{}\t{:.1}\t{:.1}\t{:.1}\n",
            row.endpoint,
            row.group.id(),
            row.estimate.value,
            row.estimate.ci_low,
            row.estimate.ci_high
        ));
    }
    out
}
