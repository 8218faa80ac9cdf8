use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::schema::v1::{CorepexV1, EndpointReport, EstimateReport, EstimateSource};

pub fn build_report(ctx: &Ctx) -> Result<CorepexV1> {
    let record = ctx.record()?;
    if ctx.results.is_empty() {
        bail!("endpoint results missing");
    }

    let endpoints = ctx
        .results
        .iter()
        .map(|r| EndpointReport {
            endpoint: r.endpoint,
            score: r.score,
            max_score: r.endpoint.max_score(),
            group_id: r.group.id(),
            group_label: r.group.label().to_string(),
            color: r.group.color().to_string(),
            estimate: r.estimate.map(|e| EstimateReport {
                horizon_years: 5,
                value: e.value,
                ci_low: e.ci_low,
                ci_high: e.ci_high,
            }),
            contributions: r.contributions.clone(),
        })
        .collect::<Vec<_>>();

    let estimates = ctx.estimates.as_ref().map(|t| EstimateSource {
        version: t.version.clone(),
        source: t.source.clone(),
    });

    let mut report = CorepexV1::empty(&ctx.report.version);
    report.input = Some(*record);
    report.endpoints = endpoints;
    report.estimates = estimates;
    report.charts = ctx.chart_data.clone();
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

pub fn write_json(path: &Path, report: &CorepexV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
