use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::estimates::EstimateRow;
use crate::scores::{Endpoint, RiskGroup, SurvivalEstimate};

pub fn load_builtin_v1() -> Result<Vec<EstimateRow>> {
    let content = include_str!("../../assets/estimates/corepex_v1.tsv");
    parse_estimates_tsv(content, "built-in v1")
}

pub fn load_estimates_tsv(path: &Path) -> Result<Vec<EstimateRow>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read estimates TSV {}", path.display()))?;
    parse_estimates_tsv(&content, &path.display().to_string())
}

/// User rows replace built-in rows with the same endpoint and group.
pub fn merge_rows(builtin: Vec<EstimateRow>, user: Vec<EstimateRow>) -> Vec<EstimateRow> {
    if user.is_empty() {
        return builtin;
    }
    let overridden: HashSet<(Endpoint, RiskGroup)> =
        user.iter().map(|r| (r.endpoint, r.group)).collect();
    let mut merged: Vec<EstimateRow> = builtin
        .into_iter()
        .filter(|r| !overridden.contains(&(r.endpoint, r.group)))
        .collect();
    merged.extend(user);
    merged
}

pub fn parse_estimates_tsv(content: &str, source: &str) -> Result<Vec<EstimateRow>> {
    let mut rows = Vec::new();
    let mut seen: HashSet<(Endpoint, RiskGroup)> = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if parts.len() != 5 {
            bail!("{}:{} malformed TSV (expected 5 columns)", source, line_no);
        }
        let endpoint: Endpoint = parts[0]
            .parse()
            .with_context(|| format!("{}:{} invalid endpoint", source, line_no))?;
        let group_id: u8 = parts[1]
            .parse()
            .with_context(|| format!("{}:{} invalid group '{}'", source, line_no, parts[1]))?;
        let group = RiskGroup::from_id(group_id)
            .ok_or_else(|| anyhow::anyhow!("{}:{} group must be 1-4", source, line_no))?;
        let value = parse_percent(parts[2], "value", source, line_no)?;
        let ci_low = parse_percent(parts[3], "ci_low", source, line_no)?;
        let ci_high = parse_percent(parts[4], "ci_high", source, line_no)?;
        if !(ci_low <= value && value <= ci_high) {
            bail!(
                "{}:{} expected ci_low <= value <= ci_high, got {} / {} / {}",
                source,
                line_no,
                ci_low,
                value,
                ci_high
            );
        }
        if !seen.insert((endpoint, group)) {
            bail!(
                "{}:{} duplicate estimate for {} group {}",
                source,
                line_no,
                endpoint,
                group_id
            );
        }
        rows.push(EstimateRow {
            endpoint,
            group,
            estimate: SurvivalEstimate {
                value,
                ci_low,
                ci_high,
            },
        });
    }

    Ok(rows)
}

fn parse_percent(raw: &str, name: &str, source: &str, line_no: usize) -> Result<f64> {
    let v: f64 = raw
        .parse()
        .with_context(|| format!("{}:{} {} is not a number: '{}'", source, line_no, name, raw))?;
    if !v.is_finite() {
        bail!("{}:{} {} must be finite", source, line_no, name);
    }
    if !(0.0..=100.0).contains(&v) {
        bail!("{}:{} {} must be within 0-100", source, line_no, name);
    }
    Ok(v)
}
