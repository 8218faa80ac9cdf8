mod loader;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};

use crate::scores::{Endpoint, RiskGroup, SurvivalEstimate};

pub use loader::{load_builtin_v1, load_estimates_tsv, merge_rows, parse_estimates_tsv};

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRow {
    pub endpoint: Endpoint,
    pub group: RiskGroup,
    pub estimate: SurvivalEstimate,
}

/// 5-year survival estimates keyed by endpoint and risk group.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateTable {
    pub version: String,
    pub source: String,
    entries: BTreeMap<(Endpoint, RiskGroup), SurvivalEstimate>,
}

impl EstimateTable {
    pub fn from_rows(version: &str, source: &str, rows: Vec<EstimateRow>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for row in rows {
            entries.insert((row.endpoint, row.group), row.estimate);
        }
        let mut missing = Vec::new();
        for endpoint in Endpoint::ALL {
            for group in RiskGroup::ALL {
                if !entries.contains_key(&(endpoint, group)) {
                    missing.push(format!("{}/{}", endpoint, group.id()));
                }
            }
        }
        if !missing.is_empty() {
            bail!(
                "estimate table {} is incomplete, missing: {}",
                source,
                missing.join(", ")
            );
        }
        Ok(Self {
            version: version.to_string(),
            source: source.to_string(),
            entries,
        })
    }

    pub fn get(&self, endpoint: Endpoint, group: RiskGroup) -> Result<SurvivalEstimate> {
        match self.entries.get(&(endpoint, group)) {
            Some(est) => Ok(*est),
            None => bail!("no {} estimate for group {}", endpoint, group.id()),
        }
    }

    pub fn lookup(&self, endpoint: Endpoint, group_id: u8) -> Result<SurvivalEstimate> {
        let Some(group) = RiskGroup::from_id(group_id) else {
            bail!("risk group id {} out of range (expected 1-4)", group_id);
        };
        self.get(endpoint, group)
    }

    pub fn rows(&self) -> Vec<EstimateRow> {
        self.entries
            .iter()
            .map(|(&(endpoint, group), &estimate)| EstimateRow {
                endpoint,
                group,
                estimate,
            })
            .collect()
    }
}

pub fn load_builtin() -> Result<EstimateTable> {
    let rows = load_builtin_v1()?;
    EstimateTable::from_rows("v1", "built-in", rows)
}

/// Built-in table with the rows of a user TSV laid over it.
pub fn load_with_overlay(path: Option<&Path>) -> Result<EstimateTable> {
    let builtin = load_builtin_v1()?;
    match path {
        None => EstimateTable::from_rows("v1", "built-in", builtin),
        Some(path) => {
            let user = load_estimates_tsv(path)?;
            let merged = merge_rows(builtin, user);
            EstimateTable::from_rows("v1+user", &path.display().to_string(), merged)
        }
    }
}
