use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub mod dfs;
pub mod group;
pub mod os;
pub mod weights;

pub use dfs::{corepex_dfs, dfs_contributions};
pub use group::{RiskGroup, risk_group};
pub use os::{corepex_os, os_contributions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Dfs,
    Os,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Dfs, Endpoint::Os];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Dfs => "dfs",
            Endpoint::Os => "os",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Endpoint::Dfs => "DFS",
            Endpoint::Os => "OS",
        }
    }

    pub fn max_score(&self) -> u32 {
        match self {
            Endpoint::Dfs => weights::DFS_MAX,
            Endpoint::Os => weights::OS_MAX,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Endpoint::Dfs),
            "os" => Ok(Endpoint::Os),
            other => bail!("unknown endpoint '{}' (expected dfs or os)", other),
        }
    }
}

/// One scoring term that fired for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub factor: String,
    pub points: u32,
}

impl Contribution {
    pub(crate) fn new(factor: &str, points: u32) -> Self {
        Self {
            factor: factor.to_string(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointScore {
    pub endpoint: Endpoint,
    pub score: u32,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalEstimate {
    pub value: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

/// Score, risk group and reference estimate for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResult {
    pub endpoint: Endpoint,
    pub score: u32,
    pub group: RiskGroup,
    pub estimate: Option<SurvivalEstimate>,
    pub contributions: Vec<Contribution>,
}
