use serde::{Deserialize, Serialize};

use crate::charts::Charts;
use crate::input::ClinicalRecord;
use crate::scores::{Contribution, Endpoint};

pub const DISCLAIMER: &str = "For patient counseling and surveillance planning; not a treatment recommendation.";
pub const CITATION: &str = "COREPEX study (Bizzarri et al., Obstetrics & Gynecology, 2025)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub horizon_years: u32,
    pub value: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointReport {
    pub endpoint: Endpoint,
    pub score: u32,
    pub max_score: u32,
    pub group_id: u8,
    pub group_label: String,
    pub color: String,
    pub estimate: Option<EstimateReport>,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSource {
    pub version: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorepexV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub citation: String,
    pub disclaimer: String,
    pub input: Option<ClinicalRecord>,
    pub endpoints: Vec<EndpointReport>,
    pub estimates: Option<EstimateSource>,
    pub charts: Option<Charts>,
    pub warnings: Vec<String>,
}

impl CorepexV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "corepex".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            citation: CITATION.to_string(),
            disclaimer: DISCLAIMER.to_string(),
            input: None,
            endpoints: Vec::new(),
            estimates: None,
            charts: None,
            warnings: Vec::new(),
        }
    }
}
