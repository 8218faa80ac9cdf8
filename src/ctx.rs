use std::path::PathBuf;

use anyhow::Context;

use crate::charts::{Charts, DEFAULT_HORIZON_MONTHS};
use crate::estimates::EstimateTable;
use crate::input::{ClinicalRecord, PartialRecord};
use crate::schema::v1::CorepexV1;
use crate::scores::{Endpoint, EndpointResult, EndpointScore};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub html_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            json_path: out_dir.join("corepex.json"),
            tsv_path: out_dir.join("corepex.tsv"),
            html_path: out_dir.join("corepex.html"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub form: PartialRecord,
    pub record_path: Option<PathBuf>,
    pub estimates_path: Option<PathBuf>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_html: bool,
    pub charts: bool,
    pub horizon_months: u32,
    pub record: Option<ClinicalRecord>,
    pub scores: Vec<EndpointScore>,
    pub results: Vec<EndpointResult>,
    pub estimates: Option<EstimateTable>,
    pub chart_data: Option<Charts>,
    pub warnings: Vec<String>,
    pub output: Option<OutputPaths>,
    pub report: CorepexV1,
}

impl Ctx {
    pub fn new(
        form: PartialRecord,
        out_dir: Option<PathBuf>,
        estimates_path: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
        write_html: bool,
        tool_version: &str,
    ) -> Self {
        Self {
            form,
            record_path: None,
            estimates_path,
            write_json,
            write_tsv,
            write_html,
            charts: false,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            record: None,
            scores: Vec::new(),
            results: Vec::new(),
            estimates: None,
            chart_data: None,
            warnings: Vec::new(),
            output: out_dir.map(OutputPaths::new),
            report: CorepexV1::empty(tool_version),
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv || self.write_html
    }

    pub fn record(&self) -> anyhow::Result<&ClinicalRecord> {
        self.record.as_ref().context("clinical record not resolved")
    }

    pub fn output_paths(&self) -> anyhow::Result<&OutputPaths> {
        self.output
            .as_ref()
            .context("output directory required for file outputs (--out)")
    }

    pub fn result(&self, endpoint: Endpoint) -> anyhow::Result<&EndpointResult> {
        self.results
            .iter()
            .find(|r| r.endpoint == endpoint)
            .with_context(|| format!("{} result missing", endpoint))
    }
}
