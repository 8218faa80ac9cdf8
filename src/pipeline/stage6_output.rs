use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{html_writer, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if !ctx.writes_files() {
            info!("stage6_output_ready");
            return Ok(());
        }
        let paths = ctx.output_paths()?.clone();
        if ctx.write_json {
            json_writer::write_json(&paths.json_path, &ctx.report)?;
            info!(path = %paths.json_path.display(), "json_written");
        }
        if ctx.write_tsv {
            tsv_writer::write_tsv(&paths.tsv_path, ctx)?;
            info!(path = %paths.tsv_path.display(), "tsv_written");
        }
        if ctx.write_html {
            html_writer::write_html(&paths.html_path, &ctx.report)?;
            info!(path = %paths.html_path.display(), "html_written");
        }
        info!("stage6_output_ready");
        Ok(())
    }
}
