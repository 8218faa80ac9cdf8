use anyhow::Result;
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.writes_files() {
            return Ok(());
        }
        let out_dir = &ctx.output_paths()?.out_dir;
        fs::create_dir_all(out_dir)?;
        info!(out_dir = %out_dir.display(), "output_dir_ready");
        Ok(())
    }
}
