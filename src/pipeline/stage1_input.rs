use std::fmt;

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::input::{PartialRecord, load_record_json};
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let base = match &ctx.record_path {
            Some(path) => {
                let from_file = load_record_json(path)?;
                ctx.warnings
                    .extend(override_warnings(&from_file, &ctx.form));
                from_file
            }
            None => PartialRecord::default(),
        };

        let record = base.overlay(ctx.form).complete()?;
        info!(
            margins = %record.margins,
            lvsi = %record.lvsi,
            pe_type = %record.pe_type,
            lymphadenectomy = %record.lymphadenectomy,
            timing = %record.timing,
            "record_ready"
        );
        ctx.report.input = Some(record);
        ctx.record = Some(record);
        Ok(())
    }
}

fn override_warnings(file: &PartialRecord, form: &PartialRecord) -> Vec<String> {
    let mut out = Vec::new();
    push_override(&mut out, "margins", file.margins, form.margins);
    push_override(&mut out, "lvsi", file.lvsi, form.lvsi);
    push_override(&mut out, "pe_type", file.pe_type, form.pe_type);
    push_override(
        &mut out,
        "lymphadenectomy",
        file.lymphadenectomy,
        form.lymphadenectomy,
    );
    push_override(&mut out, "timing", file.timing, form.timing);
    out
}

fn push_override<T>(out: &mut Vec<String>, field: &str, from_file: Option<T>, from_form: Option<T>)
where
    T: PartialEq + fmt::Display,
{
    if let (Some(a), Some(b)) = (from_file, from_form)
        && a != b
    {
        out.push(format!(
            "{} '{}' from record file overridden by flag value '{}'",
            field, a, b
        ));
    }
}
