use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_rows(&mut w, ctx)?;
    w.flush()?;
    Ok(())
}

pub fn write_rows<W: Write>(w: &mut W, ctx: &Ctx) -> Result<()> {
    if ctx.results.is_empty() {
        bail!("endpoint results missing");
    }
    writeln!(
        w,
        "endpoint\tscore\tgroup_id\tgroup_label\tcolor\testimate\tci_low\tci_high"
    )?;
    for r in &ctx.results {
        let est = r
            .estimate
            .with_context(|| format!("{} estimate missing", r.endpoint))?;
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{:.1}\t{:.1}\t{:.1}",
            r.endpoint,
            r.score,
            r.group.id(),
            r.group.label(),
            r.group.color(),
            est.value,
            est.ci_low,
            est.ci_high
        )?;
    }
    Ok(())
}
