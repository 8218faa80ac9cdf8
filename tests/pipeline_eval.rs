use std::fs;

use corepex::ctx::Ctx;
use corepex::input::{ClinicalRecord, Lvsi, Lymphadenectomy, Margins, PartialRecord, PeType, Timing};
use corepex::pipeline::Pipeline;
use corepex::scores::{Endpoint, RiskGroup};
use tempfile::TempDir;

fn ctx_for(record: ClinicalRecord) -> Ctx {
    Ctx::new(
        record.into(),
        None,
        None,
        false,
        false,
        false,
        "0.0.0-test",
    )
}

fn worst_case() -> ClinicalRecord {
    ClinicalRecord {
        margins: Margins::Positive,
        lvsi: Lvsi::Positive,
        pe_type: PeType::Total,
        lymphadenectomy: Lymphadenectomy::No,
        timing: Timing::Naive,
    }
}

fn best_case() -> ClinicalRecord {
    ClinicalRecord {
        margins: Margins::Negative,
        lvsi: Lvsi::Negative,
        pe_type: PeType::Anterior,
        lymphadenectomy: Lymphadenectomy::Yes,
        timing: Timing::Naive,
    }
}

#[test]
fn very_high_dfs_example() {
    let mut ctx = ctx_for(worst_case());
    Pipeline::evaluation().run(&mut ctx).unwrap();

    let dfs = ctx.result(Endpoint::Dfs).unwrap();
    assert_eq!(dfs.score, 100);
    assert_eq!(dfs.group, RiskGroup::VeryHigh);
    assert_eq!(dfs.group.label(), "Group 4 (very high risk)");
    let est = dfs.estimate.unwrap();
    assert_eq!((est.value, est.ci_low, est.ci_high), (8.0, 0.0, 15.4));

    let os = ctx.result(Endpoint::Os).unwrap();
    assert_eq!(os.score, 64);
    assert_eq!(os.group, RiskGroup::High);
}

#[test]
fn low_os_example() {
    let mut ctx = ctx_for(best_case());
    Pipeline::evaluation().run(&mut ctx).unwrap();

    let os = ctx.result(Endpoint::Os).unwrap();
    assert_eq!(os.score, 0);
    assert_eq!(os.group.label(), "Group 1 (low risk)");
    let est = os.estimate.unwrap();
    assert_eq!((est.value, est.ci_low, est.ci_high), (54.3, 43.1, 65.5));
    assert!(ctx.chart_data.is_none());
}

#[test]
fn evaluation_is_idempotent() {
    let mut a = ctx_for(worst_case());
    a.charts = true;
    Pipeline::evaluation().run(&mut a).unwrap();
    let mut b = ctx_for(worst_case());
    b.charts = true;
    Pipeline::evaluation().run(&mut b).unwrap();

    assert_eq!(a.results, b.results);
    assert_eq!(a.report, b.report);
}

#[test]
fn missing_inputs_fail_before_scoring() {
    let mut ctx = Ctx::new(
        PartialRecord {
            margins: Some(Margins::Positive),
            ..PartialRecord::default()
        },
        None,
        None,
        false,
        false,
        false,
        "0.0.0-test",
    );
    let err = Pipeline::evaluation().run(&mut ctx).unwrap_err();
    assert!(err.to_string().contains("missing clinical input"));
    assert!(ctx.scores.is_empty());
}

#[test]
fn record_file_with_flag_override_warns() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("record.json");
    fs::write(
        &path,
        r#"{"margins":"negative","lvsi":"negative","pe_type":"anterior","lymphadenectomy":"yes","timing":"naive"}"#,
    )
    .unwrap();

    let mut ctx = Ctx::new(
        PartialRecord {
            margins: Some(Margins::Negative),
            timing: Some(Timing::Persistence),
            ..PartialRecord::default()
        },
        None,
        None,
        false,
        false,
        false,
        "0.0.0-test",
    );
    ctx.record_path = Some(path);
    Pipeline::evaluation().run(&mut ctx).unwrap();

    assert_eq!(ctx.record().unwrap().timing, Timing::Persistence);
    assert_eq!(ctx.result(Endpoint::Os).unwrap().score, 36);
    assert_eq!(ctx.warnings.len(), 1);
    assert!(ctx.warnings[0].contains("timing 'naive'"));
}

#[test]
fn file_outputs_are_written() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut ctx = Ctx::new(
        worst_case().into(),
        Some(out.clone()),
        None,
        true,
        true,
        true,
        "0.0.0-test",
    );
    ctx.charts = true;
    Pipeline::evaluation().run(&mut ctx).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("corepex.json")).unwrap()).unwrap();
    assert_eq!(json["endpoints"][0]["score"], 100);
    assert!(json["charts"]["curves"].is_array());
    assert!(out.join("corepex.tsv").exists());
    assert!(out.join("corepex.html").exists());
}
