use corepex::ctx::Ctx;
use corepex::input::{ClinicalRecord, Lvsi, Lymphadenectomy, Margins, PeType, Timing};
use corepex::io::json_writer::build_report;
use corepex::pipeline::Pipeline;
use serde_json::Value;

#[test]
fn json_report_populated() {
    let record = ClinicalRecord {
        margins: Margins::Positive,
        lvsi: Lvsi::Negative,
        pe_type: PeType::Total,
        lymphadenectomy: Lymphadenectomy::Yes,
        timing: Timing::Recurrence,
    };
    let mut ctx = Ctx::new(record.into(), None, None, false, false, false, "0.0.0-test");
    ctx.charts = true;
    ctx.horizon_months = 24;
    Pipeline::evaluation().run(&mut ctx).unwrap();

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "corepex");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["input"]["pe_type"], "total");
    assert_eq!(json["input"]["timing"], "recurrence");

    let endpoints = json["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0]["endpoint"], "dfs");
    assert_eq!(endpoints[0]["score"], 62);
    assert_eq!(endpoints[0]["group_id"], 3);
    assert_eq!(endpoints[0]["color"], "red");
    assert_eq!(endpoints[0]["estimate"]["value"], 22.2);
    assert_eq!(endpoints[1]["endpoint"], "os");
    assert_eq!(endpoints[1]["score"], 69);
    assert_eq!(endpoints[1]["group_label"], "Group 3 (high risk)");
    assert_eq!(endpoints[1]["contributions"].as_array().unwrap().len(), 3);

    assert_eq!(json["estimates"]["source"], "built-in");
    assert_eq!(json["charts"]["horizon_months"], 24);
    assert_eq!(json["charts"]["curves"][0]["months"].as_array().unwrap().len(), 25);
    assert!(matches!(json["warnings"], Value::Array(ref w) if w.is_empty()));
}

#[test]
fn report_requires_evaluation() {
    let record = ClinicalRecord {
        margins: Margins::Negative,
        lvsi: Lvsi::Negative,
        pe_type: PeType::Anterior,
        lymphadenectomy: Lymphadenectomy::Yes,
        timing: Timing::Naive,
    };
    let ctx = Ctx::new(record.into(), None, None, false, false, false, "0.0.0-test");
    assert!(build_report(&ctx).is_err());
}
