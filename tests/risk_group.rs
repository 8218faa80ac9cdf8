use corepex::scores::{RiskGroup, risk_group};

#[test]
fn boundaries_are_exact() {
    assert_eq!(risk_group(0).2, 1);
    assert_eq!(risk_group(25).0, "Group 1 (low risk)");
    assert_eq!(risk_group(26).0, "Group 2 (intermediate risk)");
    assert_eq!(risk_group(50).0, "Group 2 (intermediate risk)");
    assert_eq!(risk_group(51).0, "Group 3 (high risk)");
    assert_eq!(risk_group(75).0, "Group 3 (high risk)");
    assert_eq!(risk_group(76).0, "Group 4 (very high risk)");
    assert_eq!(risk_group(u32::MAX).2, 4);
}

#[test]
fn colors_follow_groups() {
    assert_eq!(risk_group(10), ("Group 1 (low risk)", "green", 1));
    assert_eq!(risk_group(40), ("Group 2 (intermediate risk)", "orange", 2));
    assert_eq!(risk_group(60), ("Group 3 (high risk)", "red", 3));
    assert_eq!(risk_group(100), ("Group 4 (very high risk)", "darkred", 4));
}

#[test]
fn groups_are_ordered() {
    assert!(RiskGroup::Low < RiskGroup::Intermediate);
    assert!(RiskGroup::Intermediate < RiskGroup::High);
    assert!(RiskGroup::High < RiskGroup::VeryHigh);

    let mut prev = RiskGroup::classify(0);
    for score in 1..=120 {
        let g = RiskGroup::classify(score);
        assert!(g >= prev, "classification not monotone at {}", score);
        prev = g;
    }
}

#[test]
fn ids_roundtrip() {
    for g in RiskGroup::ALL {
        assert_eq!(RiskGroup::from_id(g.id()), Some(g));
    }
    assert_eq!(RiskGroup::from_id(0), None);
    assert_eq!(RiskGroup::from_id(5), None);
}
