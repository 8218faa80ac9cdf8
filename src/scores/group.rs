use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scores::weights::{GROUP1_MAX, GROUP2_MAX, GROUP3_MAX};

/// Ordinal COREPEX risk group; declaration order is risk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskGroup {
    Low,
    Intermediate,
    High,
    VeryHigh,
}

impl RiskGroup {
    pub const ALL: [RiskGroup; 4] = [
        RiskGroup::Low,
        RiskGroup::Intermediate,
        RiskGroup::High,
        RiskGroup::VeryHigh,
    ];

    pub fn classify(score: u32) -> Self {
        if score <= GROUP1_MAX {
            RiskGroup::Low
        } else if score <= GROUP2_MAX {
            RiskGroup::Intermediate
        } else if score <= GROUP3_MAX {
            RiskGroup::High
        } else {
            RiskGroup::VeryHigh
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(RiskGroup::Low),
            2 => Some(RiskGroup::Intermediate),
            3 => Some(RiskGroup::High),
            4 => Some(RiskGroup::VeryHigh),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            RiskGroup::Low => 1,
            RiskGroup::Intermediate => 2,
            RiskGroup::High => 3,
            RiskGroup::VeryHigh => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskGroup::Low => "Group 1 (low risk)",
            RiskGroup::Intermediate => "Group 2 (intermediate risk)",
            RiskGroup::High => "Group 3 (high risk)",
            RiskGroup::VeryHigh => "Group 4 (very high risk)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskGroup::Low => "green",
            RiskGroup::Intermediate => "orange",
            RiskGroup::High => "red",
            RiskGroup::VeryHigh => "darkred",
        }
    }
}

impl fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label, display colour and ordinal id for a score.
pub fn risk_group(score: u32) -> (&'static str, &'static str, u8) {
    let group = RiskGroup::classify(score);
    (group.label(), group.color(), group.id())
}
