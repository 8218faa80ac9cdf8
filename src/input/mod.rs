use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Margins {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lvsi {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeType {
    Anterior,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lymphadenectomy {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Naive,
    Persistence,
    Recurrence,
}

/// Clinical inputs for one evaluation. Both scores read from the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicalRecord {
    pub margins: Margins,
    pub lvsi: Lvsi,
    pub pe_type: PeType,
    pub lymphadenectomy: Lymphadenectomy,
    pub timing: Timing,
}

/// Record fields as collected from the form or a record file; any may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialRecord {
    pub margins: Option<Margins>,
    pub lvsi: Option<Lvsi>,
    pub pe_type: Option<PeType>,
    pub lymphadenectomy: Option<Lymphadenectomy>,
    pub timing: Option<Timing>,
}

impl PartialRecord {
    /// Fields set in `other` win.
    pub fn overlay(self, other: PartialRecord) -> Self {
        Self {
            margins: other.margins.or(self.margins),
            lvsi: other.lvsi.or(self.lvsi),
            pe_type: other.pe_type.or(self.pe_type),
            lymphadenectomy: other.lymphadenectomy.or(self.lymphadenectomy),
            timing: other.timing.or(self.timing),
        }
    }

    pub fn complete(self) -> Result<ClinicalRecord> {
        let mut missing = Vec::new();
        if self.margins.is_none() {
            missing.push("margins");
        }
        if self.lvsi.is_none() {
            missing.push("lvsi");
        }
        if self.pe_type.is_none() {
            missing.push("pe_type");
        }
        if self.lymphadenectomy.is_none() {
            missing.push("lymphadenectomy");
        }
        if self.timing.is_none() {
            missing.push("timing");
        }
        match (
            self.margins,
            self.lvsi,
            self.pe_type,
            self.lymphadenectomy,
            self.timing,
        ) {
            (Some(margins), Some(lvsi), Some(pe_type), Some(lymphadenectomy), Some(timing)) => {
                Ok(ClinicalRecord {
                    margins,
                    lvsi,
                    pe_type,
                    lymphadenectomy,
                    timing,
                })
            }
            _ => bail!("missing clinical input(s): {}", missing.join(", ")),
        }
    }
}

impl From<ClinicalRecord> for PartialRecord {
    fn from(record: ClinicalRecord) -> Self {
        Self {
            margins: Some(record.margins),
            lvsi: Some(record.lvsi),
            pe_type: Some(record.pe_type),
            lymphadenectomy: Some(record.lymphadenectomy),
            timing: Some(record.timing),
        }
    }
}

pub fn load_record_json(path: &Path) -> Result<PartialRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record {}", path.display()))?;
    parse_record_json(&content).with_context(|| format!("invalid record {}", path.display()))
}

pub fn parse_record_json(content: &str) -> Result<PartialRecord> {
    let record: PartialRecord = serde_json::from_str(content)?;
    Ok(record)
}

macro_rules! choice {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self> {
                let value = s.trim().to_ascii_lowercase();
                $(
                    if value == $text {
                        return Ok($ty::$variant);
                    }
                )+
                let allowed: &[&str] = &[$($text),+];
                bail!(
                    "invalid {} '{}' (expected one of: {})",
                    $field,
                    s.trim(),
                    allowed.join(", ")
                )
            }
        }
    };
}

choice!(Margins, "margins", { Negative => "negative", Positive => "positive" });
choice!(Lvsi, "lvsi", { Negative => "negative", Positive => "positive" });
choice!(PeType, "pe_type", { Anterior => "anterior", Total => "total" });
choice!(Lymphadenectomy, "lymphadenectomy", { Yes => "yes", No => "no" });
choice!(Timing, "timing", {
    Naive => "naive",
    Persistence => "persistence",
    Recurrence => "recurrence",
});
