use crate::input::{ClinicalRecord, Lvsi, Margins, PeType, Timing};
use crate::scores::Contribution;
use crate::scores::weights::{
    OS_LVSI_POSITIVE, OS_MARGINS_POSITIVE, OS_PE_TOTAL, OS_TIMING_PERSISTENCE,
    OS_TIMING_RECURRENCE,
};

/// Overall survival score. Lymphadenectomy does not enter the OS rule.
pub fn corepex_os(record: &ClinicalRecord) -> u32 {
    os_contributions(record).iter().map(|c| c.points).sum()
}

pub fn os_contributions(record: &ClinicalRecord) -> Vec<Contribution> {
    let mut out = Vec::with_capacity(4);
    if record.margins == Margins::Positive {
        out.push(Contribution::new("margins=positive", OS_MARGINS_POSITIVE));
    }
    if record.lvsi == Lvsi::Positive {
        out.push(Contribution::new("lvsi=positive", OS_LVSI_POSITIVE));
    }
    if record.pe_type == PeType::Total {
        out.push(Contribution::new("pe_type=total", OS_PE_TOTAL));
    }
    match record.timing {
        Timing::Naive => {}
        Timing::Persistence => {
            out.push(Contribution::new("timing=persistence", OS_TIMING_PERSISTENCE));
        }
        Timing::Recurrence => {
            out.push(Contribution::new("timing=recurrence", OS_TIMING_RECURRENCE));
        }
    }
    out
}
