use crate::input::{ClinicalRecord, Lvsi, Lymphadenectomy, Margins, PeType};
use crate::scores::Contribution;
use crate::scores::weights::{
    DFS_LVSI_POSITIVE, DFS_MARGINS_POSITIVE, DFS_NO_LYMPHADENECTOMY, DFS_PE_TOTAL,
};

/// Disease-free survival score. Timing does not enter the DFS rule.
pub fn corepex_dfs(record: &ClinicalRecord) -> u32 {
    dfs_contributions(record).iter().map(|c| c.points).sum()
}

pub fn dfs_contributions(record: &ClinicalRecord) -> Vec<Contribution> {
    let mut out = Vec::with_capacity(4);
    if record.margins == Margins::Positive {
        out.push(Contribution::new("margins=positive", DFS_MARGINS_POSITIVE));
    }
    if record.lvsi == Lvsi::Positive {
        out.push(Contribution::new("lvsi=positive", DFS_LVSI_POSITIVE));
    }
    if record.pe_type == PeType::Total {
        out.push(Contribution::new("pe_type=total", DFS_PE_TOTAL));
    }
    if record.lymphadenectomy == Lymphadenectomy::No {
        out.push(Contribution::new("lymphadenectomy=no", DFS_NO_LYMPHADENECTOMY));
    }
    out
}
