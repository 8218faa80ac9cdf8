// Per-factor points of the published COREPEX rule.

pub const DFS_MARGINS_POSITIVE: u32 = 40;
pub const DFS_LVSI_POSITIVE: u32 = 26;
pub const DFS_PE_TOTAL: u32 = 22;
pub const DFS_NO_LYMPHADENECTOMY: u32 = 12;

pub const OS_MARGINS_POSITIVE: u32 = 27;
pub const OS_LVSI_POSITIVE: u32 = 16;
pub const OS_PE_TOTAL: u32 = 21;
pub const OS_TIMING_PERSISTENCE: u32 = 36;
pub const OS_TIMING_RECURRENCE: u32 = 21;

pub const DFS_MAX: u32 =
    DFS_MARGINS_POSITIVE + DFS_LVSI_POSITIVE + DFS_PE_TOTAL + DFS_NO_LYMPHADENECTOMY;
pub const OS_MAX: u32 = OS_MARGINS_POSITIVE + OS_LVSI_POSITIVE + OS_PE_TOTAL + OS_TIMING_PERSISTENCE;

// Inclusive upper bounds of groups 1-3; anything above is group 4.
pub const GROUP1_MAX: u32 = 25;
pub const GROUP2_MAX: u32 = 50;
pub const GROUP3_MAX: u32 = 75;
