use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::charts::{DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS};
use crate::input::{Lvsi, Lymphadenectomy, Margins, PartialRecord, PeType, Timing};

#[derive(Debug, Parser)]
#[command(
    name = "corepex",
    version,
    about = "COREPEX prognostic score calculator (DFS/OS risk groups after pelvic exenteration)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Score(ScoreArgs),
    Estimates(EstimatesArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(long, value_enum)]
    pub margins: Option<MarginsArg>,

    #[arg(long, value_enum, help = "Lymphovascular space invasion")]
    pub lvsi: Option<LvsiArg>,

    #[arg(long, value_enum, help = "Pelvic exenteration type")]
    pub pe_type: Option<PeTypeArg>,

    #[arg(long, value_enum)]
    pub lymphadenectomy: Option<LymphadenectomyArg>,

    #[arg(long, value_enum, help = "Timing of exenteration (OS only)")]
    pub timing: Option<TimingArg>,

    #[arg(long, help = "JSON record with the five clinical fields; flags override it")]
    pub record: Option<PathBuf>,

    #[arg(long, help = "Estimates TSV to overlay on the built-in table")]
    pub estimates: Option<PathBuf>,

    #[arg(long, help = "Output directory for --json/--tsv/--html")]
    pub out: Option<PathBuf>,

    #[arg(long, default_value_t = false, requires = "out")]
    pub json: bool,

    #[arg(long, default_value_t = false, requires = "out")]
    pub tsv: bool,

    #[arg(long, default_value_t = false, requires = "out")]
    pub html: bool,

    #[arg(long, default_value_t = false, help = "Build illustrative chart data")]
    pub charts: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_HORIZON_MONTHS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_HORIZON_MONTHS as i64),
        help = "Simulated survival curve horizon (months)"
    )]
    pub horizon_months: u32,
}

impl ScoreArgs {
    pub fn form(&self) -> PartialRecord {
        PartialRecord {
            margins: self.margins.map(Into::into),
            lvsi: self.lvsi.map(Into::into),
            pe_type: self.pe_type.map(Into::into),
            lymphadenectomy: self.lymphadenectomy.map(Into::into),
            timing: self.timing.map(Into::into),
        }
    }
}

#[derive(Debug, Args)]
pub struct EstimatesArgs {
    #[command(subcommand)]
    pub command: EstimatesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EstimatesCommand {
    Show(EstimatesShowArgs),
}

#[derive(Debug, Args)]
pub struct EstimatesShowArgs {
    #[arg(long, help = "Optional estimates TSV to overlay on the built-in table")]
    pub estimates: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Estimates TSV to check")]
    pub estimates: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarginsArg {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LvsiArg {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeTypeArg {
    Anterior,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LymphadenectomyArg {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimingArg {
    Naive,
    Persistence,
    Recurrence,
}

impl From<MarginsArg> for Margins {
    fn from(arg: MarginsArg) -> Self {
        match arg {
            MarginsArg::Negative => Margins::Negative,
            MarginsArg::Positive => Margins::Positive,
        }
    }
}

impl From<LvsiArg> for Lvsi {
    fn from(arg: LvsiArg) -> Self {
        match arg {
            LvsiArg::Negative => Lvsi::Negative,
            LvsiArg::Positive => Lvsi::Positive,
        }
    }
}

impl From<PeTypeArg> for PeType {
    fn from(arg: PeTypeArg) -> Self {
        match arg {
            PeTypeArg::Anterior => PeType::Anterior,
            PeTypeArg::Total => PeType::Total,
        }
    }
}

impl From<LymphadenectomyArg> for Lymphadenectomy {
    fn from(arg: LymphadenectomyArg) -> Self {
        match arg {
            LymphadenectomyArg::Yes => Lymphadenectomy::Yes,
            LymphadenectomyArg::No => Lymphadenectomy::No,
        }
    }
}

impl From<TimingArg> for Timing {
    fn from(arg: TimingArg) -> Self {
        match arg {
            TimingArg::Naive => Timing::Naive,
            TimingArg::Persistence => Timing::Persistence,
            TimingArg::Recurrence => Timing::Recurrence,
        }
    }
}
