pub mod html_writer;
pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

pub(crate) fn format_estimate(value: f64, ci_low: f64, ci_high: f64) -> String {
    format!("{:.1}% (95% CI {:.1}\u{2013}{:.1})", value, ci_low, ci_high)
}
