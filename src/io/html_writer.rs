use std::path::Path;

use anyhow::{Context, Result};

use crate::charts::Charts;
use crate::io::format_estimate;
use crate::schema::v1::CorepexV1;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

pub fn write_html(path: &Path, report: &CorepexV1) -> Result<()> {
    let html = build_html_report(report)?;
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn build_html_report(report: &CorepexV1) -> Result<String> {
    let input = match &report.input {
        Some(r) => format!(
            "<ul><li>Margins: {}</li><li>LVSI: {}</li><li>PE type: {}</li>\
             <li>Lymphadenectomy: {}</li><li>Timing (for OS): {}</li></ul>",
            r.margins, r.lvsi, r.pe_type, r.lymphadenectomy, r.timing
        ),
        None => "<p>No clinical data.</p>".to_string(),
    };

    let mut results = String::new();
    for e in &report.endpoints {
        let name = e.endpoint.short_label();
        results.push_str(&format!(
            "<h3>{} Score: {} &rarr; <span style='color:{}'>{}</span></h3>\n",
            name,
            e.score,
            escape(&e.color),
            escape(&e.group_label)
        ));
        if let Some(est) = &e.estimate {
            results.push_str(&format!(
                "<ul><li>5-year {}: {}</li></ul>\n",
                name,
                format_estimate(est.value, est.ci_low, est.ci_high)
            ));
        }
    }

    let source = report
        .estimates
        .as_ref()
        .map(|s| format!("Estimate table {} ({}).", escape(&s.version), escape(&s.source)))
        .unwrap_or_default();

    let (head_script, charts) = match &report.charts {
        Some(c) => (
            format!("<script src=\"{}\"></script>", PLOTLY_CDN),
            chart_section(c)?,
        ),
        None => (String::new(), String::new()),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>COREPEX Calculator</title>
{head_script}
<style>body{{font-family:sans-serif;max-width:900px;margin:0 auto;padding:20px}}.note{{color:#555;font-size:0.9em}}</style>
</head><body>
<h1>COREPEX Calculator</h1>
<p>Implements the prognostic score from the <b>{citation}</b>.
Displays 5-year <b>Disease-Free Survival (DFS)</b> and <b>Overall Survival (OS)</b> estimates by risk group.</p>
<p>{disclaimer}</p>
<h2>Clinical data</h2>
{input}
<h2>Results</h2>
{results}
{charts}
<p class="note">COREPEX score components: margins, LVSI, PE type, lymphadenectomy (DFS); margins, LVSI, PE type, timing (OS). {source}</p>
<p class="note">{tool} v{version}</p>
</body></html>
"#,
        head_script = head_script,
        citation = escape(&report.citation),
        disclaimer = escape(&report.disclaimer),
        input = input,
        results = results,
        charts = charts,
        source = source,
        tool = escape(&report.tool),
        version = escape(&report.version),
    ))
}

fn chart_section(charts: &Charts) -> Result<String> {
    let mut curve_traces = Vec::new();
    for c in &charts.curves {
        let name = c.endpoint.short_label();
        curve_traces.push(serde_json::json!({
            "type": "scatter", "x": c.months, "y": c.lower,
            "line": {"width": 0}, "showlegend": false, "hoverinfo": "skip"
        }));
        curve_traces.push(serde_json::json!({
            "type": "scatter", "x": c.months, "y": c.upper,
            "fill": "tonexty", "line": {"width": 0}, "showlegend": false, "hoverinfo": "skip"
        }));
        curve_traces.push(serde_json::json!({
            "type": "scatter", "mode": "lines", "x": c.months, "y": c.survival,
            "name": format!("{} (simulated)", name)
        }));
    }
    let bars = serde_json::json!([{
        "type": "bar",
        "x": charts.bars.iter().map(|b| b.endpoint.short_label()).collect::<Vec<_>>(),
        "y": charts.bars.iter().map(|b| b.score).collect::<Vec<_>>(),
        "marker": {"color": charts.bars.iter().map(|b| b.color.as_str()).collect::<Vec<_>>()}
    }]);
    let bar_max = charts.bars.iter().map(|b| b.max_score).max().unwrap_or(100);
    let pie = serde_json::json!([{
        "type": "pie",
        "labels": charts.pie.iter().map(|p| p.endpoint.short_label()).collect::<Vec<_>>(),
        "values": charts.pie.iter().map(|p| p.score).collect::<Vec<_>>()
    }]);

    Ok(format!(
        r#"<h2>Charts</h2>
<p class="note">Illustrative only: curves are exponential simulations through the published 5-year estimates, not patient-level survival data.</p>
<div id="curve" style="height:400px"></div>
<div id="bars" style="height:300px"></div>
<div id="pie" style="height:300px"></div>
<script>
Plotly.newPlot('curve',{curves},{{xaxis:{{title:'Months',range:[0,{horizon}]}},yaxis:{{title:'Survival (%)',range:[0,100]}}}});
Plotly.newPlot('bars',{bars},{{yaxis:{{title:'Score',range:[0,{bar_max}]}}}});
Plotly.newPlot('pie',{pie},{{}});
</script>"#,
        curves = serde_json::to_string(&curve_traces)?,
        horizon = charts.horizon_months,
        bars = serde_json::to_string(&bars)?,
        bar_max = bar_max,
        pie = serde_json::to_string(&pie)?,
    ))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
