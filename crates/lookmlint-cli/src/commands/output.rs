//! Shared output formatting for lint reports.

use anyhow::Result;
use lookmlint_rules::LintReport;

use crate::OutputFormat;

/// Width of the rule printed under each section title.
const RULE_WIDTH: usize = 50;

/// Print a lint report in the specified format.
pub fn print(report: &LintReport, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    print!("{rendered}");
    Ok(())
}

/// Render a lint report in the specified format.
pub fn render(report: &LintReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

fn render_text(report: &LintReport) -> Result<String> {
    if report.is_empty() {
        return Ok("No issues found!\n".to_string());
    }

    let mut out = String::new();
    for section in report.sections()? {
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&section.body);
        out.push('\n');
    }
    Ok(out)
}
