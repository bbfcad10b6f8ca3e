use crate::report::{Report, REPORT_TITLE};

/// Markdown formatter for reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &Report) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!("# {}\n\n", REPORT_TITLE));
        md.push_str(&format!("*Generated {}*\n\n", report.generated_display()));

        // Property table
        md.push_str("## Project Information\n\n");
        md.push_str("| Property | Value |\n");
        md.push_str("|----------|-------|\n");
        for (label, value) in report.property_rows() {
            md.push_str(&format!("| {} | {} |\n", label, escape_cell(&value)));
        }

        let epw = match &report.epw_reference {
            Some(url) => format!("[Download EPW]({})", url),
            None => report.epw_status().to_string(),
        };
        md.push_str(&format!("| EPW File | {} |\n\n", epw));

        md.push_str("## Climate Zone Designation\n\n");
        md.push_str(&format!("{}\n\n", report.designation_text()));

        if report.has_strategies() {
            md.push_str(&format!("## Design Strategies: {}\n\n", report.strategy_heading()));
            for strategy in &report.strategies {
                md.push_str(&format!("### {}\n\n", strategy.name));
                md.push_str(&format!("![{}]({})\n\n", strategy.name, strategy.image_ref));
                md.push_str(&format!("{}\n\n", strategy.description));
            }
        }

        md.push_str("---\n\n");
        md.push_str(&format!(
            "**Classification Standard:** {}\n",
            report.standard.display_name()
        ));

        md
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
