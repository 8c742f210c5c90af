use std::fmt::Write;
use crate::enums::feature_category::FeatureCategory;
use crate::enums::output_format::OutputFormat;
use crate::enums::priority::Priority;
use crate::errors::GapResult;
use crate::logger::report_logger::ReportLogger;
use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::deep_analysis_result::DeepAnalysisResult;
use crate::structs::feature_filter::FeatureFilter;

/// Renders a report for files and stdout.
///
/// JSON is always the full `DeepAnalysisResult`; the filter only narrows the
/// feature listing of the human-readable formats.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn render(
        title: &str,
        result: &DeepAnalysisResult,
        filter: &FeatureFilter,
        format: OutputFormat,
    ) -> GapResult<String> {
        match format {
            OutputFormat::Text => Ok(ReportLogger::render_text(title, result, filter)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Markdown => Ok(Self::render_markdown(title, result, filter)),
        }
    }

    pub const fn file_extension(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }

    pub fn file_name(title: &str, format: OutputFormat) -> String {
        let slug: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("{}-gap-report.{}", slug.trim_matches('-'), Self::file_extension(format))
    }

    fn render_markdown(title: &str, result: &DeepAnalysisResult, filter: &FeatureFilter) -> String {
        let summary = AnalysisSummary::from_result(result);
        let mut md = String::new();

        let _ = writeln!(md, "# Feature Gap Report: {title}\n");
        if let Some(scanned_at) = result.scan_result.last_scan_time {
            let _ = writeln!(md, "_Last scan: {}_\n", scanned_at.to_rfc3339());
        }

        let _ = writeln!(md, "## Summary\n");
        let _ = writeln!(md, "| Metric | Value |");
        let _ = writeln!(md, "| --- | --- |");
        let _ = writeln!(md, "| Missing features | {} |", result.total_missing_count);
        let _ = writeln!(md, "| Critical / high | {} |", summary.urgent_count());
        let _ = writeln!(md, "| Estimated hours | {} |", summary.total_estimated_hours);
        let _ = writeln!(md, "| Protected tasks | {} |", result.excluded_tasks.len());
        let _ = writeln!(md, "| Health score | {}% |", result.scan_result.health_score);

        let _ = writeln!(md, "\n## Priorities\n");
        for priority in Priority::ALL {
            let _ = writeln!(md, "- **{}**: {}", priority, result.priority_count(priority));
        }

        let _ = writeln!(md, "\n## Categories\n");
        for category in FeatureCategory::ALL {
            let stats = summary.category_stats(category);
            if stats.count > 0 {
                let _ = writeln!(md, "- **{}**: {} ({}h)", category.label(), stats.count, stats.estimated_hours);
            }
        }

        let _ = writeln!(md, "\n## Missing Features\n");
        let shown = filter.apply(&result.missing_features);
        if shown.is_empty() {
            let _ = writeln!(md, "_No features match._");
        } else {
            let _ = writeln!(md, "| Priority | Feature | Category | Complexity | Hours | Issues |");
            let _ = writeln!(md, "| --- | --- | --- | --- | --- | --- |");
            for feature in shown {
                let issues: Vec<String> = feature.related_issues.iter().map(|n| format!("#{n}")).collect();
                let _ = writeln!(
                    md,
                    "| {} | {} | {} | {} | {} | {} |",
                    feature.priority,
                    escape_cell(&feature.name),
                    feature.category.label(),
                    feature.implementation_complexity,
                    feature.estimated_hours,
                    issues.join(", ")
                );
            }
        }

        let _ = writeln!(md, "\n## Protected Tasks\n");
        if result.excluded_tasks.is_empty() {
            let _ = writeln!(md, "_None found._");
        }
        for task in &result.excluded_tasks {
            let _ = writeln!(md, "- {task}");
        }

        md
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
