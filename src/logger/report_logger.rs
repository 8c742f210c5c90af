use std::fmt::Write;
use crate::enums::feature_category::FeatureCategory;
use crate::enums::priority::Priority;
use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::deep_analysis_result::DeepAnalysisResult;
use crate::structs::feature_filter::FeatureFilter;
use crate::structs::missing_feature::MissingFeature;

const RULE: &str = "═══════════════════════════════════════";

pub struct ReportLogger;

impl ReportLogger {
    pub fn print_report(title: &str, result: &DeepAnalysisResult, filter: &FeatureFilter) {
        println!("{}", Self::render_text(title, result, filter));
    }

    pub fn render_text(title: &str, result: &DeepAnalysisResult, filter: &FeatureFilter) -> String {
        let summary = AnalysisSummary::from_result(result);
        let mut out = String::new();

        let _ = writeln!(out, "\n🔍 FEATURE GAP REPORT: {title}");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "📈 Overview:");
        let _ = writeln!(out, "   Missing Features: {}", result.total_missing_count);
        let _ = writeln!(out, "   From Issues: {}", summary.issue_derived_count);
        let _ = writeln!(out, "   From Catalog: {}", summary.catalog_count);
        let _ = writeln!(out, "   Protected Tasks: {}", result.excluded_tasks.len());
        let _ = writeln!(out, "   Estimated Effort: {}h", summary.total_estimated_hours);
        let _ = writeln!(out, "   Layout Impact: {}", summary.layout_impact_count);
        let _ = writeln!(out, "   Health Score: {}%", result.scan_result.health_score);
        let _ = writeln!(
            out,
            "   Scanned: {} issues, {} pull requests",
            result.scan_result.issues.len(),
            result.scan_result.pull_requests.len()
        );
        if let Some(scanned_at) = result.scan_result.last_scan_time {
            let _ = writeln!(out, "   Last Scan: {}", scanned_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        let _ = writeln!(out, "\n⚡ By Priority:");
        for priority in Priority::ALL {
            let _ = writeln!(out, "   {} {}: {}", priority.emoji(), priority, result.priority_count(priority));
        }

        let _ = writeln!(out, "\n🏷️ By Category:");
        for category in FeatureCategory::ALL {
            let stats = summary.category_stats(category);
            if stats.count > 0 {
                let _ = writeln!(
                    out,
                    "   {}: {} ({}%, {}h)",
                    category.label(),
                    stats.count,
                    stats.percentage,
                    stats.estimated_hours
                );
            }
        }

        let shown = filter.apply(&result.missing_features);
        if filter.is_active() {
            let _ = writeln!(
                out,
                "\n🔧 MISSING FEATURES ({} of {} shown, {}h):",
                shown.len(),
                result.total_missing_count,
                filter.total_hours(&result.missing_features)
            );
        } else {
            let _ = writeln!(out, "\n🔧 MISSING FEATURES ({} total):", shown.len());
        }
        for feature in shown {
            Self::write_feature(&mut out, feature);
        }

        let _ = writeln!(out, "\n🛡️ PROTECTED TASKS:");
        if result.excluded_tasks.is_empty() {
            let _ = writeln!(out, "   None found");
        }
        for task in &result.excluded_tasks {
            let _ = writeln!(out, "   ✅ {task}");
        }

        let _ = writeln!(out, "{RULE}");
        out
    }

    pub fn print_catalog(catalog: &[MissingFeature]) {
        println!("\n📚 KNOWN-GAP CATALOG ({} entries)", catalog.len());
        println!("{RULE}");
        for entry in catalog {
            println!(
                "  {} {} ({}, {}h{})",
                entry.priority.emoji(),
                entry.name,
                entry.category.label(),
                entry.estimated_hours,
                if entry.affects_layout { ", layout" } else { "" }
            );
        }
        let total: u32 = catalog.iter().map(|entry| entry.estimated_hours).sum();
        println!("{RULE}");
        println!("  Total: {total}h");
    }

    fn write_feature(out: &mut String, feature: &MissingFeature) {
        let _ = writeln!(
            out,
            "\n  {} [{}] {} ({})",
            feature.priority.emoji(),
            feature.priority.as_str().to_uppercase(),
            feature.name,
            feature.category.label()
        );
        let _ = writeln!(out, "    {}", feature.description);

        let mut details = format!("{}h · {}", feature.estimated_hours, feature.implementation_complexity);
        if feature.affects_layout {
            details.push_str(" · layout impact");
        }
        if !feature.related_issues.is_empty() {
            let issues: Vec<String> = feature.related_issues.iter().map(|n| format!("#{n}")).collect();
            details.push_str(&format!(" · issues {}", issues.join(", ")));
        }
        let _ = writeln!(out, "    {details}");
    }
}
