//! CLI presentation: text formatting of run results.

use crate::generation::{CheckReport, GenerateOutcome};

pub fn format_generate_outcome(outcome: &GenerateOutcome, dry_run: bool) -> String {
    let summary = &outcome.summary;
    let mut s = format!(
        "Generated {} snippets ({} from templates, {} alternative shortcuts)",
        summary.total(),
        summary.generated,
        summary.alternative_shortcuts
    );
    if dry_run {
        s.push_str("\n  Dry run: nothing written");
        for snippet in &outcome.snippets {
            s.push_str(&format!("\n  - {} ({})", snippet.title, snippet.shortcut));
        }
    } else {
        s.push_str(&format!("\n  Written: {}", summary.written));
    }
    if !summary.failures.is_empty() {
        s.push_str(&format!("\n\nErrors ({}):", summary.failures.len()));
        for failure in &summary.failures {
            s.push_str(&format!("\n  - {}", failure.message));
        }
    }
    s
}

pub fn format_check_report(report: &CheckReport) -> String {
    if report.is_clean() {
        return format!("Check passed: {} templates", report.checked);
    }
    let mut s = format!(
        "Check failed: {} of {} templates have problems",
        report.problems.len(),
        report.checked
    );
    for problem in &report.problems {
        s.push_str(&format!("\n  - {}", problem));
    }
    s
}
