use crate::score::ScoreReport;
use crate::types::SectionCode;
use std::fmt::Write;

/// Per-section display bands. These only pick the marker next to a section
/// line and are independent of the overall status bands.
const PASS_AT: f64 = 8.0;
const WARN_AT: f64 = 6.0;

const RULE_WIDTH: usize = 50;

fn marker(score: f64) -> &'static str {
    if score >= PASS_AT {
        "✅"
    } else if score >= WARN_AT {
        "⚠️"
    } else {
        "❌"
    }
}

/// Score as stored, without re-rounding: `9.0`, `8.4`, `8.25`.
fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}

/// Render `report` as the human-readable text report for `source`.
pub fn render(report: &ScoreReport, source: &str) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 RULEMAP Score Report");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "File: {source}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Section Scores:");
    let _ = writeln!(out, "{rule}");

    for &code in SectionCode::all() {
        let Some(section) = report.section(code) else {
            continue;
        };
        let _ = writeln!(
            out,
            "  {} {}: {}/10 ({})",
            marker(section.score),
            code.heading(),
            fmt_score(section.score),
            section.origin,
        );
        for issue in &section.issues {
            let _ = writeln!(out, "      └─ {issue}");
        }
    }

    let _ = writeln!(out, "{rule}");
    if report.meets_threshold {
        let _ = writeln!(
            out,
            "✅ OVERALL SCORE: {}/10 (meets threshold)",
            fmt_score(report.overall_score)
        );
    } else {
        let _ = writeln!(
            out,
            "❌ OVERALL SCORE: {}/10 (below {} threshold)",
            fmt_score(report.overall_score),
            fmt_score(report.threshold)
        );
    }
    let _ = writeln!(out, "   Status: {}", report.status);
    let _ = writeln!(out);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
