use crate::analyze::analyze_section;
use crate::config::{ScoringConfig, StatusBands};
use crate::document::Document;
use crate::extract::explicit_score;
use crate::types::{ScoreOrigin, SectionCode, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// SectionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub code: SectionCode,
    /// Score from 0.0 to 10.0.
    pub score: f64,
    pub origin: ScoreOrigin,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    /// Whether the section heading was found in the document.
    pub exists: bool,
    /// Only computed for calculated scores of existing sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ids: Option<usize>,
}

impl SectionResult {
    pub fn explicit(code: SectionCode, score: f64) -> Self {
        let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
        if clamped != score {
            tracing::warn!(
                section = %code,
                score,
                "explicit section score out of range, clamping"
            );
        }
        Self {
            code,
            score: clamped,
            origin: ScoreOrigin::Explicit,
            issues: Vec::new(),
            exists: true,
            word_count: None,
            tracking_ids: None,
        }
    }
}

/// Score one section: an author-declared score wins, otherwise fall back to
/// the heuristic analyzer.
pub fn score_section(doc: &Document, code: SectionCode, cfg: &ScoringConfig) -> SectionResult {
    let span = doc.section(code);
    if let Some(score) = span.and_then(explicit_score) {
        tracing::debug!(section = %code, score, "using explicit section score");
        return SectionResult::explicit(code, score);
    }
    analyze_section(code, span, cfg)
}

// ---------------------------------------------------------------------------
// ScoreReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub sections: BTreeMap<SectionCode, SectionResult>,
    pub overall_score: f64,
    pub meets_threshold: bool,
    pub status: Status,
    pub threshold: f64,
}

impl ScoreReport {
    /// Build a report from one result per RULEMAP section. `result_for` is
    /// called exactly once for each code, in section order.
    pub fn aggregate(
        cfg: &ScoringConfig,
        mut result_for: impl FnMut(SectionCode) -> SectionResult,
    ) -> Self {
        let codes = SectionCode::all();
        let sections: BTreeMap<SectionCode, SectionResult> =
            codes.iter().map(|&code| (code, result_for(code))).collect();

        let total: f64 = sections.values().map(|r| r.score).sum();
        let overall_score = round1(total / codes.len() as f64);
        let meets_threshold = overall_score >= cfg.threshold;
        let status = classify(overall_score, &cfg.status);

        tracing::debug!(overall_score, meets_threshold, %status, "aggregated report");

        Self {
            sections,
            overall_score,
            meets_threshold,
            status,
            threshold: cfg.threshold,
        }
    }

    pub fn section(&self, code: SectionCode) -> Option<&SectionResult> {
        self.sections.get(&code)
    }
}

pub fn classify(overall: f64, bands: &StatusBands) -> Status {
    if overall >= bands.ready {
        Status::ReadyForPlanning
    } else if overall >= bands.minor {
        Status::NeedsMinorClarification
    } else if overall >= bands.major {
        Status::NeedsMajorRevision
    } else {
        Status::Incomplete
    }
}

/// Score every RULEMAP section of `doc`.
pub fn score_document(doc: &Document, cfg: &ScoringConfig) -> ScoreReport {
    tracing::debug!(headings = doc.headings().len(), "scoring document");
    ScoreReport::aggregate(cfg, |code| score_section(doc, code, cfg))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::SECTION_NOT_FOUND;

    fn filler(n: usize) -> String {
        vec!["detail"; n].join(" ")
    }

    fn full_doc(body: impl Fn(SectionCode) -> String) -> Document {
        let mut text = String::from("# Feature Spec\n\n");
        for &code in SectionCode::all() {
            text.push_str(&format!("## {}\n\n{}\n\n", code.heading(), body(code)));
        }
        Document::from_text(text)
    }

    fn report_with(scores: [f64; 7]) -> ScoreReport {
        ScoreReport::aggregate(&ScoringConfig::default(), |code| {
            let i = SectionCode::all().iter().position(|&c| c == code).unwrap();
            SectionResult::explicit(code, scores[i])
        })
    }

    #[test]
    fn round1_rounds_half_up() {
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(7.24), 7.2);
        assert_eq!(round1(0.05), 0.1);
        assert_eq!(round1(8.0), 8.0);
    }

    #[test]
    fn explicit_scores_everywhere() {
        let doc = full_doc(|_| "**Section Score**: [9.0]".to_string());
        let report = score_document(&doc, &ScoringConfig::default());
        assert_eq!(report.sections.len(), 7);
        assert_eq!(report.overall_score, 9.0);
        assert!(report.meets_threshold);
        assert_eq!(report.status, Status::ReadyForPlanning);
        for r in report.sections.values() {
            assert_eq!(r.origin, ScoreOrigin::Explicit);
            assert!(r.issues.is_empty());
            assert!(r.word_count.is_none());
        }
    }

    #[test]
    fn explicit_score_skips_heuristics() {
        let doc = full_doc(|code| match code {
            SectionCode::Logic => "[TODO] [TBD] [] **Section Score**: [7.5]".to_string(),
            _ => filler(120),
        });
        let report = score_document(&doc, &ScoringConfig::default());
        let logic = report.section(SectionCode::Logic).unwrap();
        assert_eq!(logic.score, 7.5);
        assert_eq!(logic.origin, ScoreOrigin::Explicit);
        assert!(logic.issues.is_empty());
        let role = report.section(SectionCode::Role).unwrap();
        assert_eq!(role.origin, ScoreOrigin::Calculated);
    }

    #[test]
    fn explicit_score_above_range_is_clamped() {
        let r = SectionResult::explicit(SectionCode::Role, 15.0);
        assert_eq!(r.score, 10.0);
    }

    #[test]
    fn no_headings_is_incomplete() {
        let doc = Document::from_text("Just some prose without any structure.\n");
        let report = score_document(&doc, &ScoringConfig::default());
        assert_eq!(report.overall_score, 0.0);
        assert!(!report.meets_threshold);
        assert_eq!(report.status, Status::Incomplete);
        for r in report.sections.values() {
            assert!(!r.exists);
            assert_eq!(r.origin, ScoreOrigin::Calculated);
            assert_eq!(r.issues, vec![SECTION_NOT_FOUND.to_string()]);
        }
    }

    #[test]
    fn empty_document_still_reports_all_sections() {
        let report = score_document(&Document::from_text(""), &ScoringConfig::default());
        assert_eq!(report.sections.len(), 7);
        assert_eq!(report.overall_score, 0.0);
    }

    #[test]
    fn absent_section_among_present_ones() {
        let mut text = String::new();
        for &code in SectionCode::all() {
            if code != SectionCode::Audience {
                let heading = code.heading();
                text.push_str(&format!("## {heading}\n**Section Score**: [10]\n"));
            }
        }
        let report = score_document(&Document::from_text(text), &ScoringConfig::default());
        let audience = report.section(SectionCode::Audience).unwrap();
        assert_eq!(audience.score, 0.0);
        assert_eq!(audience.issues, vec![SECTION_NOT_FOUND.to_string()]);
        // 60 / 7 = 8.571...
        assert_eq!(report.overall_score, 8.6);
        assert!(report.meets_threshold);
    }

    #[test]
    fn threshold_boundary_exactly_eight() {
        let report = report_with([10.0, 10.0, 10.0, 10.0, 8.0, 8.0, 0.0]);
        assert_eq!(report.overall_score, 8.0);
        assert!(report.meets_threshold);
        assert_eq!(report.status, Status::ReadyForPlanning);
    }

    #[test]
    fn threshold_boundary_seven_point_nine() {
        let report = report_with([10.0, 10.0, 10.0, 10.0, 8.0, 7.3, 0.0]);
        assert_eq!(report.overall_score, 7.9);
        assert!(!report.meets_threshold);
        assert_eq!(report.status, Status::NeedsMinorClarification);
    }

    #[test]
    fn status_bands() {
        let bands = StatusBands::default();
        assert_eq!(classify(10.0, &bands), Status::ReadyForPlanning);
        assert_eq!(classify(6.0, &bands), Status::NeedsMinorClarification);
        assert_eq!(classify(5.9, &bands), Status::NeedsMajorRevision);
        assert_eq!(classify(4.0, &bands), Status::NeedsMajorRevision);
        assert_eq!(classify(3.9, &bands), Status::Incomplete);
        assert_eq!(classify(0.0, &bands), Status::Incomplete);
    }

    #[test]
    fn overridden_threshold() {
        let cfg = ScoringConfig::default().with_threshold(9.5);
        let doc = full_doc(|_| "**Section Score**: [9.0]".to_string());
        let report = score_document(&doc, &cfg);
        assert_eq!(report.threshold, 9.5);
        assert!(!report.meets_threshold);
        assert_eq!(report.status, Status::ReadyForPlanning);
    }

    #[test]
    fn overall_is_plain_mean_of_seven() {
        let doc = full_doc(|code| match code {
            SectionCode::Role => format!("{} [TBD]", filler(20)),
            SectionCode::Mood => "**Section Score**: 6".to_string(),
            _ => filler(120),
        });
        let report = score_document(&doc, &ScoringConfig::default());
        let scores: Vec<f64> = report.sections.values().map(|r| r.score).collect();
        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|s| (0.0..=10.0).contains(s)));
        let mean = scores.iter().sum::<f64>() / 7.0;
        assert_eq!(report.overall_score, round1(mean));
        // R: 10 - 2 (minimal) - 1 (TBD) = 7
        assert_eq!(report.section(SectionCode::Role).unwrap().score, 7.0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let doc = full_doc(|code| format!("{} [TODO {code}] 001-R-001", filler(60)));
        let cfg = ScoringConfig::default();
        assert_eq!(score_document(&doc, &cfg), score_document(&doc, &cfg));
    }

    #[test]
    fn subheading_truncates_explicit_score() {
        let text = "## R - ROLE\nlead in\n### Details\n**Section Score**: [9.0]\n";
        let report = score_document(&Document::from_text(text), &ScoringConfig::default());
        let role = report.section(SectionCode::Role).unwrap();
        assert_eq!(role.origin, ScoreOrigin::Calculated);
        assert_eq!(role.word_count, Some(6));
    }

    #[test]
    fn report_json_uses_letter_keys() {
        let report = report_with([9.0; 7]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"]["R"]["score"], 9.0);
        assert_eq!(json["sections"]["P"]["origin"], "explicit");
        assert_eq!(json["status"], "Ready for Planning");
        assert_eq!(json["overall_score"], 9.0);
    }
}
