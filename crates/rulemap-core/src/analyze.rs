use crate::config::{ContentLimits, ScoringConfig};
use crate::score::{round1, SectionResult, MAX_SCORE, MIN_SCORE};
use crate::types::{ScoreOrigin, SectionCode};
use regex::Regex;
use std::sync::OnceLock;

pub const SECTION_NOT_FOUND: &str = "Section not found";

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static CLARIFICATION_RE: OnceLock<Regex> = OnceLock::new();
static TODO_RE: OnceLock<Regex> = OnceLock::new();
static TBD_RE: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
static TRACKING_ID_RE: OnceLock<Regex> = OnceLock::new();

fn clarification_re() -> &'static Regex {
    CLARIFICATION_RE.get_or_init(|| Regex::new(r"(?i)\[NEEDS CLARIFICATION").unwrap())
}

fn todo_re() -> &'static Regex {
    TODO_RE.get_or_init(|| Regex::new(r"(?i)\[TODO").unwrap())
}

fn tbd_re() -> &'static Regex {
    TBD_RE.get_or_init(|| Regex::new(r"(?i)\[(?:TBD|TBA)\]").unwrap())
}

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\[\s*\]|\[X+\]|\[\.+\]").unwrap())
}

fn tracking_id_re() -> &'static Regex {
    TRACKING_ID_RE.get_or_init(|| Regex::new(r"\d{3}-[RTQDIAM]-\d{3}").unwrap())
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

/// Raw pattern counts over one section span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub clarifications: usize,
    pub todos: usize,
    pub tbds: usize,
    pub placeholders: usize,
    pub words: usize,
    pub tracking_ids: usize,
}

impl Signals {
    pub fn scan(text: &str) -> Self {
        Self {
            clarifications: clarification_re().find_iter(text).count(),
            todos: todo_re().find_iter(text).count(),
            tbds: tbd_re().find_iter(text).count(),
            placeholders: placeholder_re().find_iter(text).count(),
            words: text.split_whitespace().count(),
            tracking_ids: tracking_id_re().find_iter(text).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentLength {
    Minimal,
    Brief,
    Adequate,
}

fn content_length(words: usize, limits: &ContentLimits) -> ContentLength {
    if words < limits.minimal_words {
        ContentLength::Minimal
    } else if words < limits.brief_words {
        ContentLength::Brief
    } else {
        ContentLength::Adequate
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Heuristic score for one section. `span` is `None` when the section's
/// heading does not appear in the document.
pub fn analyze_section(
    code: SectionCode,
    span: Option<&str>,
    cfg: &ScoringConfig,
) -> SectionResult {
    let Some(text) = span else {
        return SectionResult {
            code,
            score: MIN_SCORE,
            origin: ScoreOrigin::Calculated,
            issues: vec![SECTION_NOT_FOUND.to_string()],
            exists: false,
            word_count: None,
            tracking_ids: None,
        };
    };

    let w = &cfg.weights;
    let signals = Signals::scan(text);
    let mut issues = Vec::new();
    let mut score = MAX_SCORE;

    if signals.clarifications > 0 {
        score -= signals.clarifications as f64 * w.clarification;
        issues.push(format!("{} clarification(s) needed", signals.clarifications));
    }

    if signals.todos > 0 {
        score -= signals.todos as f64 * w.todo;
        issues.push(format!("{} TODO item(s)", signals.todos));
    }

    if signals.tbds > 0 {
        score -= signals.tbds as f64 * w.tbd;
        issues.push(format!("{} TBD item(s)", signals.tbds));
    }

    if signals.placeholders > 0 {
        score -= signals.placeholders as f64 * w.placeholder;
        issues.push(format!("{} empty placeholder(s)", signals.placeholders));
    }

    match content_length(signals.words, &cfg.content) {
        ContentLength::Minimal => {
            score -= w.minimal_content;
            issues.push(format!(
                "Minimal content (< {} words)",
                cfg.content.minimal_words
            ));
        }
        ContentLength::Brief => {
            score -= w.brief_content;
            issues.push(format!("Brief content (< {} words)", cfg.content.brief_words));
        }
        ContentLength::Adequate => {}
    }

    if signals.tracking_ids > 0 {
        let bonus = signals.tracking_ids as f64 * w.tracking_id_bonus;
        score += bonus.min(w.tracking_id_bonus_cap);
    }

    let score = round1(score.clamp(MIN_SCORE, MAX_SCORE));
    tracing::debug!(section = %code, score, ?signals, "calculated section score");

    SectionResult {
        code,
        score,
        origin: ScoreOrigin::Calculated,
        issues,
        exists: true,
        word_count: Some(signals.words),
        tracking_ids: Some(signals.tracking_ids),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
