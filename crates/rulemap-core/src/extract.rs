use regex::Regex;
use std::sync::OnceLock;

static SECTION_SCORE_RE: OnceLock<Regex> = OnceLock::new();

fn section_score_re() -> &'static Regex {
    SECTION_SCORE_RE.get_or_init(|| {
        Regex::new(r"(?i)\*\*Section Score\*\*:\s*\[?(\d+(?:\.\d+)?)\]?").unwrap()
    })
}

/// Find the first `**Section Score**: [N]` (or `: N`) annotation in a
/// section span. `None` means the author declared no score, which is not
/// the same as a declared score of zero.
pub fn explicit_score(section: &str) -> Option<f64> {
    let caps = section_score_re().captures(section)?;
    caps[1].parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_score() {
        assert_eq!(explicit_score("**Section Score**: [8.5]"), Some(8.5));
    }

    #[test]
    fn bare_score() {
        assert_eq!(explicit_score("text\n**Section Score**: 7\nmore"), Some(7.0));
    }

    #[test]
    fn label_is_case_insensitive() {
        assert_eq!(explicit_score("**section score**: [9.25]"), Some(9.25));
        assert_eq!(explicit_score("**SECTION SCORE**:6.0"), Some(6.0));
    }

    #[test]
    fn first_annotation_wins() {
        let s = "**Section Score**: [4]\n**Section Score**: [9]";
        assert_eq!(explicit_score(s), Some(4.0));
    }

    #[test]
    fn zero_is_a_score() {
        assert_eq!(explicit_score("**Section Score**: [0]"), Some(0.0));
    }

    #[test]
    fn missing_or_malformed_is_none() {
        assert_eq!(explicit_score("no score here"), None);
        assert_eq!(explicit_score("Section Score: 8"), None);
        assert_eq!(explicit_score("**Section Score**: [X]"), None);
        assert_eq!(explicit_score("**Section Score**: [-3]"), None);
    }
}
