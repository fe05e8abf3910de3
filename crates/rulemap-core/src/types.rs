use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SectionCode
// ---------------------------------------------------------------------------

/// One of the seven RULEMAP sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionCode {
    #[serde(rename = "R")]
    Role,
    #[serde(rename = "U")]
    Understanding,
    #[serde(rename = "L")]
    Logic,
    #[serde(rename = "E")]
    Elements,
    #[serde(rename = "M")]
    Mood,
    #[serde(rename = "A")]
    Audience,
    #[serde(rename = "P")]
    Performance,
}

impl SectionCode {
    pub fn all() -> &'static [SectionCode] {
        &[
            SectionCode::Role,
            SectionCode::Understanding,
            SectionCode::Logic,
            SectionCode::Elements,
            SectionCode::Mood,
            SectionCode::Audience,
            SectionCode::Performance,
        ]
    }

    pub fn letter(self) -> char {
        match self {
            SectionCode::Role => 'R',
            SectionCode::Understanding => 'U',
            SectionCode::Logic => 'L',
            SectionCode::Elements => 'E',
            SectionCode::Mood => 'M',
            SectionCode::Audience => 'A',
            SectionCode::Performance => 'P',
        }
    }

    /// Canonical heading text, e.g. `"R - ROLE"`.
    pub fn heading(self) -> &'static str {
        match self {
            SectionCode::Role => "R - ROLE",
            SectionCode::Understanding => "U - UNDERSTANDING",
            SectionCode::Logic => "L - LOGIC",
            SectionCode::Elements => "E - ELEMENTS",
            SectionCode::Mood => "M - MOOD",
            SectionCode::Audience => "A - AUDIENCE",
            SectionCode::Performance => "P - PERFORMANCE",
        }
    }
}

impl fmt::Display for SectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for SectionCode {
    type Err = crate::error::RulemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "R" => Ok(SectionCode::Role),
            "U" => Ok(SectionCode::Understanding),
            "L" => Ok(SectionCode::Logic),
            "E" => Ok(SectionCode::Elements),
            "M" => Ok(SectionCode::Mood),
            "A" => Ok(SectionCode::Audience),
            "P" => Ok(SectionCode::Performance),
            _ => Err(crate::error::RulemapError::InvalidSection(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreOrigin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrigin {
    /// Declared by the author with a `**Section Score**` annotation.
    Explicit,
    /// Computed by the heuristic analyzer.
    Calculated,
}

impl ScoreOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreOrigin::Explicit => "explicit",
            ScoreOrigin::Calculated => "calculated",
        }
    }
}

impl fmt::Display for ScoreOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Serializes as its human-readable label, e.g. `"Ready for Planning"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Ready for Planning")]
    ReadyForPlanning,
    #[serde(rename = "Needs Minor Clarification")]
    NeedsMinorClarification,
    #[serde(rename = "Needs Major Revision")]
    NeedsMajorRevision,
    #[serde(rename = "Incomplete")]
    Incomplete,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::ReadyForPlanning => "Ready for Planning",
            Status::NeedsMinorClarification => "Needs Minor Clarification",
            Status::NeedsMajorRevision => "Needs Major Revision",
            Status::Incomplete => "Incomplete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
