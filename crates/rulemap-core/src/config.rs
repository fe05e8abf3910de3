use crate::error::{Result, RulemapError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = ".rulemap.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PenaltyWeights
// ---------------------------------------------------------------------------

/// Points deducted (or, for tracking ids, added) per heuristic signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    #[serde(default = "default_clarification")]
    pub clarification: f64,
    #[serde(default = "default_one")]
    pub todo: f64,
    #[serde(default = "default_one")]
    pub tbd: f64,
    #[serde(default = "default_placeholder")]
    pub placeholder: f64,
    #[serde(default = "default_minimal_content")]
    pub minimal_content: f64,
    #[serde(default = "default_one")]
    pub brief_content: f64,
    #[serde(default = "default_tracking_id_bonus")]
    pub tracking_id_bonus: f64,
    #[serde(default = "default_one")]
    pub tracking_id_bonus_cap: f64,
}

fn default_clarification() -> f64 {
    1.5
}

fn default_one() -> f64 {
    1.0
}

fn default_placeholder() -> f64 {
    0.5
}

fn default_minimal_content() -> f64 {
    2.0
}

fn default_tracking_id_bonus() -> f64 {
    0.2
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            clarification: default_clarification(),
            todo: default_one(),
            tbd: default_one(),
            placeholder: default_placeholder(),
            minimal_content: default_minimal_content(),
            brief_content: default_one(),
            tracking_id_bonus: default_tracking_id_bonus(),
            tracking_id_bonus_cap: default_one(),
        }
    }
}

impl PenaltyWeights {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("clarification", self.clarification),
            ("todo", self.todo),
            ("tbd", self.tbd),
            ("placeholder", self.placeholder),
            ("minimal_content", self.minimal_content),
            ("brief_content", self.brief_content),
            ("tracking_id_bonus", self.tracking_id_bonus),
            ("tracking_id_bonus_cap", self.tracking_id_bonus_cap),
        ]
    }
}

// ---------------------------------------------------------------------------
// ContentLimits
// ---------------------------------------------------------------------------

/// Word-count cut-offs for the short-content penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLimits {
    #[serde(default = "default_minimal_words")]
    pub minimal_words: usize,
    #[serde(default = "default_brief_words")]
    pub brief_words: usize,
}

fn default_minimal_words() -> usize {
    50
}

fn default_brief_words() -> usize {
    100
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            minimal_words: default_minimal_words(),
            brief_words: default_brief_words(),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusBands
// ---------------------------------------------------------------------------

/// Lower bounds of the overall-score status bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBands {
    #[serde(default = "default_ready")]
    pub ready: f64,
    #[serde(default = "default_minor")]
    pub minor: f64,
    #[serde(default = "default_major")]
    pub major: f64,
}

fn default_ready() -> f64 {
    8.0
}

fn default_minor() -> f64 {
    6.0
}

fn default_major() -> f64 {
    4.0
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            ready: default_ready(),
            minor: default_minor(),
            major: default_major(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoringConfig (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub status: StatusBands,
    #[serde(default)]
    pub weights: PenaltyWeights,
    #[serde(default)]
    pub content: ContentLimits,
}

fn default_threshold() -> f64 {
    8.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            status: StatusBands::default(),
            weights: PenaltyWeights::default(),
            content: ContentLimits::default(),
        }
    }
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RulemapError::ConfigNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        // An empty file is a valid "all defaults" config.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: ScoringConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let StatusBands {
            ready,
            minor,
            major,
        } = self.status;
        let limits = [
            ("threshold", self.threshold),
            ("status.ready", ready),
            ("status.minor", minor),
            ("status.major", major),
        ];
        let non_finite: Vec<&str> = limits
            .iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| *name)
            .collect();
        if !non_finite.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("{} must be finite numbers", non_finite.join(", ")),
            });
            // The range and ordering checks below assume finite values.
            return warnings;
        }

        if !(0.0..=10.0).contains(&self.threshold) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("threshold {} is outside 0-10", self.threshold),
            });
        }

        if !(ready >= minor && minor >= major) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "status bands must descend (ready >= minor >= major), got {ready}/{minor}/{major}"
                ),
            });
        }

        for (name, value) in self.weights.named() {
            if !value.is_finite() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("weight '{name}' is not a finite number ({value})"),
                });
            } else if value < 0.0 {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("weight '{name}' is negative ({value})"),
                });
            }
        }

        if self.content.brief_words < self.content.minimal_words {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "content.brief_words ({}) is below content.minimal_words ({}); \
                     the brief-content penalty can never apply",
                    self.content.brief_words, self.content.minimal_words
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
