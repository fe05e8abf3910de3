use crate::output::print_json;
use crate::root::resolve_config;
use anyhow::Context;
use rulemap_core::config::{ScoringConfig, WarnLevel};
use rulemap_core::document::Document;
use rulemap_core::report;
use rulemap_core::score::score_document;
use rulemap_core::RulemapError;
use std::path::Path;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Score `file` and print the report. Returns whether the overall score
/// meets the threshold.
pub fn run(
    file: &Path,
    config: Option<&Path>,
    threshold: Option<f64>,
    json: bool,
) -> anyhow::Result<bool> {
    let doc = Document::load(file)?;
    let cfg = load_config(config, file, threshold)?;
    let report = score_document(&doc, &cfg);
    let source = file.display().to_string();

    if json {
        let value = serde_json::json!({
            "file": source,
            "report": report,
        });
        print_json(&value)?;
    } else {
        print!("{}", report::render(&report, &source));
    }

    Ok(report.meets_threshold)
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn load_config(
    explicit: Option<&Path>,
    file: &Path,
    threshold: Option<f64>,
) -> anyhow::Result<ScoringConfig> {
    let mut cfg = match resolve_config(explicit, file) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading scoring config");
            ScoringConfig::load(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => ScoringConfig::default(),
    };
    if let Some(t) = threshold {
        cfg = cfg.with_threshold(t);
    }

    let mut errors = Vec::new();
    for w in cfg.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("config: {}", w.message),
            WarnLevel::Error => errors.push(w.message),
        }
    }
    if !errors.is_empty() {
        return Err(RulemapError::InvalidConfig(errors.join("; ")).into());
    }
    Ok(cfg)
}
