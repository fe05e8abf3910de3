use rulemap_core::config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Resolve which scoring config applies to a document.
///
/// Priority:
/// 1. `--config` flag / `RULEMAP_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from the document's directory looking for `.rulemap.yaml`
/// 3. `None`: built-in defaults
pub fn resolve_config(explicit: Option<&Path>, document: &Path) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    let start = match document.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let start = start.canonicalize().unwrap_or(start);

    let mut dir = start;
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}
