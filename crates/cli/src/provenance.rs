//! Provenance record written next to each batch report.
//!
//! `report.json` gets a sibling `report.provenance.json` naming the build
//! (commit + crate version), the run label, the batch parameters, and the
//! report it describes.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of a `.provenance.json` file.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub report: String,
}

impl Provenance {
    /// Describe `report` as produced by the current build with `params`.
    pub fn for_report(report: &Path, params: Value, tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: triangles::VERSION,
            tag,
            params,
            report: report.to_string_lossy().into_owned(),
        }
    }

    /// Write next to the report; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.report));
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/report.json` → `dir/report.provenance.json`.
fn sidecar_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|output| output.status.success())
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_report() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/runs/triangles.json")),
            Path::new("/tmp/runs/triangles.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("rows")),
            Path::new("rows.provenance.json")
        );
    }

    #[test]
    fn written_record_describes_batch() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("rows.json");
        fs::write(&report, "[]").unwrap();
        let record = Provenance::for_report(
            &report,
            json!({"eps": 0.0, "total": 4, "valid": 1}),
            Some("nightly".to_string()),
        );
        let path = record.write().unwrap();
        assert_eq!(path, dir.path().join("rows.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["report"], report.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "nightly");
        assert_eq!(parsed["params"]["valid"], 1);
        assert_eq!(parsed["version"], triangles::VERSION);
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
