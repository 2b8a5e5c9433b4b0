//! Provenance sidecars: every artifact gets a `<stem>.provenance.json`
//! recording the code revision, the callsite that produced it, and the
//! parameters of the run.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a sidecar records about the run that produced an artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating sidecar dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "tag": payload.tag,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `data/sweep.csv` → `data/sweep.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    match artifact.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(".provenance.json");
            artifact.with_file_name(name)
        }
        None => artifact.with_file_name("artifact.provenance.json"),
    }
}

/// Commit hash baked in at build time (GIT_COMMIT), overridden by the
/// runtime environment, falling back to asking git directly.
pub fn current_git_rev() -> String {
    if let Some(baked) = option_env!("GIT_COMMIT") {
        if !baked.is_empty() {
            return baked.to_string();
        }
    }
    if let Ok(runtime) = std::env::var("GIT_COMMIT") {
        if !runtime.is_empty() {
            return runtime;
        }
    }
    let from_git = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string());
    from_git.unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_swaps_the_extension() {
        let derived = sidecar_path(Path::new("/tmp/output/sweep.csv"));
        assert_eq!(derived, Path::new("/tmp/output/sweep.provenance.json"));
    }

    #[test]
    fn sidecar_lands_next_to_the_artifact() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("placements.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"radius": 1.0, "num_caps": 6}), Some("demo".into()));
        let sidecar = write_sidecar(&artifact, payload).unwrap();
        assert!(sidecar.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "demo");
        assert_eq!(parsed["params"]["num_caps"], 6);
    }
}
