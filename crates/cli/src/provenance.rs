use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every artifact the CLI writes.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// Write `<artifact>.provenance.json` next to `artifact`.
///
/// The document records the code revision, the crate version, the calling
/// line, and the payload.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let target = provenance_path(artifact);
    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?,
        _ => {}
    }

    let doc = json!({
        "command": payload.command,
        "version": dubins_tsp::VERSION,
        "code_rev": current_git_rev(),
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.to_string_lossy()],
    });
    let bytes = serde_json::to_vec_pretty(&doc)?;
    fs::write(&target, bytes).with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}

/// `dir/tour.json` becomes `dir/tour.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `$GIT_COMMIT` when set, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
