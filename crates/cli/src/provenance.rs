use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every written result.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            tag: None,
        }
    }

    pub fn tagged(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write `<artifact stem>.provenance.json` next to a zonal result.
///
/// The sidecar pins the run: code revision, crate version, call site, the
/// subcommand with its parameters, and the artifact it describes.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "zonal_version": zonal::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "command": payload.command,
        "tag": payload.tag,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    crate::io::write_json(&sidecar, &doc)
        .with_context(|| format!("provenance for {}", artifact.display()))?;
    tracing::debug!(path = %sidecar.display(), command = payload.command, "provenance_written");
    Ok(sidecar)
}

/// `counts.json` -> `counts.provenance.json`; extensionless names gain the suffix.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Revision from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned())
}
