//! Purpose: Keep connection passwords wrapped outside a single accessor.
//!
//! Passwords are stored as `SecretString` so `Debug` output and log fields
//! never show them. `expose_secret()` is the one way back to plain text and is
//! only allowed where the public accessor and URI rendering need it.
//!
//! Invariants:
//! - `expose_secret` appears only in files listed in `ALLOWED_FILES`
//! - No `tracing` call names a password field

use std::fs;
use std::path::{Path, PathBuf};

/// Files allowed to call `expose_secret`, with justification.
const ALLOWED_FILES: &[(&str, &str)] = &[(
    "crates/secrets/src/types/connection/mod.rs",
    "Connection::password_str is the public accessor for client libraries",
)];

fn find_workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

/// Non-test library sources of the secrets crate, with `#[cfg(test)]` tails cut off.
fn library_sources() -> Vec<(String, String)> {
    let root = find_workspace_root();
    let src = root.join("crates/secrets/src");
    let mut sources = Vec::new();

    for entry in walkdir::WalkDir::new(&src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let relative = entry
            .path()
            .strip_prefix(&root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        if relative.contains("/tests/") || relative.ends_with("_tests.rs") {
            continue;
        }
        let content = fs::read_to_string(entry.path()).unwrap_or_default();
        let library_part = match content.find("#[cfg(test)]") {
            Some(idx) => content[..idx].to_string(),
            None => content,
        };
        sources.push((relative, library_part));
    }

    sources
}

#[test]
fn expose_secret_only_in_allowed_files() {
    let sources = library_sources();
    assert!(!sources.is_empty(), "no library sources found");

    let violations: Vec<String> = sources
        .iter()
        .filter(|(path, content)| {
            content.contains("expose_secret")
                && !ALLOWED_FILES.iter().any(|(allowed, _)| path == allowed)
        })
        .map(|(path, _)| format!("{path}: calls expose_secret"))
        .collect();

    assert!(
        violations.is_empty(),
        "Passwords exposed outside the allowed accessor:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_password_in_log_fields() {
    let mut violations = Vec::new();

    for (path, content) in library_sources() {
        let mut in_log_call = false;
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.contains("tracing::") {
                in_log_call = true;
            }
            if in_log_call && trimmed.to_lowercase().contains("password") {
                violations.push(format!("{}:{}: {}", path, i + 1, trimmed));
            }
            if in_log_call && trimmed.ends_with(';') {
                in_log_call = false;
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Log calls mention passwords:\n{}",
        violations.join("\n")
    );
}

#[test]
fn allowed_files_exist() {
    let root = find_workspace_root();
    for (path, reason) in ALLOWED_FILES {
        assert!(
            root.join(path).is_file(),
            "allowed file {path} ({reason}) no longer exists"
        );
    }
}
