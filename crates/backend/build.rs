//! Places the workspace `config.toml` next to the backend binary so that
//! `shared::config::load_config` finds it at runtime.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    if !source.exists() {
        println!("cargo:warning=no config.toml at {:?}, the embedded default applies", source);
        return;
    }

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=failed to copy config.toml to {:?}: {}", dest, e);
    }
}
