use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate the workspace")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent directory")
}

/// Reads `config_name` from the workspace root into `T`.
pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    let path = workspace_dir()?.join(config_name);
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    load_config::<Map<String, Value>>("Secrets.toml")
}
