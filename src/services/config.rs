use crate::cli::{Cli, DEFAULT_CONFIG_FILE, DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_ROOT};
use crate::domain::errors::StitchError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of `stitch.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

/// Effective settings after flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
}

/// An explicit `--config` must exist; otherwise `./stitch.toml` is used when
/// present.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, StitchError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                return Ok(ConfigFile::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| StitchError::read(&path, e))?;
    let config = toml::from_str(&raw).map_err(|source| StitchError::Config {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(config = %path.display(), "loaded config");
    Ok(config)
}

/// Flags win over the config file, which wins over built-in defaults.
pub fn resolve_settings(cli: &Cli, file: ConfigFile, output: Option<&Path>) -> Settings {
    let root = cli
        .root
        .clone()
        .or(file.root)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let output = output
        .map(Path::to_path_buf)
        .or(file.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let extensions = if !cli.extensions.is_empty() {
        cli.extensions.clone()
    } else {
        file.extensions
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_EXTENSION.to_string()])
    };
    Settings {
        root,
        output,
        extensions,
    }
}
