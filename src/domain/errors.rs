use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    #[error("circular dependency between fragments: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
    #[error("{count} unresolved require directive(s)")]
    Unresolved { count: usize },
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl StitchError {
    /// Stable code used in `--json` error output.
    pub fn code(&self) -> &'static str {
        match self {
            StitchError::CyclicDependency { .. } => "CYCLE",
            StitchError::Unresolved { .. } => "UNRESOLVED",
            StitchError::Read { .. } | StitchError::Write { .. } => "IO",
            StitchError::Config { .. } => "CONFIG",
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StitchError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StitchError::Write {
            path: path.into(),
            source,
        }
    }
}
