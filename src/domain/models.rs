use crate::services::diagnostics::Diagnostic;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonError {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<String>>,
}

#[derive(Serialize, Clone)]
pub struct FragmentEntry {
    pub path: String,
    pub dependencies: Vec<String>,
}

#[derive(Serialize)]
pub struct BuildReport {
    pub output: String,
    pub fragments: usize,
    pub lines: usize,
    pub bytes: usize,
    pub sha256: String,
    pub order: Vec<String>,
    pub warnings: Vec<Diagnostic>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub root: String,
    pub fragments: usize,
    pub edges: usize,
    pub unresolved: Vec<Diagnostic>,
}
