use crate::domain::errors::StitchError;
use crate::fragments::FragmentSet;
use sha2::{Digest, Sha256};
use std::path::Path;

pub struct Assembly {
    pub text: String,
    pub lines: usize,
}

impl Assembly {
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(self.text.as_bytes()))
    }
}

/// Each fragment's lines in `order`, every line newline-terminated, with a
/// blank line after each fragment.
pub fn render(set: &FragmentSet, order: &[usize]) -> Assembly {
    let mut text = String::new();
    let mut lines = 0;
    for &id in order {
        for line in &set.get(id).lines {
            text.push_str(line);
            text.push('\n');
            lines += 1;
        }
        text.push('\n');
        lines += 1;
    }
    Assembly { text, lines }
}

pub fn write_assembly(path: &Path, assembly: &Assembly) -> Result<(), StitchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StitchError::write(parent, e))?;
    }
    std::fs::write(path, assembly.text.as_bytes()).map_err(|e| StitchError::write(path, e))?;
    tracing::info!(
        output = %path.display(),
        bytes = assembly.text.len(),
        "wrote assembled document"
    );
    Ok(())
}
