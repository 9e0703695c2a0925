//! Shader source loading.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use fragtrace_engine::shader::StageSource;

/// Reads a shader source file fully into memory.
///
/// The path becomes the diagnostic label attached to compile errors. An empty
/// (or whitespace-only) file is invalid.
pub fn load_stage_source(path: &Path) -> Result<StageSource> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not open shader file: {}", path.display()))?;

    anyhow::ensure!(
        !text.trim().is_empty(),
        "shader file is empty: {}",
        path.display()
    );

    Ok(StageSource {
        label: path.display().to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fragtrace-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_stage_source(Path::new("no/such/raytrace.frag")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/raytrace.frag"));
    }

    #[test]
    fn reads_source_and_labels_it() {
        let path = temp_path("fullscreen.vert");
        fs::write(&path, "#version 410 core\nvoid main() {}\n").unwrap();

        let source = load_stage_source(&path).unwrap();
        assert!(source.text.contains("void main"));
        assert_eq!(source.label, path.display().to_string());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_file_is_invalid() {
        let path = temp_path("empty.frag");
        fs::write(&path, "  \n\t\n").unwrap();

        let err = load_stage_source(&path).unwrap_err();
        assert!(err.to_string().contains("empty"));

        fs::remove_file(&path).ok();
    }
}
