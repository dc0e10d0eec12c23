// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Where veritas reads its YAML from.
pub trait ConfigSource {
    /// Label for logs and errors, e.g. a file path.
    fn origin(&self) -> String;

    fn load(&self) -> Result<String, ConfigError>;
}

/// A config file on disk, usually `veritas.yaml` next to the service.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            origin: self.origin(),
            source,
        })
    }
}

/// YAML held in memory, for embedding callers and tests.
#[derive(Debug, Clone)]
pub struct StringSource {
    content: String,
}

impl StringSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ConfigSource for StringSource {
    fn origin(&self) -> String {
        "<inline>".to_string()
    }

    fn load(&self) -> Result<String, ConfigError> {
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn file_source_reports_its_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "veritas: v1").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.path(), file.path());
        assert_eq!(source.origin(), file.path().display().to_string());
        assert_eq!(source.load().unwrap(), "veritas: v1\n");
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = FileSource::new("/nonexistent/veritas.yaml").load().unwrap_err();
        assert!(matches!(&err, ConfigError::Read { origin, .. } if origin == "/nonexistent/veritas.yaml"));
        assert!(err.to_string().contains("/nonexistent/veritas.yaml"));
    }

    #[test]
    fn string_source_is_inline() {
        let source = StringSource::new("veritas: v1\n");
        assert_eq!(source.origin(), "<inline>");
        assert_eq!(source.load().unwrap(), "veritas: v1\n");
    }
}
