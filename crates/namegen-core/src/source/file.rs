//! Local file source

use std::path::{Path, PathBuf};

use super::{Source, TransportError};

/// Reads the template and word table from local files
#[derive(Debug, Clone)]
pub struct FileSource {
    template_path: PathBuf,
    word_table_path: PathBuf,
}

impl FileSource {
    pub fn new(template_path: impl Into<PathBuf>, word_table_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            word_table_path: word_table_path.into(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn word_table_path(&self) -> &Path {
        &self.word_table_path
    }
}

fn read(path: &Path) -> Result<String, TransportError> {
    std::fs::read_to_string(path).map_err(|source| TransportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Source for FileSource {
    fn fetch_template_text(&self) -> Result<String, TransportError> {
        read(&self.template_path)
    }

    fn fetch_word_table(&self) -> Result<String, TransportError> {
        read(&self.word_table_path)
    }

    fn describe(&self) -> String {
        format!(
            "files {} and {}",
            self.template_path.display(),
            self.word_table_path.display()
        )
    }
}
