use crate::codec::{self, Format};
use crate::error::Result;
use crate::tarefa::TaskList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only handle on a task list file
pub struct TaskFile {
    file_path: PathBuf,
    format: Option<Format>,
}

impl TaskFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            format: None,
        }
    }

    /// Use this format instead of inferring one from the extension
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Format used to decode the file
    pub fn format(&self) -> Result<Format> {
        match self.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.file_path),
        }
    }

    /// Read and decode the file
    ///
    /// A missing file is an error: this crate never creates task files.
    pub fn load(&self) -> Result<TaskList> {
        let format = self.format()?;
        debug!(path = %self.file_path.display(), %format, "loading task list");

        let content = fs::read_to_string(&self.file_path)?;
        let list = codec::decode_list(&content, format)?;

        if list.is_empty() {
            warn!(path = %self.file_path.display(), "task file holds no tasks");
        }
        debug!(count = list.len(), "loaded task list");
        Ok(list)
    }
}
