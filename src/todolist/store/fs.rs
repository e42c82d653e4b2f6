use super::SlotStore;
use crate::error::{Result, TodoError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl SlotStore for FileStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "slot read");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TodoError::Io(e)),
        }
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.slot_path(key);
        fs::write(&path, value).map_err(TodoError::Io)?;
        debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}
