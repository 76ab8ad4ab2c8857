//! In-memory artifact sink for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use uigen_core::application::ports::ArtifactSink;

/// In-memory sink for testing.
#[derive(Debug, Clone)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemorySink {
    /// Create a new empty memory sink.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemorySinkInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactSink for MemorySink {
    fn create_dir_all(&self, path: &Path) -> uigen_core::error::UigenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> uigen_core::error::UigenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(uigen_core::application::ApplicationError::SinkError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> uigen_core::error::UigenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn lock_error(path: &Path) -> uigen_core::error::UigenError {
    uigen_core::application::ApplicationError::SinkError {
        path: path.to_path_buf(),
        reason: "Sink lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let sink = MemorySink::new();
        sink.create_dir_all(Path::new("/out/app/src")).unwrap();

        assert!(sink.exists(Path::new("/out")));
        assert!(sink.exists(Path::new("/out/app")));
        assert!(sink.exists(Path::new("/out/app/src")));
    }

    #[test]
    fn write_requires_an_existing_parent() {
        let sink = MemorySink::new();
        assert!(sink.write_file(Path::new("/out/file.ts"), "x").is_err());

        sink.create_dir_all(Path::new("/out")).unwrap();
        sink.write_file(Path::new("/out/file.ts"), "x").unwrap();
        assert_eq!(sink.read_file(Path::new("/out/file.ts")).unwrap(), "x");
    }

    #[test]
    fn remove_dir_all_is_prefix_scoped() {
        let sink = MemorySink::new();
        sink.create_dir_all(Path::new("/out/a")).unwrap();
        sink.create_dir_all(Path::new("/out/b")).unwrap();
        sink.write_file(Path::new("/out/a/x.ts"), "a").unwrap();
        sink.write_file(Path::new("/out/b/y.ts"), "b").unwrap();

        sink.remove_dir_all(Path::new("/out/a")).unwrap();
        assert!(!sink.exists(Path::new("/out/a/x.ts")));
        assert!(sink.exists(Path::new("/out/b/y.ts")));
    }

    #[test]
    fn clones_share_state() {
        let sink = MemorySink::new();
        let alias = sink.clone();
        sink.create_dir_all(Path::new("/out")).unwrap();
        alias.write_file(Path::new("/out/z.ts"), "z").unwrap();

        assert_eq!(sink.read_file(Path::new("/out/z.ts")).unwrap(), "z");
        assert_eq!(sink.list_files().len(), 1);
    }
}
