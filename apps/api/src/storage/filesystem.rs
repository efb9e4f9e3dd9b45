use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::storage::DocumentStore;

/// Flat-directory document store.
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    /// Opens the store, creating `root` (and parents) if it does not exist.
    pub async fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn put(&self, file_name: &str, bytes: Bytes) -> std::io::Result<()> {
        let dest = self.path_for(file_name);
        // Write beside the target and rename over it so readers never see a
        // partial file. Same-name writers still race; the last rename wins.
        let tmp = self.path_for(&format!(".{}.tmp", Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }
        if let Err(e) = tokio::fs::rename(&tmp, &dest).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }

        debug!("Stored {} ({} bytes)", dest.display(), bytes.len());
        Ok(())
    }

    async fn get(&self, file_name: &str) -> std::io::Result<Option<Bytes>> {
        let path = self.path_for(file_name);
        // Only regular files are documents; directories and the like are absent.
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        }

        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(Some(Bytes::from(contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
