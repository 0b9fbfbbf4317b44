//! Filesystem-backed store for captured photos and videos.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use uuid::Uuid;

use crate::media::error::MediaError;

/// Kind of media file the store creates and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extension for this kind, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Image => "jpg",
            Self::Video => "mp4",
        }
    }

    /// Name prefix new files of this kind receive.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Image => "JPEG",
            Self::Video => "MPEG",
        }
    }
}

/// Creates and lists media files across a preferred and a private
/// directory.
///
/// The preferred directory models removable/external storage: new
/// files go there when it is configured and writable, with the private
/// directory as fallback. Listings come from the private directory.
/// Handles are cheap to clone; the async variants run the blocking
/// filesystem work on the runtime's blocking pool.
#[derive(Debug, Clone)]
pub struct MediaStore {
    private_dir: PathBuf,
    preferred_dir: Option<PathBuf>,
}

impl MediaStore {
    /// Store writing to and listing from `private_dir` only.
    pub fn new(private_dir: impl Into<PathBuf>) -> Self {
        Self {
            private_dir: private_dir.into(),
            preferred_dir: None,
        }
    }

    /// Store preferring `preferred_dir` for new files, with
    /// `private_dir` as fallback.
    pub fn with_preferred(
        private_dir: impl Into<PathBuf>,
        preferred_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            private_dir: private_dir.into(),
            preferred_dir: Some(preferred_dir.into()),
        }
    }

    /// Directory listings are served from.
    pub fn private_dir(&self) -> &Path {
        &self.private_dir
    }

    /// Create an empty, uniquely named file for `kind`.
    ///
    /// Tries the preferred directory first when one is configured,
    /// falling back to the private directory if it cannot be used.
    pub fn create_file(&self, kind: MediaKind) -> Result<PathBuf, MediaError> {
        if let Some(dir) = &self.preferred_dir {
            match create_in(dir, kind) {
                Ok(path) => return Ok(path),
                Err(error) => {
                    tracing::warn!(
                        dir = %dir.display(),
                        %error,
                        "preferred media dir unusable, falling back to private dir"
                    );
                }
            }
        }
        create_in(&self.private_dir, kind)
    }

    /// List `kind` files in the private directory, oldest first.
    ///
    /// Only regular, readable files with the kind's extension are
    /// returned, ordered ascending by last-modified time. When more
    /// than `max_count` qualify, the oldest are dropped so the result
    /// holds the `max_count` most recently modified entries.
    pub fn list(&self, kind: MediaKind, max_count: usize) -> Result<Vec<PathBuf>, MediaError> {
        let entries = fs::read_dir(&self.private_dir)
            .map_err(|e| MediaError::io(&self.private_dir, e))?;

        let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| MediaError::io(&self.private_dir, e))?;
            let path = entry.path();
            // Entries whose metadata cannot be read are skipped, not fatal.
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(kind.extension()) {
                continue;
            }
            // Filesystems without mtime sort those entries first.
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            files.push((modified, path));
        }

        files.sort_by_key(|(modified, _)| *modified);
        if files.len() > max_count {
            let dropped = files.len() - max_count;
            files.drain(..dropped);
            tracing::debug!(dropped, max_count, "media listing capped");
        }

        Ok(files.into_iter().map(|(_, path)| path).collect())
    }

    /// Async [`MediaStore::create_file`]; runs on the blocking pool.
    pub async fn create_file_async(&self, kind: MediaKind) -> Result<PathBuf, MediaError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.create_file(kind))
            .await
            .map_err(|source| MediaError::WorkerGone { source })?
    }

    /// Async [`MediaStore::list`]; runs on the blocking pool.
    pub async fn list_async(
        &self,
        kind: MediaKind,
        max_count: usize,
    ) -> Result<Vec<PathBuf>, MediaError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.list(kind, max_count))
            .await
            .map_err(|source| MediaError::WorkerGone { source })?
    }
}

fn create_in(dir: &Path, kind: MediaKind) -> Result<PathBuf, MediaError> {
    fs::create_dir_all(dir).map_err(|e| MediaError::io(dir, e))?;
    let name = format!(
        "{}_{}.{}",
        kind.prefix(),
        Uuid::new_v4().simple(),
        kind.extension()
    );
    let path = dir.join(name);
    fs::File::create(&path).map_err(|e| MediaError::io(&path, e))?;
    tracing::debug!(path = %path.display(), "media file created");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_name_their_files() {
        assert_eq!(MediaKind::Image.extension(), "jpg");
        assert_eq!(MediaKind::Image.prefix(), "JPEG");
        assert_eq!(MediaKind::Video.extension(), "mp4");
        assert_eq!(MediaKind::Video.prefix(), "MPEG");
    }
}
