//! Port abstraction for remote media hosting.
//!
//! The HTTP layer spools uploaded file parts to local temporary files and
//! hands them over as [`MediaFile`] values. Ownership of the underlying file
//! travels with the value: whoever holds the last [`MediaFile`] removes the
//! file when it is dropped, so a failed upload (or a pipeline that bails out
//! before uploading) never leaks a spooled file.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Local temporary file pending upload.
///
/// Dropping the value deletes the file, which is what gives the upload
/// pipeline its cleanup guarantee: an adapter that consumes a [`MediaFile`]
/// and returns an error has already removed the file by the time the caller
/// observes the failure.
#[derive(Debug)]
pub struct MediaFile {
    path: PathBuf,
    original_name: Option<String>,
}

impl MediaFile {
    /// Take ownership of a spooled file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            original_name: None,
        }
    }

    /// Record the client-supplied file name, if one was sent.
    #[must_use]
    pub fn with_original_name(mut self, name: Option<String>) -> Self {
        self.original_name = name;
        self
    }

    /// Location of the spooled file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Client-supplied file name, if any.
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    /// Name to present to the remote host: the client-supplied name when
    /// available, otherwise the spool file's own name.
    pub fn upload_name(&self) -> String {
        if let Some(name) = self.original_name() {
            return name.to_owned();
        }
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned())
    }
}

impl Drop for MediaFile {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            tracing::debug!(path = %self.path.display(), %error, "spooled media file already gone");
        }
    }
}

/// Hosted upload descriptor returned by the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedMedia {
    /// Public URL of the hosted asset.
    pub url: String,
}

/// Upload failures, split by cause so callers can report them distinctly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaUploadError {
    /// The upload never completed (connect failure, timeout, aborted body).
    #[error("media upload transport failed: {message}")]
    Transport { message: String },
    /// The media host answered and refused the upload.
    #[error("media host rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl MediaUploadError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a rejection error with the remote status and message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Short machine-readable cause, used in error envelope details.
    pub fn cause(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport_failure",
            Self::Rejected { .. } => "remote_rejected",
        }
    }
}

impl fmt::Display for HostedMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload the file and return its hosted descriptor.
    ///
    /// Consumes the file either way; by the time an `Err` is returned the
    /// local temporary file no longer exists.
    async fn upload(&self, file: MediaFile) -> Result<HostedMedia, MediaUploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn spooled_file(contents: &[u8]) -> PathBuf {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write temp file");
        let (_, temp_path) = file.keep().expect("detach temp file");
        temp_path
    }

    #[test]
    fn dropping_a_media_file_removes_it() {
        let path = spooled_file(b"image bytes");
        assert!(path.exists());

        drop(MediaFile::new(path.clone()));
        assert!(!path.exists());
    }

    #[test]
    fn upload_name_prefers_the_client_name() {
        let path = spooled_file(b"image bytes");
        let file = MediaFile::new(path).with_original_name(Some("avatar.png".into()));
        assert_eq!(file.upload_name(), "avatar.png");
    }

    #[test]
    fn upload_name_falls_back_to_the_spool_name() {
        let path = spooled_file(b"image bytes");
        let expected = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .expect("spool file has a name");

        let file = MediaFile::new(path);
        assert_eq!(file.upload_name(), expected);
    }

    #[test]
    fn upload_errors_name_their_cause() {
        assert_eq!(MediaUploadError::transport("boom").cause(), "transport_failure");
        assert_eq!(MediaUploadError::rejected(401, "denied").cause(), "remote_rejected");
    }
}
