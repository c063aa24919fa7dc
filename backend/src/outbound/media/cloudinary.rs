//! Reqwest-backed Cloudinary upload adapter.
//!
//! This adapter owns transport details only: request signing, multipart
//! assembly, HTTP error mapping, and JSON decoding into the domain's hosted
//! media descriptor. Uploads request automatic resource-type detection so the
//! same endpoint accepts images and video alike.
//!
//! The adapter consumes the [`MediaFile`] it is given; the spooled temp file
//! is removed when the value drops, on success and failure alike, so a
//! failed upload leaves nothing on disk by the time the caller sees the
//! error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, multipart};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::domain::ports::{HostedMedia, MediaFile, MediaStore, MediaUploadError};

const UPLOAD_ENDPOINT_BASE: &str = "https://api.cloudinary.com/v1_1";
const DEFAULT_UPLOAD_TIMEOUT_SECONDS: u64 = 60;
const REJECTION_SNIPPET_LIMIT: usize = 256;

/// Credentials and account settings for the media host's upload API.
///
/// Built explicitly at bootstrap and passed into the adapter's constructor;
/// the adapter holds no process-wide state.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    /// Account identifier addressed in the upload endpoint path.
    pub cloud_name: String,
    /// Public API key sent with every upload.
    pub api_key: String,
    /// Secret used to sign upload parameters; never sent.
    pub api_secret: String,
}

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum CloudinarySetupError {
    /// The configured cloud name does not yield a valid endpoint URL.
    #[error("invalid upload endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Media store adapter performing signed uploads against one account.
pub struct CloudinaryMediaStore {
    client: Client,
    upload_url: Url,
    api_key: String,
    api_secret: String,
}

impl CloudinaryMediaStore {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL or HTTP client cannot be
    /// constructed.
    pub fn new(config: CloudinaryConfig) -> Result<Self, CloudinarySetupError> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECONDS))
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL or HTTP client cannot be
    /// constructed.
    pub fn with_timeout(
        config: CloudinaryConfig,
        timeout: Duration,
    ) -> Result<Self, CloudinarySetupError> {
        let client = Client::builder().timeout(timeout).build()?;
        let upload_url = upload_endpoint(&config.cloud_name)?;
        Ok(Self {
            client,
            upload_url,
            api_key: config.api_key,
            api_secret: config.api_secret,
        })
    }

    async fn send_upload(&self, file: &MediaFile) -> Result<HostedMedia, MediaUploadError> {
        let bytes = tokio::fs::read(file.path()).await.map_err(|error| {
            MediaUploadError::transport(format!("failed to read spooled file: {error}"))
        })?;

        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign(&self.api_secret, timestamp);
        let form = multipart::Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .part(
                "file",
                multipart::Part::bytes(bytes).file_name(file.upload_name()),
            );

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(MediaUploadError::rejected(
                status.as_u16(),
                rejection_snippet(body.as_ref()),
            ));
        }

        let decoded: UploadResponseDto = serde_json::from_slice(body.as_ref()).map_err(|error| {
            MediaUploadError::rejected(
                status.as_u16(),
                format!("invalid upload response: {error}"),
            )
        })?;
        decoded.into_hosted()
    }
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    async fn upload(&self, file: MediaFile) -> Result<HostedMedia, MediaUploadError> {
        let result = self.send_upload(&file).await;
        match &result {
            Ok(media) => debug!(url = %media.url, "media uploaded"),
            Err(error) => {
                warn!(%error, path = %file.path().display(), "media upload failed");
            }
        }
        // `file` drops here, removing the spooled temp file either way.
        result
    }
}

fn upload_endpoint(cloud_name: &str) -> Result<Url, url::ParseError> {
    // `auto` asks the host to detect the resource type from the content.
    Url::parse(&format!("{UPLOAD_ENDPOINT_BASE}/{cloud_name}/auto/upload"))
}

/// SHA-256 parameter signature over the signed parameter string plus the
/// account secret, hex encoded, per the host's signed-upload scheme.
fn sign(api_secret: &str, timestamp: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("timestamp={timestamp}").as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn map_transport_error(error: reqwest::Error) -> MediaUploadError {
    MediaUploadError::transport(error.to_string())
}

fn rejection_snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(REJECTION_SNIPPET_LIMIT)
        .collect()
}

#[derive(Debug, Deserialize)]
struct UploadResponseDto {
    secure_url: Option<String>,
    url: Option<String>,
}

impl UploadResponseDto {
    fn into_hosted(self) -> Result<HostedMedia, MediaUploadError> {
        self.secure_url
            .or(self.url)
            .map(|url| HostedMedia { url })
            .ok_or_else(|| {
                MediaUploadError::rejected(200, "upload response missing a hosted URL")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn endpoint_addresses_the_account_with_auto_detection() {
        let url = upload_endpoint("demo-cloud").expect("endpoint parses");
        assert_eq!(
            url.as_str(),
            "https://api.cloudinary.com/v1_1/demo-cloud/auto/upload"
        );
    }

    #[test]
    fn signature_is_hex_encoded_sha256() {
        let signature = sign("secret", 1_700_000_000);
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_is_deterministic() {
        assert_eq!(sign("secret", 1_700_000_000), sign("secret", 1_700_000_000));
    }

    #[rstest]
    #[case("secret", 1_700_000_001)]
    #[case("other-secret", 1_700_000_000)]
    fn signature_changes_with_inputs(#[case] secret: &str, #[case] timestamp: i64) {
        assert_ne!(sign("secret", 1_700_000_000), sign(secret, timestamp));
    }

    #[test]
    fn upload_response_prefers_the_secure_url() {
        let decoded = UploadResponseDto {
            secure_url: Some("https://host/secure.png".into()),
            url: Some("http://host/plain.png".into()),
        };
        let hosted = decoded.into_hosted().expect("hosted media");
        assert_eq!(hosted.url, "https://host/secure.png");
    }

    #[test]
    fn upload_response_falls_back_to_the_plain_url() {
        let decoded = UploadResponseDto {
            secure_url: None,
            url: Some("http://host/plain.png".into()),
        };
        let hosted = decoded.into_hosted().expect("hosted media");
        assert_eq!(hosted.url, "http://host/plain.png");
    }

    #[test]
    fn upload_response_without_a_url_is_a_rejection() {
        let decoded = UploadResponseDto {
            secure_url: None,
            url: None,
        };
        let error = decoded.into_hosted().expect_err("missing URL rejects");
        assert!(matches!(error, MediaUploadError::Rejected { .. }));
    }

    #[test]
    fn rejection_snippet_truncates_long_bodies() {
        let body = vec![b'x'; 1024];
        assert_eq!(rejection_snippet(&body).len(), REJECTION_SNIPPET_LIMIT);
    }
}
