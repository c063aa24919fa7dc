//! HTTP server configuration read from the environment at bootstrap.

use std::env;
use std::net::SocketAddr;

use backend::outbound::media::CloudinaryConfig;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/registrations";

/// Configuration for creating the HTTP server and its adapters.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    cors_origin: String,
    database_url: String,
    cloudinary: CloudinaryConfig,
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!(variable = name, %default, "environment variable not set; using default");
        default.to_owned()
    })
}

fn require_env(name: &str) -> std::io::Result<String> {
    env::var(name).map_err(|_| std::io::Error::other(format!("{name} must be set")))
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `BIND_ADDR`, `CORS_ORIGIN`, and `DATABASE_URL` fall back to local
    /// defaults with a warning; the media host credentials are required.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|error| std::io::Error::other(format!("invalid BIND_ADDR: {error}")))?;
        let cors_origin = env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
        let database_url = env_or("DATABASE_URL", DEFAULT_DATABASE_URL);
        let cloudinary = CloudinaryConfig {
            cloud_name: require_env("CLOUDINARY_CLOUD_NAME")?,
            api_key: require_env("CLOUDINARY_API_KEY")?,
            api_secret: require_env("CLOUDINARY_API_SECRET")?,
        };

        Ok(Self {
            bind_addr,
            cors_origin,
            database_url,
            cloudinary,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Single origin allowed by the CORS policy.
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    /// PostgreSQL connection string for the pool.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Media host credentials for the upload adapter.
    pub fn cloudinary(&self) -> &CloudinaryConfig {
        &self.cloudinary
    }
}
