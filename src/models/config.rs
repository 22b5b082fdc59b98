//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HMAC secret used to sign bearer tokens.
    pub secret: String,
    /// Directory where expense receipt uploads are stored.
    pub uploads_dir: String,
}
