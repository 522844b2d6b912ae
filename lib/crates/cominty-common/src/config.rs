use serde::Deserialize;
use std::net::SocketAddr;

/// Port the service listens on inside its container image.
pub const CONTAINER_PORT: u16 = 80;

/// HTTP service configuration, read from `COMINTY_API_*` variables.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Listen address (default: 0.0.0.0:80)
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Path to a PEM certificate; TLS is enabled when set together with `tls_key`.
    pub tls_cert: Option<String>,

    /// Path to the PEM private key.
    pub tls_key: Option<String>,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], CONTAINER_PORT))
}

impl ServerConfig {
    /// Certificate and key paths, only when both are configured.
    #[must_use]
    pub fn tls_paths(&self) -> Option<(&str, &str)> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Some((cert, key)),
            _ => None,
        }
    }

    /// Name of the missing TLS variable when only one of cert/key is set.
    #[must_use]
    pub fn incomplete_tls(&self) -> Option<&'static str> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(_), None) => Some("COMINTY_API_TLS_KEY"),
            (None, Some(_)) => Some("COMINTY_API_TLS_CERT"),
            _ => None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            tls_cert: None,
            tls_key: None,
        }
    }
}
