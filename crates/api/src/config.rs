//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Shared secret protected routes are checked against.
pub const DEFAULT_API_KEY: &str = "mysecretapikey";

/// Largest accepted create/update body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    pub api_key: String,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_key: DEFAULT_API_KEY.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Read the listening port from `PORT`; everything else keeps its default.
    pub fn from_env() -> Self {
        Self::default().with_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn with_port_var(mut self, raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => {}
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!(value = raw, default = DEFAULT_PORT, "PORT is not a valid port; using default"),
            },
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}
