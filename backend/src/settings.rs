//! Server settings loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional config file, `USERS_API_*`
//! environment variables, and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{IdPolicy, IdPolicyParseError};

/// Port used when none is configured; mirrors the `port` field default.
pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The host is not an IP address.
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The id policy name is not recognised.
    #[error(transparent)]
    IdPolicy(#[from] IdPolicyParseError),
}

/// Configuration for the HTTP server and the user store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface to bind, as an IP address.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Identifier policy for new users: `sequence` or `collection-length`.
    pub id_policy: Option<String>,
}

impl ServerSettings {
    /// Socket address to bind, falling back to `0.0.0.0:3000`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|source| SettingsError::InvalidHost {
                host: host.to_owned(),
                source,
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Configured identifier policy, falling back to [`IdPolicy::Sequence`].
    pub fn id_policy(&self) -> Result<IdPolicy, SettingsError> {
        match self.id_policy.as_deref() {
            None => Ok(IdPolicy::default()),
            Some(raw) => Ok(raw.parse()?),
        }
    }
}
