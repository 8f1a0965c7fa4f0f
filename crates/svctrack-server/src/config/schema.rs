use std::net::SocketAddr;

use serde::Deserialize;
use svctrack_core::error::{Result, SvcTrackError};
use svctrack_core::name::DEFAULT_MAX_NAME_BYTES;

const MAX_NAME_BYTES_CEILING: usize = 4096;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub limits: LimitsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            limits: LimitsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SvcTrackError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SvcTrackError::Config(format!("server.listen is not a socket address ({}): {e}", self.listen))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_service_name_bytes")]
    pub max_service_name_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_service_name_bytes: default_max_service_name_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_NAME_BYTES_CEILING).contains(&self.max_service_name_bytes) {
            return Err(SvcTrackError::Config(format!(
                "limits.max_service_name_bytes must be between 1 and {MAX_NAME_BYTES_CEILING}"
            )));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_service_name_bytes() -> usize {
    DEFAULT_MAX_NAME_BYTES
}
