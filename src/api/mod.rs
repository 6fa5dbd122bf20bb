//! PokeAPI transport: endpoint layout, error taxonomy and the HTTP upstream

pub(crate) mod wire;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Which request of a loader failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    List,
    Detail,
    Species,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::List => "list",
            Phase::Detail => "detail",
            Phase::Species => "species",
        };
        f.write_str(label)
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },
    #[error("malformed data: {0}")]
    MalformedData(String),
    #[error("{phase} request failed: {source}")]
    Phase {
        phase: Phase,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    pub fn in_phase(self, phase: Phase) -> Self {
        match self {
            FetchError::Phase { .. } => self,
            other => FetchError::Phase {
                phase,
                source: Box::new(other),
            },
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            FetchError::Phase { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Read-only JSON source the loaders pull from
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// URL layout of the three upstream resources
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn list(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={limit}", self.base)
    }

    pub fn detail(&self, name: &str) -> String {
        format!("{}/pokemon/{name}", self.base)
    }

    pub fn species(&self, name: &str) -> String {
        format!("{}/pokemon-species/{name}", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// `Upstream` backed by a shared reqwest client
#[derive(Clone, Debug)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Fails when the client cannot be initialized (TLS backend, resolver).
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Network(format!("client setup failed: {err}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| FetchError::MalformedData(err.to_string()))
    }
}

pub(crate) fn pointer_string(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

pub(crate) fn pointer_u32(value: &Value, pointer: &str) -> Option<u32> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_u64())
        .and_then(|n| u32::try_from(n).ok())
}
