//! Scanner configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ENV_LABEL: &str = "SEQALG_LABEL";
pub const ENV_TRACE_MATCHES: &str = "SEQALG_TRACE_MATCHES";
pub const ENV_TRACE_MUTATIONS: &str = "SEQALG_TRACE_MUTATIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Attached to every trace event so callers can tell scanners apart.
    pub label: String,

    /// Emit an event after every locating/testing operation
    /// (`any_of`, `find_if`, `adjacent_find`, `equal`, `is_sorted`, `merge`).
    pub trace_matches: bool,

    /// Emit an event after `replace_if` / `remove_if`.
    pub trace_mutations: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            label: "seqalg".to_string(),
            trace_matches: false,
            trace_mutations: false,
        }
    }
}

impl ScanConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQALG_LABEL`: trace label
    /// - `SEQALG_TRACE_MATCHES`: `true`/`false`
    /// - `SEQALG_TRACE_MUTATIONS`: `true`/`false`
    ///
    /// Unparseable values are ignored. Use [`ScanConfig::try_from_env`] to
    /// reject them instead.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var(ENV_LABEL) {
            if !s.trim().is_empty() {
                cfg.label = s;
            }
        }

        if let Ok(s) = std::env::var(ENV_TRACE_MATCHES) {
            if let Ok(v) = s.parse::<bool>() {
                cfg.trace_matches = v;
            }
        }

        if let Ok(s) = std::env::var(ENV_TRACE_MUTATIONS) {
            if let Ok(v) = s.parse::<bool>() {
                cfg.trace_mutations = v;
            }
        }

        cfg
    }

    /// Strict variant of [`ScanConfig::from_env`].
    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var(ENV_LABEL) {
            cfg.label = s;
        }
        if let Some(v) = env_bool(ENV_TRACE_MATCHES)? {
            cfg.trace_matches = v;
        }
        if let Some(v) = env_bool(ENV_TRACE_MUTATIONS)? {
            cfg.trace_mutations = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Decode from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Config("label must not be empty".into()));
        }
        Ok(())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Turn on both event families.
    pub fn traced(mut self) -> Self {
        self.trace_matches = true;
        self.trace_mutations = true;
        self
    }
}

fn env_bool(var: &'static str) -> Result<Option<bool>> {
    match std::env::var(var) {
        Ok(s) => s
            .trim()
            .parse::<bool>()
            .map(Some)
            .map_err(|_| Error::EnvVar { var, value: s }),
        Err(_) => Ok(None),
    }
}
