//! Application properties supplied by the host.
use crate::config::Config;

pub trait ApplicationProperties: Send + Sync + 'static {
    /// Absolute base URL of the host application.
    fn base_url(&self) -> String;
}

/// Properties fixed at startup from `Config`.
#[derive(Clone, Debug)]
pub struct StaticProperties {
    base_url: String,
}

impl StaticProperties {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }
}

impl ApplicationProperties for StaticProperties {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
