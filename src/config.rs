//! Configuration for the deletion scenario.
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which country's entries get removed from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountrySelector {
    /// Match `properties.name` exactly
    Name(String),
    /// Zero-based position in the feature collection
    Index(usize),
}

impl Default for CountrySelector {
    fn default() -> Self {
        CountrySelector::Name(DemoConfig::DEFAULT_COUNTRY.to_string())
    }
}

impl fmt::Display for CountrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountrySelector::Name(name) => write!(f, "name {:?}", name),
            CountrySelector::Index(index) => write!(f, "index {}", index),
        }
    }
}

/// Scenario configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Seed for the interior point sampler
    #[serde(default = "DemoConfig::default_seed")]
    pub seed: u64,

    #[serde(default = "DemoConfig::default_points_per_polygon")]
    pub points_per_polygon: usize,

    /// Country whose entries are deleted between the two passes
    #[serde(default)]
    pub remove: CountrySelector,

    /// Candidate draws allowed per polygon; `None` means unbounded
    #[serde(default = "DemoConfig::default_max_sampling_attempts")]
    pub max_sampling_attempts: Option<u64>,
}

impl DemoConfig {
    pub const DEFAULT_COUNTRY: &'static str = "United States of America";

    const fn default_seed() -> u64 {
        1
    }

    const fn default_points_per_polygon() -> usize {
        1
    }

    const fn default_max_sampling_attempts() -> Option<u64> {
        Some(1_000_000)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_points_per_polygon(mut self, count: usize) -> Self {
        assert!(count > 0, "Points per polygon must be greater than zero");
        self.points_per_polygon = count;
        self
    }

    pub fn with_remove(mut self, selector: CountrySelector) -> Self {
        self.remove = selector;
        self
    }

    pub fn with_remove_name(self, name: impl Into<String>) -> Self {
        self.with_remove(CountrySelector::Name(name.into()))
    }

    pub fn with_remove_index(self, index: usize) -> Self {
        self.with_remove(CountrySelector::Index(index))
    }

    pub fn with_max_sampling_attempts(mut self, attempts: Option<u64>) -> Self {
        if attempts.is_none() {
            log::warn!("Sampling without an attempt cap can loop forever on thin polygons");
        }
        self.max_sampling_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.points_per_polygon == 0 {
            return Err("Points per polygon must be greater than zero".to_string());
        }

        if let Some(attempts) = self.max_sampling_attempts
            && attempts == 0
        {
            return Err("Max sampling attempts must be greater than zero".to_string());
        }

        if let CountrySelector::Name(name) = &self.remove
            && name.is_empty()
        {
            return Err("Country name to remove must not be empty".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: DemoConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: DemoConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            points_per_polygon: Self::default_points_per_polygon(),
            remove: CountrySelector::default(),
            max_sampling_attempts: Self::default_max_sampling_attempts(),
        }
    }
}
