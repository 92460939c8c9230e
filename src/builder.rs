//! Scenario builder
//!
//! Picks where the country boundaries come from and how the scenario is
//! configured, then loads the data and builds a [`DeletionScenario`].

use crate::compute::geojson::{bundled_countries, load_countries};
use crate::config::{CountrySelector, DemoConfig};
use crate::error::Result;
use crate::scenario::{DeletionReport, DeletionScenario};
use boundary_types::Country;
use std::path::PathBuf;

/// Where country boundaries are loaded from.
#[derive(Debug, Clone, Default)]
pub enum CountrySource {
    /// Dataset compiled into the crate
    #[default]
    Bundled,
    /// GeoJSON FeatureCollection on disk
    Path(PathBuf),
    /// Countries already in memory
    Countries(Vec<Country>),
}

impl CountrySource {
    pub fn load(&self) -> Result<Vec<Country>> {
        match self {
            CountrySource::Bundled => bundled_countries(),
            CountrySource::Path(path) => load_countries(path),
            CountrySource::Countries(countries) => Ok(countries.clone()),
        }
    }
}

/// Builder for a deletion scenario.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    source: CountrySource,
    config: DemoConfig,
}

impl ScenarioBuilder {
    /// Bundled countries with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load countries from a GeoJSON file.
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = CountrySource::Path(path.into());
        self
    }

    /// Use countries that are already loaded.
    pub fn countries(mut self, countries: Vec<Country>) -> Self {
        self.source = CountrySource::Countries(countries);
        self
    }

    /// Use the bundled dataset.
    pub fn bundled(mut self) -> Self {
        self.source = CountrySource::Bundled;
        self
    }

    /// Set the scenario configuration.
    pub fn config(mut self, config: DemoConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn points_per_polygon(mut self, count: usize) -> Self {
        self.config = self.config.with_points_per_polygon(count);
        self
    }

    pub fn remove(mut self, selector: CountrySelector) -> Self {
        self.config = self.config.with_remove(selector);
        self
    }

    /// Load the countries and build the scenario.
    pub fn build(self) -> Result<DeletionScenario> {
        let countries = self.source.load()?;
        DeletionScenario::new(&countries, &self.config)
    }

    /// Build and run in one go.
    pub fn run(self) -> Result<DeletionReport> {
        self.build()?.run()
    }
}
