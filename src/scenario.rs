//! Insert, verify, delete, verify again.
//!
//! A [`DeletionScenario`] indexes one bounding box per polygon (so a
//! MultiPolygon country owns several entries), samples interior points for
//! every polygon, and remembers the `(id, bbox)` pairs of one designated
//! country. The two verification passes ask the same question of every sample
//! point, "does some entry containing this point carry my country's name?":
//!
//! - before deletion any "no" is fatal ([`BoundaryError::BaselineMismatch`]);
//! - after deletion the "no" answers are the result, collected in a
//!   [`DeletionReport`].

use crate::compute::sampling::PointSampler;
use crate::compute::spatial::{BoundaryIndex, EntryId};
use crate::config::{CountrySelector, DemoConfig};
use crate::error::{BoundaryError, Result};
use boundary_types::{BoundingBox2D, Country, SamplePoint};
use smallvec::SmallVec;
use std::fmt;

/// An index entry retained for later deletion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedEntry {
    pub id: EntryId,
    pub bbox: BoundingBox2D,
}

pub struct DeletionScenario {
    index: BoundaryIndex,
    points: Vec<SamplePoint>,
    removed_country: String,
    tracked: SmallVec<[TrackedEntry; 4]>,
    removed: bool,
}

impl DeletionScenario {
    /// Index `countries`, sample their polygons and track the entries of the
    /// country picked by `config.remove`.
    pub fn new(countries: &[Country], config: &DemoConfig) -> Result<Self> {
        config.validate().map_err(BoundaryError::InvalidInput)?;

        let target = resolve_country(countries, &config.remove)?;
        let removed_country = countries[target].name().to_string();

        let sampler = PointSampler::new(config.seed).with_max_attempts(config.max_sampling_attempts);
        let mut index = BoundaryIndex::new();
        let mut points = Vec::new();
        let mut tracked = SmallVec::new();

        for (position, country) in countries.iter().enumerate() {
            let mut polygons = 0;

            for polygon in country.polygons() {
                let bbox = BoundingBox2D::of_polygon(polygon).ok_or_else(|| {
                    BoundaryError::DegeneratePolygon(format!(
                        "{} has a polygon with an empty exterior ring",
                        country.name()
                    ))
                })?;

                let id = index.insert(bbox, country.name())?;
                if position == target {
                    tracked.push(TrackedEntry { id, bbox });
                }

                let sampled = sampler
                    .sample(polygon, config.points_per_polygon)
                    .inspect_err(|e| log::warn!("sampling {} failed: {}", country.name(), e))?;
                points.extend(
                    sampled
                        .into_iter()
                        .map(|point| SamplePoint::new(point, country.name())),
                );

                polygons += 1;
            }

            log::debug!("indexed {} polygon(s) of {}", polygons, country.name());
        }

        log::info!(
            "indexed {} entries for {} countries, sampled {} points; tracking {} entries of {}",
            index.len(),
            countries.len(),
            points.len(),
            tracked.len(),
            removed_country
        );

        Ok(Self {
            index,
            points,
            removed_country,
            tracked,
            removed: false,
        })
    }

    /// Pre-deletion pass: every sample point must resolve to its own country.
    pub fn verify_baseline(&self) -> Result<()> {
        match self.points.iter().find(|sample| !self.matches(sample)) {
            Some(sample) => Err(BoundaryError::BaselineMismatch {
                point: sample.wkt(),
                country: sample.country.clone(),
            }),
            None => {
                log::info!("baseline verified for {} points", self.points.len());
                Ok(())
            }
        }
    }

    /// Delete every tracked entry of the designated country.
    ///
    /// Returns the number of entries removed. Can only run once.
    pub fn remove_designated(&mut self) -> Result<usize> {
        if self.removed {
            return Err(BoundaryError::InvalidInput(format!(
                "Entries of {} were already removed",
                self.removed_country
            )));
        }

        for entry in &self.tracked {
            if !self.index.delete(entry.id, &entry.bbox) {
                return Err(BoundaryError::Other(format!(
                    "Index has no entry {} of {} to delete",
                    entry.id, self.removed_country
                )));
            }
        }
        self.removed = true;

        log::info!(
            "removed {} entries of {}, {} remain",
            self.tracked.len(),
            self.removed_country,
            self.index.len()
        );

        Ok(self.tracked.len())
    }

    /// Post-deletion pass: sample points that no longer resolve to their country.
    pub fn collect_missing(&self) -> Vec<SamplePoint> {
        self.points
            .iter()
            .filter(|sample| !self.matches(sample))
            .cloned()
            .collect()
    }

    /// Baseline pass, deletion, second pass.
    pub fn run(&mut self) -> Result<DeletionReport> {
        self.verify_baseline()?;
        let removed_entries = self.remove_designated()?;
        let missing = self.collect_missing();

        if missing.iter().any(|sample| sample.country != self.removed_country) {
            log::warn!("deletion of {} affected other countries", self.removed_country);
        }

        Ok(DeletionReport {
            removed_country: self.removed_country.clone(),
            removed_entries,
            remaining_entries: self.index.len(),
            checked_points: self.points.len(),
            missing,
        })
    }

    fn matches(&self, sample: &SamplePoint) -> bool {
        self.index.has_label_at(&sample.point, &sample.country)
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn index(&self) -> &BoundaryIndex {
        &self.index
    }

    pub fn removed_country(&self) -> &str {
        &self.removed_country
    }

    pub fn tracked_entries(&self) -> &[TrackedEntry] {
        &self.tracked
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

/// Position of the selected country. A name selects its first occurrence.
pub fn resolve_country(countries: &[Country], selector: &CountrySelector) -> Result<usize> {
    match selector {
        CountrySelector::Name(name) => countries
            .iter()
            .position(|country| country.name() == name)
            .ok_or_else(|| BoundaryError::CountryNotFound(name.clone())),
        CountrySelector::Index(index) if *index < countries.len() => Ok(*index),
        CountrySelector::Index(index) => Err(BoundaryError::CountryNotFound(format!(
            "index {} out of range for {} countries",
            index,
            countries.len()
        ))),
    }
}

/// Outcome of [`DeletionScenario::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionReport {
    pub removed_country: String,
    pub removed_entries: usize,
    pub remaining_entries: usize,
    pub checked_points: usize,
    /// Points that lost their match, in sampling order
    pub missing: Vec<SamplePoint>,
}

impl DeletionReport {
    /// One `POINT (x y) - country` line per missing point.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.missing.iter().map(|sample| sample.to_string())
    }

    /// True when no point lost its match.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for DeletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.missing {
            writeln!(f, "{}", sample)?;
        }
        Ok(())
    }
}
