use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of scheduling entity an override or group refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Observing antenna.
    Station,
    /// Radio source.
    Source,
    /// Station pair.
    Baseline,
}

impl EntityKind {
    /// All entity kinds in canonical order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Station, EntityKind::Source, EntityKind::Baseline];

    /// Lower-case label used in file formats and diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Station => "station",
            EntityKind::Source => "source",
            EntityKind::Baseline => "baseline",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the eight scoring weights of the scheduling objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightComponent {
    /// Sky coverage improvement.
    SkyCoverage,
    /// Number of observations.
    NumberOfObservations,
    /// Scan duration.
    Duration,
    /// Averaging out observed sources.
    AverageSources,
    /// Averaging out participating stations.
    AverageStations,
    /// Station idle time.
    IdleTime,
    /// Low declination sources.
    LowDeclination,
    /// Low elevation scans.
    LowElevation,
}

impl WeightComponent {
    /// Components in the order used for cross products and vector storage.
    pub const ALL: [WeightComponent; 8] = [
        WeightComponent::SkyCoverage,
        WeightComponent::NumberOfObservations,
        WeightComponent::Duration,
        WeightComponent::AverageSources,
        WeightComponent::AverageStations,
        WeightComponent::IdleTime,
        WeightComponent::LowDeclination,
        WeightComponent::LowElevation,
    ];

    /// Reserved parameter name of the component.
    pub fn name(self) -> &'static str {
        match self {
            WeightComponent::SkyCoverage => "weightSkyCoverage",
            WeightComponent::NumberOfObservations => "weightNumberOfObservations",
            WeightComponent::Duration => "weightDuration",
            WeightComponent::AverageSources => "weightAverageSources",
            WeightComponent::AverageStations => "weightAverageStations",
            WeightComponent::IdleTime => "weightIdleTime",
            WeightComponent::LowDeclination => "weightLowDeclination",
            WeightComponent::LowElevation => "weightLowElevation",
        }
    }

    /// Position of the component inside a [`WeightVector`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Eight scoring weights handed to one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightVector {
    /// Sky coverage weight.
    pub sky_coverage: f64,
    /// Number of observations weight.
    pub number_of_observations: f64,
    /// Duration weight.
    pub duration: f64,
    /// Average sources weight.
    pub average_sources: f64,
    /// Average stations weight.
    pub average_stations: f64,
    /// Idle time weight.
    pub idle_time: f64,
    /// Low declination weight.
    pub low_declination: f64,
    /// Low elevation weight.
    pub low_elevation: f64,
}

impl WeightVector {
    /// Builds a vector from components ordered as [`WeightComponent::ALL`].
    pub const fn from_components(c: [f64; 8]) -> Self {
        Self {
            sky_coverage: c[0],
            number_of_observations: c[1],
            duration: c[2],
            average_sources: c[3],
            average_stations: c[4],
            idle_time: c[5],
            low_declination: c[6],
            low_elevation: c[7],
        }
    }

    /// Components ordered as [`WeightComponent::ALL`].
    pub fn components(&self) -> [f64; 8] {
        [
            self.sky_coverage,
            self.number_of_observations,
            self.duration,
            self.average_sources,
            self.average_stations,
            self.idle_time,
            self.low_declination,
            self.low_elevation,
        ]
    }

    /// Value of a single component.
    pub fn get(&self, component: WeightComponent) -> f64 {
        self.components()[component.index()]
    }

    /// Sum of all components.
    pub fn sum(&self) -> f64 {
        self.components().iter().sum()
    }

    /// Scales the vector onto the probability simplex.
    ///
    /// Returns `None` when the components sum to exactly zero.
    pub fn normalized(&self) -> Option<Self> {
        let sum = self.sum();
        if sum == 0.0 {
            return None;
        }
        Some(Self::from_components(self.components().map(|c| c / sum)))
    }

    /// Whether every component differs from `other` by less than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components().iter())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::from_components([1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    }
}
