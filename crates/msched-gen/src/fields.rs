//! Registry of every tunable parameter name understood by the generator.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use msched_core::{EntityKind, WeightComponent};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

macro_rules! named_field {
    ($(#[$meta:meta])* $ty:ident { $($(#[$vmeta:meta])* $variant:ident => $name:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $ty {
            $($(#[$vmeta])* $variant),+
        }

        impl $ty {
            /// Every variant in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Parameter name used in catalogs and configuration trees.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|field| field.name() == name)
                    .ok_or_else(|| de::Error::custom(format!("unknown parameter `{name}`")))
            }
        }
    };
}

named_field! {
    /// On/off switches of the scheduler, enumerated as `{false, true}`.
    FlagField {
        /// Allow subnetting scans.
        Subnetting => "subnetting",
        /// Fill-in scans during scan selection.
        FillinModeDuringScanSelection => "fillinmode_duringScanSelection",
        /// Fill-in scans influence the next scan selection.
        FillinModeInfluenceOnScanSelection => "fillinmode_influenceOnScanSelection",
        /// Fill-in scans added after scheduling.
        FillinModeAPosteriori => "fillinmode_aPosteriori",
    }
}

named_field! {
    /// Global numeric settings that are not scoring weights.
    ScalarField {
        /// Minimum angular distance between subnetting sources.
        SubnettingMinSourceAngle => "subnetting_minSourceAngle",
        /// Minimum share of stations taking part in a subnetting scan.
        SubnettingMinParticipatingStations => "subnetting_minParticipatingStations",
        /// Interval used by the idle time weight.
        WeightIdleTimeInterval => "weightIdleTime_interval",
        /// Declination at which the low declination weight starts.
        WeightLowDeclinationBegin => "weightLowDeclination_begin",
        /// Declination at which the low declination weight is fully applied.
        WeightLowDeclinationFull => "weightLowDeclination_full",
        /// Elevation at which the low elevation weight starts.
        WeightLowElevationBegin => "weightLowElevation_begin",
        /// Elevation at which the low elevation weight is fully applied.
        WeightLowElevationFull => "weightLowElevation_full",
        /// Angular influence distance of the sky coverage score.
        SkyCoverageInfluenceDistance => "skyCoverageInfluenceDistance",
        /// Temporal influence of the sky coverage score.
        SkyCoverageInfluenceTime => "skyCoverageInfluenceTime",
    }
}

named_field! {
    /// Overrides applied to individual stations, sources or baselines.
    ScopedField {
        StationWeight => "stationWeight",
        StationMaxSlewtime => "stationMaxSlewtime",
        StationMinSlewDistance => "stationMinSlewDistance",
        StationMaxSlewDistance => "stationMaxSlewDistance",
        StationMaxWait => "stationMaxWait",
        StationMinElevation => "stationMinElevation",
        StationMaxNumberOfScans => "stationMaxNumberOfScans",
        StationMaxScan => "stationMaxScan",
        StationMinScan => "stationMinScan",
        SourceWeight => "sourceWeight",
        SourceMinNumberOfStations => "sourceMinNumberOfStations",
        SourceMinFlux => "sourceMinFlux",
        SourceMaxNumberOfScans => "sourceMaxNumberOfScans",
        SourceMinElevation => "sourceMinElevation",
        SourceMinSunDistance => "sourceMinSunDistance",
        SourceMaxScan => "sourceMaxScan",
        SourceMinScan => "sourceMinScan",
        SourceMinRepeat => "sourceMinRepeat",
        BaselineWeight => "baselineWeight",
        BaselineMaxScan => "baselineMaxScan",
        BaselineMinScan => "baselineMinScan",
    }
}

/// Storage type of a scoped override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Stored as the candidate double.
    Real,
    /// Rounded half away from zero into an unsigned count.
    Count,
}

impl ScopedField {
    /// Entity class the override applies to.
    pub fn entity(self) -> EntityKind {
        use ScopedField::*;
        match self {
            StationWeight | StationMaxSlewtime | StationMinSlewDistance
            | StationMaxSlewDistance | StationMaxWait | StationMinElevation
            | StationMaxNumberOfScans | StationMaxScan | StationMinScan => EntityKind::Station,
            SourceWeight | SourceMinNumberOfStations | SourceMinFlux | SourceMaxNumberOfScans
            | SourceMinElevation | SourceMinSunDistance | SourceMaxScan | SourceMinScan
            | SourceMinRepeat => EntityKind::Source,
            BaselineWeight | BaselineMaxScan | BaselineMinScan => EntityKind::Baseline,
        }
    }

    /// Whether the override is a real number or an integer count.
    pub fn value_kind(self) -> ValueKind {
        use ScopedField::*;
        match self {
            StationWeight | StationMinSlewDistance | StationMaxSlewDistance
            | StationMinElevation | SourceWeight | SourceMinFlux | SourceMinElevation
            | SourceMinSunDistance | BaselineWeight => ValueKind::Real,
            StationMaxSlewtime | StationMaxWait | StationMaxNumberOfScans | StationMaxScan
            | StationMinScan | SourceMinNumberOfStations | SourceMaxNumberOfScans
            | SourceMaxScan | SourceMinScan | SourceMinRepeat | BaselineMaxScan
            | BaselineMinScan => ValueKind::Count,
        }
    }
}

/// Typed accessor selected by a parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    /// Boolean switch.
    Flag(FlagField),
    /// One of the eight reserved scoring weights.
    Weight(WeightComponent),
    /// Global numeric setting.
    Scalar(ScalarField),
    /// Entity-scoped override.
    Scoped(ScopedField),
}

fn registry() -> &'static HashMap<&'static str, ParameterField> {
    static REGISTRY: OnceLock<HashMap<&'static str, ParameterField>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let flags = FlagField::ALL.iter().map(|f| (f.name(), ParameterField::Flag(*f)));
        let weights = WeightComponent::ALL
            .iter()
            .map(|w| (w.name(), ParameterField::Weight(*w)));
        let scalars = ScalarField::ALL
            .iter()
            .map(|s| (s.name(), ParameterField::Scalar(*s)));
        let scoped = ScopedField::ALL
            .iter()
            .map(|s| (s.name(), ParameterField::Scoped(*s)));
        flags.chain(weights).chain(scalars).chain(scoped).collect()
    })
}

/// Resolves a parameter name into its typed accessor.
pub fn lookup(name: &str) -> Option<ParameterField> {
    registry().get(name).copied()
}
