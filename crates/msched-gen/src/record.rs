use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use msched_core::{EntityKind, WeightVector};
use serde::{Deserialize, Serialize};

use crate::fields::{FlagField, ScalarField, ScopedField, ValueKind};

/// Stored value of an entity-scoped override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Count(u32),
    Real(f64),
}

impl OverrideValue {
    /// Converts a candidate into the storage type of `kind`.
    pub fn from_candidate(kind: ValueKind, value: f64) -> Self {
        match kind {
            ValueKind::Real => OverrideValue::Real(value),
            // `as` saturates: negatives and NaN become 0.
            ValueKind::Count => OverrideValue::Count(value.round() as u32),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            OverrideValue::Count(count) => f64::from(count),
            OverrideValue::Real(value) => value,
        }
    }
}

/// Overrides of one entity class, keyed by field and then by entity key.
pub type EntityOverrides = BTreeMap<ScopedField, BTreeMap<String, OverrideValue>>;

/// One concrete parameter assignment consumed by a single scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default, with = "start_serde", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    pub weights: WeightVector,
    #[serde(default)]
    pub flags: BTreeMap<FlagField, bool>,
    #[serde(default)]
    pub scalars: BTreeMap<ScalarField, f64>,
    #[serde(default)]
    pub station: EntityOverrides,
    #[serde(default)]
    pub source: EntityOverrides,
    #[serde(default)]
    pub baseline: EntityOverrides,
}

impl ParameterSet {
    /// Empty assignment carrying the given weight vector.
    pub fn new(weights: WeightVector) -> Self {
        Self {
            start: None,
            weights,
            flags: BTreeMap::new(),
            scalars: BTreeMap::new(),
            station: BTreeMap::new(),
            source: BTreeMap::new(),
            baseline: BTreeMap::new(),
        }
    }

    pub fn flag(&self, field: FlagField) -> Option<bool> {
        self.flags.get(&field).copied()
    }

    pub fn scalar(&self, field: ScalarField) -> Option<f64> {
        self.scalars.get(&field).copied()
    }

    pub fn overrides(&self, kind: EntityKind) -> &EntityOverrides {
        match kind {
            EntityKind::Station => &self.station,
            EntityKind::Source => &self.source,
            EntityKind::Baseline => &self.baseline,
        }
    }

    fn overrides_mut(&mut self, kind: EntityKind) -> &mut EntityOverrides {
        match kind {
            EntityKind::Station => &mut self.station,
            EntityKind::Source => &mut self.source,
            EntityKind::Baseline => &mut self.baseline,
        }
    }

    /// Override stored for `key` under `field`, if any.
    pub fn override_value(&self, field: ScopedField, key: &str) -> Option<OverrideValue> {
        self.overrides(field.entity())
            .get(&field)
            .and_then(|per_key| per_key.get(key))
            .copied()
    }

    /// Writes one candidate for every key in `keys`.
    pub fn set_override(&mut self, field: ScopedField, keys: &[String], value: f64) {
        let stored = OverrideValue::from_candidate(field.value_kind(), value);
        let per_key = self.overrides_mut(field.entity()).entry(field).or_default();
        for key in keys {
            per_key.insert(key.clone(), stored);
        }
    }
}

mod start_serde {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::catalog::{format_start, parse_start};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(start) => serializer.serialize_str(&format_start(start)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        text.map(|t| parse_start(&t).map_err(D::Error::custom))
            .transpose()
    }
}
