use std::collections::BTreeMap;

use msched_core::EntityKind;
use serde::{Deserialize, Serialize};

/// Named groups of stations, sources and baselines.
///
/// Member order is the order of registration; a member registered twice in the
/// same group is kept once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupTable {
    #[serde(default)]
    pub station: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub source: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub baseline: BTreeMap<String, Vec<String>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a group for the given entity class.
    pub fn insert<I, S>(&mut self, kind: EntityKind, name: impl Into<String>, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for member in members {
            let member = member.into();
            if !ordered.contains(&member) {
                ordered.push(member);
            }
        }
        self.groups_mut(kind).insert(name.into(), ordered);
    }

    pub fn groups(&self, kind: EntityKind) -> &BTreeMap<String, Vec<String>> {
        match kind {
            EntityKind::Station => &self.station,
            EntityKind::Source => &self.source,
            EntityKind::Baseline => &self.baseline,
        }
    }

    fn groups_mut(&mut self, kind: EntityKind) -> &mut BTreeMap<String, Vec<String>> {
        match kind {
            EntityKind::Station => &mut self.station,
            EntityKind::Source => &mut self.source,
            EntityKind::Baseline => &mut self.baseline,
        }
    }

    /// Expands a member token into the entity keys it stands for.
    ///
    /// A registered group name yields its members in declared order, anything
    /// else is taken as a literal entity key.
    pub fn resolve(&self, kind: EntityKind, member: &str) -> Vec<String> {
        match self.groups(kind).get(member) {
            Some(members) => members.clone(),
            None => vec![member.to_string()],
        }
    }
}
