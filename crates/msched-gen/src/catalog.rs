use chrono::NaiveDateTime;
use msched_core::errors::{ErrorInfo, MschedError};
use msched_core::WeightComponent;
use serde::{Deserialize, Serialize};

use crate::fields::{lookup, FlagField, ParameterField, ScalarField, ScopedField};

/// Textual form of start-time candidates.
pub const START_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Parses a start-time candidate written as `YYYY.MM.DD HH:MM:SS`.
pub fn parse_start(text: &str) -> Result<NaiveDateTime, MschedError> {
    NaiveDateTime::parse_from_str(text.trim(), START_FORMAT).map_err(|err| {
        MschedError::Serde(
            ErrorInfo::new("start-parse", "invalid start time")
                .with_context("value", text)
                .with_hint(err.to_string()),
        )
    })
}

/// Formats a start-time candidate as `YYYY.MM.DD HH:MM:SS`.
pub fn format_start(start: &NaiveDateTime) -> String {
    start.format(START_FORMAT).to_string()
}

/// Global numeric parameter target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericTarget {
    /// Folded into the composite weight dimension.
    Weight(WeightComponent),
    /// Independent scalar dimension.
    Scalar(ScalarField),
}

impl NumericTarget {
    pub fn name(self) -> &'static str {
        match self {
            NumericTarget::Weight(component) => component.name(),
            NumericTarget::Scalar(field) => field.name(),
        }
    }
}

/// Global numeric parameter with its candidate values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericParameter {
    pub target: NumericTarget,
    pub values: Vec<f64>,
}

/// Entity-scoped parameter with its member token and candidate values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedParameter {
    pub field: ScopedField,
    /// Literal entity key or registered group name.
    pub member: String,
    pub values: Vec<f64>,
}

/// Declared tunable dimensions of a multi-scheduling experiment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct ParameterCatalog {
    start: Vec<NaiveDateTime>,
    flags: Vec<FlagField>,
    numeric: Vec<NumericParameter>,
    scoped: Vec<ScopedParameter>,
}

impl ParameterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a start-time candidate.
    pub fn add_start(&mut self, start: NaiveDateTime) {
        self.start.push(start);
    }

    /// Declares a boolean switch. Declaring the same switch twice is a no-op.
    pub fn add_flag(&mut self, name: &str) -> Result<(), MschedError> {
        let flag = match lookup(name) {
            Some(ParameterField::Flag(flag)) => flag,
            _ => return Err(MschedError::unknown_parameter(name, "flag")),
        };
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        Ok(())
    }

    /// Declares a global numeric parameter, replacing an earlier declaration
    /// of the same name in place.
    pub fn add_numeric(&mut self, name: &str, values: Vec<f64>) -> Result<(), MschedError> {
        let target = match lookup(name) {
            Some(ParameterField::Weight(component)) => NumericTarget::Weight(component),
            Some(ParameterField::Scalar(field)) => NumericTarget::Scalar(field),
            _ => return Err(MschedError::unknown_parameter(name, "global numeric")),
        };
        if values.is_empty() {
            return Err(MschedError::empty_dimension(name));
        }
        match self.numeric.iter_mut().find(|p| p.target == target) {
            Some(existing) => existing.values = values,
            None => self.numeric.push(NumericParameter { target, values }),
        }
        Ok(())
    }

    /// Declares an entity-scoped parameter, replacing an earlier declaration
    /// of the same `(name, member)` pair in place.
    pub fn add_scoped(
        &mut self,
        name: &str,
        member: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), MschedError> {
        let field = match lookup(name) {
            Some(ParameterField::Scoped(field)) => field,
            _ => return Err(MschedError::unknown_parameter(name, "scoped")),
        };
        if values.is_empty() {
            return Err(MschedError::empty_dimension(name));
        }
        let member = member.into();
        match self
            .scoped
            .iter_mut()
            .find(|p| p.field == field && p.member == member)
        {
            Some(existing) => existing.values = values,
            None => self.scoped.push(ScopedParameter {
                field,
                member,
                values,
            }),
        }
        Ok(())
    }

    pub fn start(&self) -> &[NaiveDateTime] {
        &self.start
    }

    pub fn flags(&self) -> &[FlagField] {
        &self.flags
    }

    pub fn numeric(&self) -> &[NumericParameter] {
        &self.numeric
    }

    pub fn scoped(&self) -> &[ScopedParameter] {
        &self.scoped
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
            && self.flags.is_empty()
            && self.numeric.is_empty()
            && self.scoped.is_empty()
    }
}

/// File representation of a catalog using plain parameter names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeric: Vec<NumericEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scoped: Vec<ScopedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumericEntry {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopedEntry {
    pub name: String,
    pub member: String,
    pub values: Vec<f64>,
}

impl TryFrom<CatalogFile> for ParameterCatalog {
    type Error = MschedError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let mut catalog = ParameterCatalog::new();
        for start in &file.start {
            catalog.add_start(parse_start(start)?);
        }
        for flag in &file.flags {
            catalog.add_flag(flag)?;
        }
        for entry in file.numeric {
            catalog.add_numeric(&entry.name, entry.values)?;
        }
        for entry in file.scoped {
            catalog.add_scoped(&entry.name, entry.member, entry.values)?;
        }
        Ok(catalog)
    }
}

impl From<ParameterCatalog> for CatalogFile {
    fn from(catalog: ParameterCatalog) -> Self {
        CatalogFile {
            start: catalog.start.iter().map(format_start).collect(),
            flags: catalog.flags.iter().map(|f| f.name().to_string()).collect(),
            numeric: catalog
                .numeric
                .into_iter()
                .map(|p| NumericEntry {
                    name: p.target.name().to_string(),
                    values: p.values,
                })
                .collect(),
            scoped: catalog
                .scoped
                .into_iter()
                .map(|p| ScopedEntry {
                    name: p.field.name().to_string(),
                    member: p.member,
                    values: p.values,
                })
                .collect(),
        }
    }
}
