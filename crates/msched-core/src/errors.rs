//! Structured error types shared across the multi-scheduling crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MschedError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameter names, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for parameter space generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MschedError {
    /// A flag, numeric or scoped parameter name outside the supported set.
    #[error("unknown parameter: {0}")]
    UnknownParameter(ErrorInfo),
    /// A declared dimension ended up with no candidate values.
    #[error("empty dimension: {0}")]
    EmptyDimension(ErrorInfo),
    /// The requested maximum output size cannot be honoured.
    #[error("invalid sample size: {0}")]
    InvalidSampleSize(ErrorInfo),
    /// The product of all dimension sizes does not fit into `usize`.
    #[error("combinatorial overflow: {0}")]
    CombinatorialOverflow(ErrorInfo),
    /// Serialization, parsing and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MschedError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MschedError::UnknownParameter(info)
            | MschedError::EmptyDimension(info)
            | MschedError::InvalidSampleSize(info)
            | MschedError::CombinatorialOverflow(info)
            | MschedError::Serde(info) => info,
        }
    }

    /// Shorthand for an unknown parameter name error.
    pub fn unknown_parameter(name: &str, expected: &str) -> Self {
        MschedError::UnknownParameter(
            ErrorInfo::new("unknown-parameter", format!("`{name}` is not a {expected} parameter"))
                .with_context("name", name)
                .with_context("expected", expected),
        )
    }

    /// Shorthand for an empty candidate list error.
    pub fn empty_dimension(name: &str) -> Self {
        MschedError::EmptyDimension(
            ErrorInfo::new("empty-dimension", "dimension has no candidate values")
                .with_context("name", name)
                .with_hint("a dimension without candidates would empty the whole table"),
        )
    }
}
