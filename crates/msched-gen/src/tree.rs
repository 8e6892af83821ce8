//! Generic nested key/value configuration tree used to persist catalogs.
//!
//! Keys are ordered and may repeat, so a tree can hold several `value`
//! children or several sections for the same scoped parameter.

use std::collections::BTreeMap;

use msched_core::errors::{ErrorInfo, MschedError};
use serde::{Deserialize, Serialize};

use crate::catalog::{format_start, parse_start, ParameterCatalog};
use crate::fields::{lookup, ParameterField};

/// Root section holding the multi-scheduling catalog.
pub const ROOT_KEY: &str = "multisched";
const START_KEY: &str = "start";
const VALUE_KEY: &str = "value";
const MEMBER_ATTR: &str = "member";

/// Node of the configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ConfigEntry>,
}

/// Keyed child of a [`ConfigTree`] node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub node: ConfigTree,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Appends a child, keeping earlier children with the same key.
    pub fn add_child(&mut self, key: impl Into<String>, node: ConfigTree) -> &mut ConfigTree {
        self.children.push(ConfigEntry {
            key: key.into(),
            node,
        });
        let last = self.children.len() - 1;
        &mut self.children[last].node
    }

    /// First child stored under `key`.
    pub fn child(&self, key: &str) -> Option<&ConfigTree> {
        self.children
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.node)
    }

    /// All children stored under `key`, in insertion order.
    pub fn children_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ConfigTree> + 'a {
        self.children
            .iter()
            .filter(move |entry| entry.key == key)
            .map(|entry| &entry.node)
    }
}

fn value_section(values: impl IntoIterator<Item = String>) -> ConfigTree {
    let mut section = ConfigTree::new();
    for value in values {
        section.add_child(VALUE_KEY, ConfigTree::leaf(value));
    }
    section
}

/// Writes `catalog` as a tree rooted at a `multisched` section.
///
/// Numbers use the shortest representation that parses back to the same
/// double, so reading the tree back reproduces the candidate lists exactly.
pub fn catalog_to_tree(catalog: &ParameterCatalog) -> ConfigTree {
    let mut section = ConfigTree::new();
    if !catalog.start().is_empty() {
        section.add_child(
            START_KEY,
            value_section(catalog.start().iter().map(format_start)),
        );
    }
    for flag in catalog.flags() {
        section.add_child(flag.name(), ConfigTree::new());
    }
    for parameter in catalog.numeric() {
        section.add_child(
            parameter.target.name(),
            value_section(parameter.values.iter().map(|v| v.to_string())),
        );
    }
    for parameter in catalog.scoped() {
        let node = section.add_child(
            parameter.field.name(),
            value_section(parameter.values.iter().map(|v| v.to_string())),
        );
        node.attributes
            .insert(MEMBER_ATTR.to_string(), parameter.member.clone());
    }

    let mut root = ConfigTree::new();
    root.add_child(ROOT_KEY, section);
    root
}

fn tree_error(code: &str, message: &str, key: &str) -> MschedError {
    MschedError::Serde(ErrorInfo::new(code, message).with_context("key", key))
}

fn read_values(key: &str, node: &ConfigTree) -> Result<Vec<f64>, MschedError> {
    node.children_named(VALUE_KEY)
        .map(|value| {
            let text = value.data.as_deref().unwrap_or_default();
            text.trim().parse::<f64>().map_err(|err| {
                MschedError::Serde(
                    ErrorInfo::new("tree-number", "candidate is not a number")
                        .with_context("key", key)
                        .with_context("value", text)
                        .with_hint(err.to_string()),
                )
            })
        })
        .collect()
}

/// Reads a catalog back from a tree produced by [`catalog_to_tree`].
pub fn catalog_from_tree(tree: &ConfigTree) -> Result<ParameterCatalog, MschedError> {
    let section = tree
        .child(ROOT_KEY)
        .ok_or_else(|| tree_error("tree-root", "missing multisched section", ROOT_KEY))?;
    let mut catalog = ParameterCatalog::new();
    for entry in &section.children {
        let key = entry.key.as_str();
        let node = &entry.node;
        if key == START_KEY {
            for value in node.children_named(VALUE_KEY) {
                catalog.add_start(parse_start(value.data.as_deref().unwrap_or_default())?);
            }
            continue;
        }
        match lookup(key) {
            Some(ParameterField::Flag(_)) => catalog.add_flag(key)?,
            Some(ParameterField::Weight(_)) | Some(ParameterField::Scalar(_)) => {
                catalog.add_numeric(key, read_values(key, node)?)?
            }
            Some(ParameterField::Scoped(_)) => {
                let member = node.attributes.get(MEMBER_ATTR).ok_or_else(|| {
                    tree_error("tree-member", "scoped parameter without member", key)
                })?;
                catalog.add_scoped(key, member.clone(), read_values(key, node)?)?
            }
            None => return Err(MschedError::unknown_parameter(key, "multisched")),
        }
    }
    Ok(catalog)
}
