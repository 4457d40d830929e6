//! JSON deserialization types (DTO layer).
//!
//! These types mirror the output of `lookml-parser` and exist solely for
//! serde. Every key is optional here; required keys are validated when the
//! loader converts DTOs into entities.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Root of the parser output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentDto {
    /// Parsed files grouped by kind.
    #[serde(default)]
    pub file: FilesDto,
}

/// Parsed files grouped by kind, keyed by file name.
///
/// `BTreeMap` keeps file names sorted, which fixes entity order regardless
/// of the key order the parser emitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesDto {
    /// `*.view.lkml` files.
    #[serde(default)]
    pub view: BTreeMap<String, ViewFileDto>,
    /// `*.model.lkml` files.
    #[serde(default)]
    pub model: BTreeMap<String, ModelFileDto>,
}

/// A view file: `{"view": {fileName: viewObject}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewFileDto {
    /// Views declared in the file, keyed by file name.
    #[serde(default)]
    pub view: BTreeMap<String, ViewDto>,
}

/// A model file: `{"model": {fileName: modelObject}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelFileDto {
    /// Models declared in the file, keyed by file name.
    #[serde(default)]
    pub model: BTreeMap<String, ModelDto>,
}

/// A `view:` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewDto {
    #[serde(rename = "_view")]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub sql_table_name: Option<String>,
    #[serde(default)]
    pub derived_table: Option<Value>,
    #[serde(default)]
    pub dimensions: Vec<DimensionDto>,
    #[serde(default)]
    pub dimension_groups: Vec<DimensionGroupDto>,
    #[serde(default)]
    pub measures: Vec<MeasureDto>,
}

/// A `dimension:` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DimensionDto {
    #[serde(rename = "_dimension")]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
    /// `true` from JSON or the LookML literal `"yes"`.
    #[serde(default)]
    pub primary_key: Option<Value>,
}

/// A `dimension_group:` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DimensionGroupDto {
    #[serde(rename = "_dimension_group")]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub timeframes: Option<Vec<String>>,
}

/// A `measure:` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasureDto {
    #[serde(rename = "_measure")]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
}

/// A `model` file body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDto {
    #[serde(rename = "_model")]
    pub name: Option<String>,
    #[serde(default)]
    pub include: Includes,
    #[serde(default)]
    pub explores: Vec<ExploreDto>,
}

/// `include:` accepts a single string or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Includes {
    /// `include: "orders.view"`
    One(String),
    /// `include: ["orders.view", "users.view"]`
    Many(Vec<String>),
}

impl Default for Includes {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Includes {
    /// Flattens into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// An `explore:` block; its own keys describe the base view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreDto {
    #[serde(rename = "_explore")]
    pub name: Option<String>,
    #[serde(rename = "_model", default)]
    pub model: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub view_name: Option<String>,
    #[serde(default)]
    pub view_label: Option<String>,
    #[serde(default)]
    pub joins: Vec<JoinDto>,
}

/// A `join:` block inside an explore.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinDto {
    #[serde(rename = "_join", default)]
    pub name: Option<String>,
    #[serde(rename = "_explore", default)]
    pub explore: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub view_name: Option<String>,
    #[serde(default)]
    pub view_label: Option<String>,
    #[serde(default)]
    pub sql_on: Option<String>,
}
