//! # lookmlint-core
//!
//! Object model for linting LookML repositories.
//!
//! This crate provides the foundations the lint passes run on:
//!
//! - [`LookmlDocument`] and its entities, built from `lookml-parser` JSON
//! - [`Labeled`] and [`label_issues`] for acronym/abbreviation checks
//! - [`LintConfig`] for the acronym/abbreviation lists and enabled checks
//! - [`LookmlParser`] for obtaining the parser JSON
//!
//! ## Example
//!
//! ```ignore
//! use lookmlint_core::{ExternalParser, LintConfig, LookmlParser};
//!
//! let doc = ExternalParser::new().load(Path::new("./looker"))?;
//! let config = LintConfig::from_file(Path::new("./looker/.lintconfig.yml"))?;
//! for view in doc.views() {
//!     println!("{:?}", view.field_label_issues(config.label_rules()));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod labels;
mod parser;

pub mod lookml;

pub use config::{CheckConfig, ConfigError, ConfigFormat, LintConfig};
pub use labels::{default_label, label_issues, title_case, LabelRules, Labeled};
pub use lookml::loader::LoadError;
pub use lookml::{
    Dimension, DimensionGroup, Explore, ExploreView, Field, LookmlDocument, Measure, Model, View,
};
pub use parser::{ExternalParser, JsonFileParser, LookmlParser, ParseError, DEFAULT_PARSER_PROGRAM};
