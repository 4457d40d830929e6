//! DTO → entity conversion with validation, then reference resolution.
//!
//! Loading runs in two phases:
//!
//! 1. **construct**: every DTO becomes an entity; required keys are checked
//! 2. **resolve**: each explore view is matched to its source view and
//!    inherits the view's label when the view was explicitly labeled
//!
//! Nothing is mutated after [`load`] returns.

use std::collections::HashMap;

use miette::Diagnostic;
use tracing::debug;

use super::document::LookmlDocument;
use super::dto::{
    DimensionDto, DimensionGroupDto, DocumentDto, ExploreDto, JoinDto, MeasureDto, ModelDto,
    ViewDto,
};
use super::explore::{Explore, ExploreView};
use super::field::{Dimension, DimensionGroup, Measure};
use super::model::{include_view_name, Model};
use super::view::View;
use crate::labels::{default_label, Labeled};

/// Errors raised while building a document from parser output.
///
/// All of them mean the parser output is malformed; no partial document is
/// ever returned.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadError {
    /// The input is not valid JSON or has an unexpected shape.
    #[error("invalid parser output: {0}")]
    #[diagnostic(code(lookmlint::load::json))]
    Json(#[from] serde_json::Error),

    /// A required key is absent.
    #[error("{context}: missing required key `{key}`")]
    #[diagnostic(
        code(lookmlint::load::missing_key),
        help("the LookML parser output is incomplete; re-run the parser")
    )]
    MissingKey {
        /// Where the key was expected (e.g., `view file "orders"`).
        context: String,
        /// The missing key.
        key: &'static str,
    },

    /// Two views share a name, so references to it are ambiguous.
    #[error("view `{name}` is declared more than once")]
    #[diagnostic(code(lookmlint::load::duplicate_view))]
    DuplicateView {
        /// The duplicated view name.
        name: String,
    },

    /// An explore view reads from a view that does not exist.
    #[error("{model}.{explore}: `{explore_view}` references unknown view `{source_view}`")]
    #[diagnostic(
        code(lookmlint::load::unknown_view),
        help("check the `from:` / `view_name:` of the join and the model's includes")
    )]
    UnknownView {
        /// Model declaring the explore.
        model: String,
        /// Explore containing the reference.
        explore: String,
        /// Alias of the explore view.
        explore_view: String,
        /// The view name that did not resolve.
        source_view: String,
    },
}

/// Converts parser output into a resolved [`LookmlDocument`].
///
/// # Errors
///
/// Returns the first validation or resolution error encountered.
pub fn load(dto: DocumentDto) -> Result<LookmlDocument, LoadError> {
    let views = dto
        .file
        .view
        .into_iter()
        .map(|(file, mut body)| {
            let view = body.view.remove(&file).ok_or_else(|| LoadError::MissingKey {
                context: format!("view file \"{file}\""),
                key: "view",
            })?;
            convert_view(view, &file)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let models = dto
        .file
        .model
        .into_iter()
        .map(|(file, mut body)| {
            let model = body.model.remove(&file).ok_or_else(|| LoadError::MissingKey {
                context: format!("model file \"{file}\""),
                key: "model",
            })?;
            convert_model(model, &file)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Constructed {} model(s) and {} view(s)",
        models.len(),
        views.len()
    );

    resolve(models, views)
}

/// Second phase: links explore views to views and propagates custom labels.
fn resolve(mut models: Vec<Model>, views: Vec<View>) -> Result<LookmlDocument, LoadError> {
    let mut index: HashMap<&str, &View> = HashMap::with_capacity(views.len());
    for view in &views {
        if index.insert(view.name(), view).is_some() {
            return Err(LoadError::DuplicateView {
                name: view.name().to_string(),
            });
        }
    }

    for model in &mut models {
        for explore in &mut model.explores {
            for explore_view in &mut explore.views {
                let source = index.get(explore_view.source_view()).ok_or_else(|| {
                    LoadError::UnknownView {
                        model: model.name.clone(),
                        explore: explore.name.clone(),
                        explore_view: explore_view.name().to_string(),
                        source_view: explore_view.source_view().to_string(),
                    }
                })?;
                if source.has_custom_label() {
                    debug!(
                        "{}.{}: `{}` inherits label {:?} from view `{}`",
                        model.name,
                        explore.name,
                        explore_view.name(),
                        source.label(),
                        source.name()
                    );
                    explore_view.inherit_label(source.label());
                }
            }
        }
    }

    Ok(LookmlDocument::new(models, views))
}

fn required(value: Option<String>, context: &str, key: &'static str) -> Result<String, LoadError> {
    value.ok_or_else(|| LoadError::MissingKey {
        context: context.to_string(),
        key,
    })
}

fn label_or_default(label: Option<String>, name: &str) -> String {
    label.unwrap_or_else(|| default_label(name))
}

fn convert_view(dto: ViewDto, file: &str) -> Result<View, LoadError> {
    let name = required(dto.name, &format!("view file \"{file}\""), "_view")?;
    debug!("Loading view `{name}`");

    let dimensions = dto
        .dimensions
        .into_iter()
        .map(|d| convert_dimension(d, &name))
        .collect::<Result<Vec<_>, _>>()?;
    let dimension_groups = dto
        .dimension_groups
        .into_iter()
        .map(|g| convert_dimension_group(g, &name))
        .collect::<Result<Vec<_>, _>>()?;
    let measures = dto
        .measures
        .into_iter()
        .map(|m| convert_measure(m, &name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(View {
        label: label_or_default(dto.label, &name),
        sql_table_name: dto.sql_table_name,
        has_derived_table: dto.derived_table.is_some_and(|d| !d.is_null()),
        dimensions,
        dimension_groups,
        measures,
        name,
    })
}

fn convert_dimension(dto: DimensionDto, view: &str) -> Result<Dimension, LoadError> {
    let name = required(dto.name, &format!("view `{view}` dimension"), "_dimension")?;
    let primary_key = match dto.primary_key {
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(serde_json::Value::String(s)) => s == "yes",
        _ => false,
    };
    Ok(Dimension {
        kind: dto.kind.unwrap_or_else(|| "string".to_string()),
        label: label_or_default(dto.label, &name),
        description: dto.description,
        sql: dto.sql,
        primary_key,
        name,
    })
}

fn convert_dimension_group(dto: DimensionGroupDto, view: &str) -> Result<DimensionGroup, LoadError> {
    let name = required(
        dto.name,
        &format!("view `{view}` dimension_group"),
        "_dimension_group",
    )?;
    Ok(DimensionGroup {
        kind: dto.kind.unwrap_or_else(|| "string".to_string()),
        label: label_or_default(dto.label, &name),
        description: dto.description,
        sql: dto.sql,
        timeframes: dto.timeframes.unwrap_or_default(),
        name,
    })
}

fn convert_measure(dto: MeasureDto, view: &str) -> Result<Measure, LoadError> {
    let name = required(dto.name, &format!("view `{view}` measure"), "_measure")?;
    Ok(Measure {
        kind: dto.kind,
        label: label_or_default(dto.label, &name),
        description: dto.description,
        sql: dto.sql,
        name,
    })
}

fn convert_model(dto: ModelDto, file: &str) -> Result<Model, LoadError> {
    let name = required(dto.name, &format!("model file \"{file}\""), "_model")?;
    debug!("Loading model `{name}`");

    let includes = dto
        .include
        .into_vec()
        .iter()
        .map(|i| include_view_name(i))
        .collect();
    let explores = dto
        .explores
        .into_iter()
        .map(|e| convert_explore(e, &name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Model {
        name,
        includes,
        explores,
    })
}

fn convert_explore(dto: ExploreDto, model: &str) -> Result<Explore, LoadError> {
    let name = required(dto.name, &format!("model `{model}` explore"), "_explore")?;

    let base_name = dto.view_name.clone().unwrap_or_else(|| name.clone());
    let base = ExploreView {
        label: label_or_default(dto.view_label, &base_name),
        source_view: dto.from.or(dto.view_name).unwrap_or_else(|| name.clone()),
        explore: name.clone(),
        sql_on: None,
        name: base_name,
    };

    let mut views = Vec::with_capacity(dto.joins.len() + 1);
    views.push(base);
    for join in dto.joins {
        views.push(convert_join(join, model, &name)?);
    }

    Ok(Explore {
        label: label_or_default(dto.label, &name),
        model: dto.model.unwrap_or_else(|| model.to_string()),
        views,
        name,
    })
}

fn convert_join(dto: JoinDto, model: &str, explore: &str) -> Result<ExploreView, LoadError> {
    let name = required(
        dto.view_name.clone().or(dto.name),
        &format!("model `{model}` explore `{explore}` join"),
        "_join",
    )?;
    Ok(ExploreView {
        label: label_or_default(dto.view_label, &name),
        source_view: dto.from.or(dto.view_name).unwrap_or_else(|| name.clone()),
        explore: dto.explore.unwrap_or_else(|| explore.to_string()),
        sql_on: dto.sql_on,
        name,
    })
}
