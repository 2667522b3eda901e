use crate::model::{FreightRef, PromoteOptions, PromoteRequest, Selector};
use crate::output;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("project is required")]
    MissingProject,
    #[error("either freight name or freight alias is required")]
    MissingFreight,
    #[error("either target stage or subscribers-of stage is required")]
    MissingSelector,
    #[error("only one of freight name or freight alias may be set")]
    ConflictingFreight,
    #[error("only one of target stage or subscribers-of stage may be set")]
    ConflictingSelector,
    #[error("unsupported output format {0:?} (allowed: json, yaml, name)")]
    UnsupportedOutputFormat(String),
}

/// Every violation found in one pass, in check order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_lines(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn contains(&self, err: &ValidationError) -> bool {
        self.0.contains(err)
    }
}

fn join_lines(errs: &[ValidationError]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Checks every field and converts the options into a typed request.
/// All checks run; none short-circuits.
pub fn validate(opts: &PromoteOptions) -> Result<PromoteRequest, ValidationErrors> {
    let mut errs = Vec::new();
    let mut conflicts = Vec::new();

    if opts.project.is_empty() {
        errs.push(ValidationError::MissingProject);
    }

    let freight = match (
        non_empty(&opts.freight_name),
        non_empty(&opts.freight_alias),
    ) {
        (Some(name), None) => Some(FreightRef::ByName(name.to_string())),
        (None, Some(alias)) => Some(FreightRef::ByAlias(alias.to_string())),
        (None, None) => {
            errs.push(ValidationError::MissingFreight);
            None
        }
        (Some(_), Some(_)) => {
            conflicts.push(ValidationError::ConflictingFreight);
            None
        }
    };

    let selector = match (
        non_empty(&opts.target_stage),
        non_empty(&opts.subscribers_of_stage),
    ) {
        (Some(stage), None) => Some(Selector::ByStage(stage.to_string())),
        (None, Some(stage)) => Some(Selector::BySubscribersOf(stage.to_string())),
        (None, None) => {
            errs.push(ValidationError::MissingSelector);
            None
        }
        (Some(_), Some(_)) => {
            conflicts.push(ValidationError::ConflictingSelector);
            None
        }
    };

    errs.extend(conflicts);

    if let Some(format) = opts.output_format()
        && !output::is_supported(format)
    {
        errs.push(ValidationError::UnsupportedOutputFormat(format.to_string()));
    }

    match (freight, selector) {
        (Some(freight), Some(selector)) if errs.is_empty() => Ok(PromoteRequest {
            project: opts.project.clone(),
            freight,
            selector,
        }),
        _ => Err(ValidationErrors(errs)),
    }
}

#[cfg(test)]
#[path = "../tests/promote/validate_tests.rs"]
mod tests;
