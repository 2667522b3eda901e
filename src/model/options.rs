use std::fmt;

/// Raw promotion inputs as they arrive from the command line.
///
/// Empty strings mean "not given". Nothing here is checked yet; run the
/// options through [`crate::promote::validate`] to get a [`PromoteRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromoteOptions {
    pub project: String,
    pub freight_name: String,
    pub freight_alias: String,
    pub target_stage: String,
    pub subscribers_of_stage: String,
    pub output_format: Option<String>,
}

impl PromoteOptions {
    /// The requested structured format, treating `Some("")` as unset.
    pub fn output_format(&self) -> Option<&str> {
        self.output_format.as_deref().filter(|f| !f.is_empty())
    }
}

/// How the freight to promote is identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FreightRef {
    ByName(String),
    ByAlias(String),
}

impl FreightRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            FreightRef::ByName(name) => Some(name.as_str()),
            FreightRef::ByAlias(_) => None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            FreightRef::ByName(_) => None,
            FreightRef::ByAlias(alias) => Some(alias.as_str()),
        }
    }
}

impl fmt::Display for FreightRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreightRef::ByName(name) => write!(f, "freight {}", name),
            FreightRef::ByAlias(alias) => write!(f, "freight alias {}", alias),
        }
    }
}

/// Where the freight goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Promote into this stage.
    ByStage(String),
    /// Promote into every stage subscribed to this one.
    BySubscribersOf(String),
}

impl Selector {
    pub fn stage(&self) -> &str {
        match self {
            Selector::ByStage(stage) | Selector::BySubscribersOf(stage) => stage.as_str(),
        }
    }
}

/// A validated promotion request. Exactly one freight reference and exactly
/// one target selector, by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromoteRequest {
    pub project: String,
    pub freight: FreightRef,
    pub selector: Selector,
}
