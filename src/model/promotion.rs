use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PROMOTION_API_VERSION: &str = "kargo.akuity.io/v1alpha1";
pub const PROMOTION_KIND: &str = "Promotion";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A promotion as returned by the API server.
///
/// Only `metadata.name` is interpreted; `spec` and `status` belong to the
/// server's schema and are carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub spec: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
}

impl Promotion {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                ..ObjectMeta::default()
            },
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

/// The object shape handed to structured printers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionView {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,

    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub spec: serde_json::Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
}

impl From<&Promotion> for PromotionView {
    fn from(p: &Promotion) -> Self {
        Self {
            api_version: PROMOTION_API_VERSION.to_string(),
            kind: PROMOTION_KIND.to_string(),
            metadata: p.metadata.clone(),
            spec: p.spec.clone(),
            status: p.status.clone(),
        }
    }
}

/// Result of exactly one remote promotion attempt.
///
/// `call_error` and a non-empty `promotions` list may coexist: a fan-out to
/// subscribers can create some promotions before failing.
#[derive(Debug, Default)]
pub struct PromotionOutcome {
    pub promotions: Vec<Promotion>,
    pub call_error: Option<anyhow::Error>,
}

impl PromotionOutcome {
    pub fn created(promotions: Vec<Promotion>) -> Self {
        Self {
            promotions,
            call_error: None,
        }
    }

    pub fn failed(err: anyhow::Error) -> Self {
        Self {
            promotions: Vec::new(),
            call_error: Some(err),
        }
    }

    pub fn created_names(&self) -> Vec<&str> {
        self.promotions.iter().map(Promotion::name).collect()
    }

    pub fn is_partial(&self) -> bool {
        self.call_error.is_some() && !self.promotions.is_empty()
    }
}
