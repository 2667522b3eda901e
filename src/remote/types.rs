//! Wire payloads for the promotion RPCs.

use crate::model::{FreightRef, Promotion};

/// A result that may carry a value and an error at the same time.
#[derive(Debug)]
pub struct PartialResult<T> {
    pub value: Option<T>,
    pub error: Option<anyhow::Error>,
}

impl<T> PartialResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    pub fn err(error: anyhow::Error) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
    }

    pub fn partial(value: T, error: anyhow::Error) -> Self {
        Self {
            value: Some(value),
            error: Some(error),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PromotionRequestBody<'a> {
    pub(super) project: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) freight: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) freight_alias: Option<&'a str>,

    pub(super) stage: &'a str,
}

impl<'a> PromotionRequestBody<'a> {
    pub(super) fn new(project: &'a str, freight: &'a FreightRef, stage: &'a str) -> Self {
        Self {
            project,
            freight: freight.name(),
            freight_alias: freight.alias(),
            stage,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct PromoteStageResponse {
    #[serde(default)]
    pub(super) promotion: Option<Promotion>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct PromoteSubscribersResponse {
    #[serde(default)]
    pub(super) promotions: Vec<Promotion>,
}

/// Error body returned with a non-2xx status. `promotions` lists anything
/// created before the failure.
#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct RpcErrorBody {
    #[serde(default)]
    pub(super) code: Option<String>,
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) promotions: Vec<Promotion>,
}

impl RpcErrorBody {
    pub(super) fn describe(&self, status: reqwest::StatusCode) -> String {
        let code = self.code.as_deref().filter(|c| !c.is_empty());
        let message = self.message.as_deref().filter(|m| !m.is_empty());
        match (code, message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (None, Some(message)) => message.to_string(),
            (Some(code), None) => format!("{} (status {})", code, status),
            (None, None) => format!("request failed with status {}", status),
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
