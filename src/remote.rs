use anyhow::{Context, Result};

use crate::model::{CliConfig, FreightRef, Promotion};
use crate::promote::CallContext;

mod http_client;
use self::http_client::transport_error;

mod types;
pub use self::types::PartialResult;
use self::types::{
    PromoteStageResponse, PromoteSubscribersResponse, PromotionRequestBody, RpcErrorBody,
};
mod promotions;

pub const SERVICE_PATH: &str = "/akuity.io.kargo.service.v1alpha1.KargoService";

/// The two promotion operations exposed by the API server.
pub trait PromotionService {
    fn promote_to_stage(
        &self,
        ctx: &CallContext,
        project: &str,
        freight: &FreightRef,
        stage: &str,
    ) -> Result<Promotion>;

    /// May return promotions and an error together when the server created
    /// some promotions before failing.
    fn promote_subscribers_of_stage(
        &self,
        ctx: &CallContext,
        project: &str,
        freight: &FreightRef,
        stage: &str,
    ) -> PartialResult<Vec<Promotion>>;
}

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        insecure_skip_tls_verify: bool,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("kargo-cli")
            // Deadlines come from the CallContext of each request.
            .timeout(None)
            .danger_accept_invalid_certs(insecure_skip_tls_verify)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            client,
        })
    }

    pub fn from_config(cfg: &CliConfig) -> Result<Self> {
        if cfg.api_address.is_empty() {
            anyhow::bail!(
                "no API server configured (pass --server or run `kargo config set-server`)"
            );
        }
        Self::new(
            &cfg.api_address,
            cfg.bearer_token.clone(),
            cfg.insecure_skip_tls_verify,
        )
    }
}
