use super::*;

impl RemoteClient {
    /// Posts one unary RPC. The remaining time on `ctx` becomes the request
    /// timeout; an already expired context never reaches the network.
    pub(super) fn post_rpc<B: serde::Serialize>(
        &self,
        ctx: &CallContext,
        method: &str,
        body: &B,
    ) -> Result<reqwest::blocking::Response> {
        let remaining = ctx.remaining()?;

        let mut req = self
            .client
            .post(self.url(method))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        if let Some(auth) = self.auth() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(timeout) = remaining {
            req = req.timeout(timeout);
        }

        tracing::debug!(method, url = %self.url(method), "sending rpc");
        req.send()
            .map_err(|err| transport_error(err, format!("{} request", method)))
    }

    /// Turns a non-2xx response into an error, keeping any promotions the
    /// server reported alongside it.
    pub(super) fn rpc_error(
        &self,
        resp: reqwest::blocking::Response,
    ) -> (anyhow::Error, Vec<Promotion>) {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return (
                anyhow::anyhow!("unauthorized (bearer token missing, invalid or expired)"),
                Vec::new(),
            );
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return (
                anyhow::anyhow!("forbidden (insufficient permissions in this project)"),
                Vec::new(),
            );
        }

        let body: RpcErrorBody = resp.json().unwrap_or_default();
        (anyhow::anyhow!(body.describe(status)), body.promotions)
    }

    pub(super) fn auth(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub(super) fn url(&self, method: &str) -> String {
        format!("{}{}/{}", self.base_url, SERVICE_PATH, method)
    }
}

/// Timeouts, whether hit while sending or while reading the body, all mean
/// the call deadline passed.
pub(super) fn transport_error(err: reqwest::Error, label: String) -> anyhow::Error {
    if err.is_timeout() {
        anyhow::Error::new(err).context("context deadline exceeded")
    } else {
        anyhow::Error::new(err).context(label)
    }
}
