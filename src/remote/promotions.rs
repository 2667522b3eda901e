use super::*;

const PROMOTE_STAGE: &str = "PromoteStage";
const PROMOTE_SUBSCRIBERS: &str = "PromoteSubscribers";

impl PromotionService for RemoteClient {
    fn promote_to_stage(
        &self,
        ctx: &CallContext,
        project: &str,
        freight: &FreightRef,
        stage: &str,
    ) -> Result<Promotion> {
        let body = PromotionRequestBody::new(project, freight, stage);
        let resp = self.post_rpc(ctx, PROMOTE_STAGE, &body)?;
        if !resp.status().is_success() {
            let (err, _) = self.rpc_error(resp);
            return Err(err);
        }

        let parsed: PromoteStageResponse = resp
            .json()
            .map_err(|err| transport_error(err, "parse promote stage response".to_string()))?;
        parsed
            .promotion
            .context("promote stage response did not include a promotion")
    }

    fn promote_subscribers_of_stage(
        &self,
        ctx: &CallContext,
        project: &str,
        freight: &FreightRef,
        stage: &str,
    ) -> PartialResult<Vec<Promotion>> {
        let body = PromotionRequestBody::new(project, freight, stage);
        let resp = match self.post_rpc(ctx, PROMOTE_SUBSCRIBERS, &body) {
            Ok(resp) => resp,
            Err(err) => return PartialResult::err(err),
        };

        if !resp.status().is_success() {
            let (err, created) = self.rpc_error(resp);
            if created.is_empty() {
                return PartialResult::err(err);
            }
            return PartialResult::partial(created, err);
        }

        match resp.json::<PromoteSubscribersResponse>() {
            Ok(parsed) => PartialResult::ok(parsed.promotions),
            Err(err) => PartialResult::err(transport_error(
                err,
                "parse promote subscribers response".to_string(),
            )),
        }
    }
}
