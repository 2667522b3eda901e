use tracing::{debug, warn};

use super::CallContext;
use crate::model::{PromoteRequest, PromotionOutcome, Selector};
use crate::remote::{PartialResult, PromotionService};

/// Performs the single remote call selected by `req.selector`.
///
/// Never retries. Remote failures, including an expired deadline, end up in
/// `call_error` wrapped with the operation label.
pub fn dispatch<S>(ctx: &CallContext, req: &PromoteRequest, service: &S) -> PromotionOutcome
where
    S: PromotionService + ?Sized,
{
    match &req.selector {
        Selector::ByStage(stage) => {
            debug!(
                project = %req.project,
                freight = %req.freight,
                stage = %stage,
                "promoting to stage"
            );
            match service.promote_to_stage(ctx, &req.project, &req.freight, stage) {
                Ok(promotion) => PromotionOutcome::created(vec![promotion]),
                Err(err) => PromotionOutcome::failed(err.context("promote stage")),
            }
        }
        Selector::BySubscribersOf(stage) => {
            debug!(
                project = %req.project,
                freight = %req.freight,
                stage = %stage,
                "promoting to subscribers"
            );
            let PartialResult { value, error } =
                service.promote_subscribers_of_stage(ctx, &req.project, &req.freight, stage);
            let outcome = PromotionOutcome {
                promotions: value.unwrap_or_default(),
                call_error: error.map(|err| err.context("promote subscribers")),
            };
            if outcome.is_partial() {
                warn!(
                    created = outcome.promotions.len(),
                    "promotion to subscribers failed after creating some promotions"
                );
            } else {
                debug!(
                    created = outcome.promotions.len(),
                    "promotion to subscribers finished"
                );
            }
            outcome
        }
    }
}
