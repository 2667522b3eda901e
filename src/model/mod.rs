mod config;
mod options;
mod promotion;

pub use self::config::CliConfig;
pub use self::options::{FreightRef, PromoteOptions, PromoteRequest, Selector};
pub use self::promotion::{
    ObjectMeta, PROMOTION_API_VERSION, PROMOTION_KIND, Promotion, PromotionOutcome, PromotionView,
};
