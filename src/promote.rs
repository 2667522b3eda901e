//! The `promote` command core: validate the options, make one remote call,
//! print what was created.

use std::io::Write;

use anyhow::{Context, Result};

use crate::model::PromoteOptions;
use crate::output;
use crate::remote::PromotionService;

mod context;
mod dispatch;
mod render;
mod validate;

pub use self::context::{CallContext, DeadlineExceeded};
pub use self::dispatch::dispatch;
pub use self::render::render;
pub use self::validate::{ValidationError, ValidationErrors, validate};

/// Validates `opts`, connects, promotes, and renders to `out`.
///
/// `connect` only runs once validation has passed, so invalid input never
/// touches the network.
pub fn run<S, F>(
    ctx: &CallContext,
    opts: &PromoteOptions,
    connect: F,
    out: &mut dyn Write,
) -> Result<()>
where
    S: PromotionService,
    F: FnOnce() -> Result<S>,
{
    let req = validate(opts)?;
    let printer = opts
        .output_format()
        .map(output::printer_for)
        .transpose()
        .context("new printer")?;
    let service = connect()?;
    let outcome = dispatch(ctx, &req, &service);
    render(outcome, printer.as_deref(), out)
}

#[cfg(test)]
#[path = "tests/promote_tests.rs"]
mod tests;
