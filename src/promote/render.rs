use std::io::Write;

use anyhow::{Context, Result};

use crate::model::{PromotionOutcome, PromotionView};
use crate::output::ObjectPrinter;

/// Prints the outcome to `out` and returns the call error, if any.
///
/// Without a printer, one `Promotion Created: "<name>"` line per promotion.
/// With one, each promotion goes through it. Either way everything that was
/// created is printed before the error is returned.
pub fn render(
    outcome: PromotionOutcome,
    printer: Option<&dyn ObjectPrinter>,
    out: &mut dyn Write,
) -> Result<()> {
    let PromotionOutcome {
        promotions,
        call_error,
    } = outcome;

    let printed = match printer {
        None => promotions.iter().try_for_each(|p| {
            writeln!(out, "Promotion Created: {:?}", p.name()).context("write promotion")
        }),
        Some(printer) => promotions
            .iter()
            .try_for_each(|p| printer.print_obj(&PromotionView::from(p), out)),
    };

    match (call_error, printed) {
        (Some(err), Err(print_err)) => {
            let print_err = format!("{:#}", print_err);
            tracing::warn!(error = %print_err, "failed to print promotions");
            Err(err)
        }
        (Some(err), Ok(())) => Err(err),
        (None, printed) => printed,
    }
}

#[cfg(test)]
#[path = "../tests/promote/render_tests.rs"]
mod tests;
