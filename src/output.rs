//! Structured printers for promotion objects.

use std::cell::Cell;
use std::io::Write;

use anyhow::{Context, Result};

use crate::model::PromotionView;

pub const SUPPORTED_FORMATS: &[&str] = &["json", "yaml", "name"];

/// Renders one object at a time to a writer.
pub trait ObjectPrinter {
    fn print_obj(&self, obj: &PromotionView, out: &mut dyn Write) -> Result<()>;
}

pub fn is_supported(format: &str) -> bool {
    SUPPORTED_FORMATS.contains(&format)
}

/// Returns a fresh printer for `format`. Printers may keep per-run state
/// (document separators), so build a new one for every render.
pub fn printer_for(format: &str) -> Result<Box<dyn ObjectPrinter>> {
    match format {
        "json" => Ok(Box::new(JsonPrinter)),
        "yaml" => Ok(Box::new(YamlPrinter::default())),
        "name" => Ok(Box::new(NamePrinter)),
        other => anyhow::bail!(
            "unsupported output format {:?} (allowed: {})",
            other,
            SUPPORTED_FORMATS.join(", ")
        ),
    }
}

pub struct JsonPrinter;

impl ObjectPrinter for JsonPrinter {
    fn print_obj(&self, obj: &PromotionView, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, obj).context("serialize promotion json")?;
        writeln!(out).context("write promotion json")?;
        Ok(())
    }
}

#[derive(Default)]
pub struct YamlPrinter {
    printed: Cell<usize>,
}

impl ObjectPrinter for YamlPrinter {
    fn print_obj(&self, obj: &PromotionView, out: &mut dyn Write) -> Result<()> {
        let doc = serde_yaml_ng::to_string(obj).context("serialize promotion yaml")?;
        if self.printed.get() > 0 {
            writeln!(out, "---").context("write yaml separator")?;
        }
        out.write_all(doc.as_bytes())
            .context("write promotion yaml")?;
        self.printed.set(self.printed.get() + 1);
        Ok(())
    }
}

/// `<resource>.<group>/<name>`, one per line.
pub struct NamePrinter;

impl ObjectPrinter for NamePrinter {
    fn print_obj(&self, obj: &PromotionView, out: &mut dyn Write) -> Result<()> {
        let group = obj
            .api_version
            .split_once('/')
            .map(|(group, _)| group)
            .unwrap_or(obj.api_version.as_str());
        writeln!(
            out,
            "{}.{}/{}",
            obj.kind.to_ascii_lowercase(),
            group,
            obj.metadata.name
        )
        .context("write promotion name")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
