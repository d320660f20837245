//! Output formatter implementations.

use std::fmt::Write as _;

use crate::{Error, Result};

use super::{LayoutReport, OutputFormatter};

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LayoutReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &LayoutReport) -> Result<String> {
        let mut out = String::new();

        let elevator = report.elevator.as_deref().unwrap_or("none");
        let _ = writeln!(
            out,
            "Rack {} ({} dots, elevator: {elevator})",
            report.profile, report.stats.amount_dots
        );

        if report.trays.is_empty() {
            out.push_str("No trays.");
            return Ok(out);
        }

        for tray in &report.trays {
            let mut flags = String::new();
            if tray.has_collision {
                flags.push_str(" [COLLISION]");
            }
            if tray.is_prohibited {
                flags.push_str(" [PROHIBITED]");
            }
            let _ = writeln!(
                out,
                "  #{} {} dot {} height {}mm{flags}",
                tray.display_order, tray.id, tray.dot, tray.height
            );

            for product in &tray.products {
                let _ = write!(
                    out,
                    "    [{}] x={} {}mm {} {}",
                    product.index,
                    product.x_offset,
                    product.width,
                    product.extractor.kind(),
                    product.pallet
                );
                if let Some(name) = &product.name {
                    let _ = write!(out, " {name}");
                }
                out.push('\n');
            }
        }

        if !report.rejected.is_empty() {
            out.push_str("Rejected:\n");
            for rejection in &report.rejected {
                let _ = writeln!(out, "  {}: {}", rejection.tray, rejection.reason);
            }
        }

        let _ = write!(
            out,
            "Utilization: {:.1}% across {} tray(s), {} product(s)",
            report.stats.utilization_percent, report.stats.tray_count, report.stats.product_count
        );

        Ok(out)
    }
}
