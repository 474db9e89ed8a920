//! Output formatter implementations.

use std::fmt::Write;

use crate::{Error, ReservationSnapshot, Result};

use super::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_snapshot(&self, snapshot: &ReservationSnapshot) -> Result<String> {
        Self::to_json(snapshot)
    }

    fn format_list(&self, snapshots: &[ReservationSnapshot]) -> Result<String> {
        Self::to_json(snapshots)
    }
}

/// Formatter for human-readable output.
pub struct TextFormatter;

fn label(snapshot: &ReservationSnapshot) -> String {
    snapshot
        .id
        .map_or_else(|| "Reservation (unsaved)".to_string(), |id| format!("Reservation {id}"))
}

fn write_snapshot(out: &mut String, snapshot: &ReservationSnapshot, depth: usize) {
    let indent = "  ".repeat(depth);
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{indent}{}", label(snapshot));
    let _ = writeln!(out, "{indent}  guest:    {}", snapshot.guest_id);
    let _ = writeln!(out, "{indent}  schedule: {}", snapshot.schedule_id);
    let _ = writeln!(out, "{indent}  status:   {}", snapshot.reservation_status);
    let _ = writeln!(out, "{indent}  value:    {}", snapshot.value);
    let _ = writeln!(out, "{indent}  refund:   {}", snapshot.refund_value);

    if let Some(previous) = &snapshot.previous_reservation {
        let _ = writeln!(out, "{indent}  replaces:");
        write_snapshot(out, previous, depth + 2);
    }
}

impl OutputFormatter for TextFormatter {
    fn format_snapshot(&self, snapshot: &ReservationSnapshot) -> Result<String> {
        let mut out = String::new();
        write_snapshot(&mut out, snapshot, 0);
        Ok(out.trim_end().to_string())
    }

    fn format_list(&self, snapshots: &[ReservationSnapshot]) -> Result<String> {
        if snapshots.is_empty() {
            return Ok("No reservations".to_string());
        }

        let mut lines = Vec::with_capacity(snapshots.len() + 1);
        lines.push(format!(
            "{:<6} {:<8} {:<10} {:<14} {:>8} {:>8}",
            "ID", "GUEST", "SCHEDULE", "STATUS", "VALUE", "REFUND"
        ));
        for snapshot in snapshots {
            let id = snapshot
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            lines.push(format!(
                "{:<6} {:<8} {:<10} {:<14} {:>8} {:>8}",
                id,
                snapshot.guest_id.to_string(),
                snapshot.schedule_id.to_string(),
                snapshot.reservation_status,
                snapshot.value.to_string(),
                snapshot.refund_value.to_string()
            ));
        }
        Ok(lines.join("\n"))
    }
}
