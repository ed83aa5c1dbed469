//! Delimited point-file parsing.
//!
//! One record per line, comma-separated: field 0 is reserved and ignored,
//! field 1 is latitude, field 2 is longitude, both decimal degrees. A
//! malformed record fails the whole load with the 1-based line number;
//! blank lines are skipped.

use heat_common::{HeatError, Result};

/// Parse delimited content into `(lat, lng)` pairs.
pub(crate) fn parse_delimited(content: &str) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(HeatError::parse_error(format!(
                "line {line_no}: expected at least 3 comma-separated fields, got {}",
                fields.len()
            )));
        }

        let lat: f64 = fields[1].trim().parse().map_err(|_| {
            HeatError::parse_error(format!("line {line_no}: bad latitude '{}'", fields[1].trim()))
        })?;
        let lng: f64 = fields[2].trim().parse().map_err(|_| {
            HeatError::parse_error(format!(
                "line {line_no}: bad longitude '{}'",
                fields[2].trim()
            ))
        })?;

        points.push((lat, lng));
    }

    Ok(points)
}
