//! Evaluate a file of `sign a b` lines.
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};
use crate::sum::{Evaluation, Sign};
use std::path::Path;
use tracing::{debug, info};

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<(Sign, i64, i64)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [sign, a, b] = fields.as_slice() else {
        return Err(Error::parse(format!(
            "expected `sign a b`, got {} field(s)",
            fields.len()
        )));
    };

    let sign: Sign = sign.parse()?;
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok(Some((sign, a, b)))
}

fn parse_operand(s: &str) -> Result<i64> {
    s.parse()
        .map_err(|e| Error::parse(format!("{s:?} is not an integer: {e}")))
}

pub fn evaluate_str(input: &str) -> Result<Vec<Evaluation>> {
    let mut evals = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let parsed = parse_line(line).map_err(|e| match e {
            Error::Parse(msg) => Error::parse(format!("line {}: {msg}", idx + 1)),
            other => other,
        })?;
        if let Some((sign, a, b)) = parsed {
            let eval = Evaluation::new(sign, a, b);
            debug!(line = idx + 1, %sign, a, b, sum = ?eval.sum, "evaluated");
            evals.push(eval);
        }
    }
    Ok(evals)
}

pub fn evaluate_file(path: &Path) -> Result<Vec<Evaluation>> {
    info!(path = %path.display(), "batch: reading");
    let content = std::fs::read_to_string(path)?;
    let evals = evaluate_str(&content)?;
    info!(
        count = evals.len(),
        no_result = evals.iter().filter(|e| e.sum.is_none()).count(),
        "batch: done"
    );
    Ok(evals)
}
