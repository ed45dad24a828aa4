//! Input-file parsing for the two engines.
//!
//! Points files come in two layouts: a leading count line `N` followed by N
//! `x y` lines, or bare `x y` lines. Malformed point lines are skipped
//! rather than rejected. Integer files are stricter: exactly two
//! non-negative decimal integers, one per line.

use anyhow::{bail, Context, Result};
use num_bigint::BigUint;
use steptrace_model::{parse_operand, Point};

/// Parse a points file.
pub fn parse_points(content: &str) -> Vec<Point> {
    let lines: Vec<&str> = content.trim().lines().collect();

    if let Some(first) = lines.first() {
        let fields: Vec<&str> = first.split_whitespace().collect();
        if fields.len() == 1 {
            if let Ok(count) = fields[0].parse::<usize>() {
                return lines
                    .iter()
                    .skip(1)
                    .take(count)
                    .filter_map(|line| parse_point_line(line))
                    .collect();
            }
        }
    }

    lines
        .iter()
        .filter_map(|line| parse_point_line(line))
        .collect()
}

fn parse_point_line(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Parse an integers file: exactly two operands, one per line.
pub fn parse_integers(content: &str) -> Result<(BigUint, BigUint)> {
    let lines: Vec<&str> = content.trim().lines().collect();
    if lines.len() != 2 {
        bail!(
            "input must contain exactly 2 integers, one per line (found {} lines)",
            lines.len()
        );
    }
    let x = parse_operand(lines[0])
        .with_context(|| format!("first operand {:?}", lines[0].trim()))?;
    let y = parse_operand(lines[1])
        .with_context(|| format!("second operand {:?}", lines[1].trim()))?;
    Ok((x, y))
}
