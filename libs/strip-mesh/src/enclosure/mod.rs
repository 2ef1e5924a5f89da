//! # Enclosure Scaling
//!
//! The bottom enclosure is authored once as a template whose stretchable
//! coordinates are written as placeholder literals. Scaling rewrites those
//! coordinates for a strip's envelope and copies everything else verbatim.

#[cfg(test)]
mod tests;

use config::constants::{
    ENCLOSURE_SLOT_MM, ENCLOSURE_WALL_MM, INNER_LENGTH_PLACEHOLDER, INNER_WIDTH_PLACEHOLDER,
    LENGTH_PLACEHOLDER, PART_WIDTH_MM, TEMPLATE_DECIMALS, WIDTH_PLACEHOLDER,
};
use log::debug;

use crate::assembly::StripParams;

/// Outer envelope of the bottom enclosure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureDimensions {
    /// Extent along the strip.
    pub length: f64,
    /// Extent across the strip.
    pub width: f64,
}

impl EnclosureDimensions {
    /// Envelope for a strip built from `params`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strip_mesh::assembly::StripParams;
    /// use strip_mesh::enclosure::EnclosureDimensions;
    ///
    /// let dims = EnclosureDimensions::for_params(&StripParams::default());
    /// assert_eq!(dims.length, 305.0);
    /// assert_eq!(dims.width, 75.0);
    /// ```
    pub fn for_params(params: &StripParams) -> Self {
        let n = f64::from(params.num_parts);
        Self {
            length: 2.0 * params.vertical_gap + n * (params.pitch + ENCLOSURE_SLOT_MM)
                - params.pitch,
            width: 2.0 * params.lateral_gap + PART_WIDTH_MM,
        }
    }
}

/// Rewrites placeholder coordinates on the template's `v ` lines.
///
/// A whitespace-delimited token is replaced when it is a placeholder literal
/// followed only by zeros (`20.`, `20.000000`). Unsigned placeholders also
/// match behind a leading sign, which is kept. Replacement values are written
/// with six decimals and never re-scanned.
///
/// | placeholder | value            |
/// |-------------|------------------|
/// | `20.`       | length           |
/// | `17.`       | length - 3       |
/// | `-10.`      | -width           |
/// | `-7.`       | -(width - 3)     |
///
/// # Example
///
/// ```rust
/// use strip_mesh::enclosure::scale_template;
///
/// let out = scale_template("v 20. -10. 0.5\nf 1 2 3\n", 100.0, 60.0);
/// assert_eq!(out, "v 100.000000 -60.000000 0.5\nf 1 2 3\n");
/// ```
pub fn scale_template(template: &str, length: f64, width: f64) -> String {
    let substitutions = [
        (LENGTH_PLACEHOLDER, length),
        (INNER_LENGTH_PLACEHOLDER, length - ENCLOSURE_WALL_MM),
        (WIDTH_PLACEHOLDER, -width),
        (INNER_WIDTH_PLACEHOLDER, -(width - ENCLOSURE_WALL_MM)),
    ];

    let mut out = String::with_capacity(template.len());
    let mut replaced = 0usize;
    for line in template.split_inclusive('\n') {
        if line.starts_with("v ") {
            replaced += rewrite_line(line, &substitutions, &mut out);
        } else {
            out.push_str(line);
        }
    }

    debug!("scaled template to {length} x {width}: {replaced} coordinates replaced");
    out
}

/// Convenience wrapper computing the envelope from `params`.
pub fn scale_template_for(template: &str, params: &StripParams) -> String {
    let dims = EnclosureDimensions::for_params(params);
    scale_template(template, dims.length, dims.width)
}

/// Copies `line` into `out` token by token, returning how many were replaced.
fn rewrite_line(line: &str, substitutions: &[(&str, f64)], out: &mut String) -> usize {
    let mut replaced = 0;
    let mut rest = line;
    while !rest.is_empty() {
        let split = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(split);
        match substitute(token, substitutions) {
            Some(value) => {
                out.push_str(&value);
                replaced += 1;
            }
            None => out.push_str(token),
        }

        let gap = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        out.push_str(&tail[..gap]);
        rest = &tail[gap..];
    }
    replaced
}

fn substitute(token: &str, substitutions: &[(&str, f64)]) -> Option<String> {
    for &(placeholder, value) in substitutions {
        if is_placeholder(token, placeholder) {
            return Some(format!("{:.*}", TEMPLATE_DECIMALS, value));
        }
        if placeholder.starts_with('-') {
            continue;
        }
        if let Some(unsigned) = token.strip_prefix('-') {
            if is_placeholder(unsigned, placeholder) {
                return Some(format!("{:.*}", TEMPLATE_DECIMALS, -value));
            }
        }
        if let Some(unsigned) = token.strip_prefix('+') {
            if is_placeholder(unsigned, placeholder) {
                return Some(format!("+{:.*}", TEMPLATE_DECIMALS, value));
            }
        }
    }
    None
}

fn is_placeholder(token: &str, placeholder: &str) -> bool {
    token
        .strip_prefix(placeholder)
        .is_some_and(|zeros| zeros.bytes().all(|b| b == b'0'))
}
