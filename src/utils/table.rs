// Plain-text rendering of extraction results

use std::fmt::Write;

use crate::types::ExtractedType;

/// Smallest number of percent decimals that shows every proportion exactly
/// (at most 4).
fn percent_precision(proportions: &[f64]) -> usize {
    let mut digits: usize = 0;
    while !proportions.iter().all(|p| (p * 10f64.powi(digits as i32)).fract() == 0.0) {
        digits += 1;
        if digits > 6 {
            break;
        }
    }
    digits.saturating_sub(2)
}

/// Render result rows as an aligned table.
///
/// The phrase column is left-aligned and at least 10 wide; proportions are
/// shown as percentages; counts are right-aligned.
pub fn format_table(rows: &[ExtractedType]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        return out;
    }

    let phrase_width = rows
        .iter()
        .map(|row| row.phrase.chars().count())
        .max()
        .map_or(10, |len| (len + 5).max(10));
    let count_width = rows
        .iter()
        .map(|row| row.count.to_string().len())
        .max()
        .map_or(10, |len| (len + 5).max(10));

    let proportions: Vec<f64> = rows.iter().filter_map(|row| row.proportion).collect();
    let show_proportion = proportions.len() == rows.len();
    let precision = percent_precision(&proportions);

    for row in rows {
        let _ = write!(out, "{:<width$}", row.phrase, width = phrase_width);
        if show_proportion {
            let percent = format!("{:.prec$}%", row.proportion.unwrap_or_default() * 100.0, prec = precision);
            let _ = write!(out, "{:>10}", percent);
        }
        let _ = writeln!(out, "{:>width$}", row.count, width = count_width);
    }
    out
}
