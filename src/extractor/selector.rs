// Threshold selection over reduced n-gram counts

use ahash::AHashSet;
use log::debug;

use crate::config::subsystems::{SelectorConfig, Threshold};
use crate::error::Result;
use crate::types::TypeCount;

/// Sort by count, highest first. Equal counts keep their current order.
pub fn sort_by_count(counts: &mut [TypeCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}

/// The count a phrase must exceed to be selected. Never below 1.
///
/// `sorted` must already be ordered by descending count.
pub fn minimum_count(sorted: &[TypeCount], thres: Threshold, max_types: usize, number_of_names: usize) -> Result<usize> {
    thres.validate()?;
    let minimum = match thres {
        Threshold::TopK => {
            if sorted.len() > max_types {
                sorted[max_types].count
            } else {
                1
            }
        },
        Threshold::Fraction(fraction) => (fraction * number_of_names as f64).floor() as usize,
        Threshold::Count(count) => count,
    };
    Ok(minimum.max(1))
}

/// Choose the phrases that qualify as types.
///
/// With `no_full_match`, phrases equal to an entire cleaned name are
/// dropped: they label a whole name rather than a part of one.
pub fn select(mut counts: Vec<TypeCount>, config: &SelectorConfig, names: &[String]) -> Result<Vec<TypeCount>> {
    sort_by_count(&mut counts);
    let minimum = minimum_count(&counts, config.thres, config.max_types, names.len())?;
    debug!("Selecting phrases with count > {} ({} threshold)", minimum, config.thres);

    let mut selected: Vec<TypeCount> = counts.into_iter().filter(|t| t.count > minimum).collect();

    if config.no_full_match {
        let full_names: AHashSet<&str> = names.iter().map(String::as_str).collect();
        let before = selected.len();
        selected.retain(|t| !full_names.contains(t.phrase.as_str()));
        debug!("Dropped {} phrases that match whole names", before - selected.len());
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[(&str, usize)]) -> Vec<TypeCount> {
        values.iter().map(|&(p, c)| TypeCount::new(p, c)).collect()
    }

    #[test]
    fn top_k_uses_count_at_rank_max_types() {
        let sorted = counts(&[("a", 9), ("b", 7), ("c", 5), ("d", 5), ("e", 2)]);
        assert_eq!(minimum_count(&sorted, Threshold::TopK, 2, 100).unwrap(), 5);
        assert_eq!(minimum_count(&sorted, Threshold::TopK, 5, 100).unwrap(), 1);
        assert_eq!(minimum_count(&sorted, Threshold::TopK, 0, 100).unwrap(), 9);
    }

    #[test]
    fn fractions_and_counts() {
        let sorted = counts(&[("a", 9)]);
        assert_eq!(minimum_count(&sorted, Threshold::Fraction(0.05), 20, 130).unwrap(), 6);
        assert_eq!(minimum_count(&sorted, Threshold::Fraction(0.001), 20, 130).unwrap(), 1);
        assert_eq!(minimum_count(&sorted, Threshold::Count(4), 20, 130).unwrap(), 4);
        assert!(minimum_count(&sorted, Threshold::Fraction(1.2), 20, 130).is_err());
    }

    #[test]
    fn select_is_strictly_greater_and_sorted() {
        let config = SelectorConfig {
            thres: Threshold::Count(2),
            ..SelectorConfig::default()
        };
        let names = vec!["x".to_string()];
        let out = select(counts(&[("a", 2), ("b", 5), ("c", 3)]), &config, &names).unwrap();
        assert_eq!(out, counts(&[("b", 5), ("c", 3)]));
    }

    #[test]
    fn full_name_matches_can_be_excluded() {
        let config = SelectorConfig {
            thres: Threshold::Count(1),
            no_full_match: true,
            ..SelectorConfig::default()
        };
        let names = vec!["health center".to_string(), "kisumu health center".to_string()];
        let out = select(counts(&[("health center", 2), ("kisumu", 2)]), &config, &names).unwrap();
        assert_eq!(out, counts(&[("kisumu", 2)]));
    }
}
