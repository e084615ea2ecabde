use ahash::AHashMap;
use serde::{Serialize, Deserialize};
use log::debug;

/// Where an n-gram was first seen: (name index, position in that name's
/// n-gram sequence). Used to order otherwise-equal candidates.
pub type DiscoveryKey = (usize, usize);

/// An n-gram that survived the minimum-support filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NGramCandidate {
    pub order: usize,
    pub phrase: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub order: usize,
    pub count: usize,
    pub first_seen: DiscoveryKey,
}

/// Document frequency of every n-gram in a corpus of names.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: AHashMap<String, FrequencyEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more name containing `phrase`.
    pub fn record(&mut self, phrase: String, order: usize, seen_at: DiscoveryKey) {
        self.entries
            .entry(phrase)
            .and_modify(|entry| {
                entry.count += 1;
                if seen_at < entry.first_seen {
                    entry.first_seen = seen_at;
                }
            })
            .or_insert(FrequencyEntry {
                order,
                count: 1,
                first_seen: seen_at,
            });
    }

    /// Fold another partial table into this one, summing presence counts.
    pub fn merge(mut self, other: FrequencyTable) -> Self {
        let (mut target, source) = if self.entries.len() >= other.entries.len() {
            (std::mem::take(&mut self.entries), other.entries)
        } else {
            (other.entries, std::mem::take(&mut self.entries))
        };

        for (phrase, entry) in source {
            target
                .entry(phrase)
                .and_modify(|existing| {
                    existing.count += entry.count;
                    existing.first_seen = existing.first_seen.min(entry.first_seen);
                })
                .or_insert(entry);
        }

        Self { entries: target }
    }

    pub fn count(&self, phrase: &str) -> Option<usize> {
        self.entries.get(phrase).map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyEntry)> {
        self.entries.iter().map(|(phrase, entry)| (phrase.as_str(), entry))
    }

    /// Drop entries below `min_support` and order the rest longest first.
    ///
    /// Ties on order are broken by count (highest first) and then by first
    /// discovery, so the result does not depend on hash iteration order.
    pub fn into_candidates(self, min_support: usize) -> Vec<NGramCandidate> {
        let total = self.entries.len();
        let mut kept: Vec<(String, FrequencyEntry)> = self
            .entries
            .into_iter()
            .filter(|(_, entry)| entry.count >= min_support)
            .collect();

        kept.sort_by(|(_, a), (_, b)| {
            b.order
                .cmp(&a.order)
                .then(b.count.cmp(&a.count))
                .then(a.first_seen.cmp(&b.first_seen))
        });

        debug!("Minimum support {} kept {} of {} n-grams", min_support, kept.len(), total);

        kept.into_iter()
            .map(|(phrase, entry)| NGramCandidate {
                order: entry.order,
                phrase,
                count: entry.count,
            })
            .collect()
    }
}
