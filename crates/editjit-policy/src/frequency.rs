//! Per-variable mutation counts with decay and deterministic ranking.

use std::cmp::{Ordering, Reverse};

use editjit_core::{TrackedVariable, VariableId};
use rustc_hash::FxHashMap;

/// Mutation count for one variable.
#[derive(Debug, Clone)]
pub struct FrequencyRecord<V> {
    pub variable: V,
    /// Running mutation count, floored at zero by decay.
    pub count: u64,
    /// Creation order within the tracker. Lower wins ties.
    pub sequence: u64,
}

impl<V> FrequencyRecord<V> {
    /// Ranking order: higher count first, then earlier creation.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Frequency table keyed by variable identity.
///
/// Hash-map iteration order never leaks into results: every ordering goes
/// through the stored creation sequence.
#[derive(Debug, Clone)]
pub struct FrequencyTracker<V> {
    records: FxHashMap<VariableId, FrequencyRecord<V>>,
    next_sequence: u64,
}

impl<V: TrackedVariable> FrequencyTracker<V> {
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    /// Count one mutation of `variable`, creating its record on first sight.
    /// Returns the updated count.
    pub fn record_mutation(&mut self, variable: &V) -> u64 {
        let next_sequence = &mut self.next_sequence;
        let record = self.records.entry(variable.id()).or_insert_with(|| {
            let sequence = *next_sequence;
            *next_sequence += 1;
            FrequencyRecord {
                variable: variable.clone(),
                count: 0,
                sequence,
            }
        });
        record.count += 1;
        record.count
    }

    /// Subtract `amount` from every count, flooring at zero. Records are kept.
    pub fn decay_all(&mut self, amount: u64) {
        for record in self.records.values_mut() {
            record.count = record.count.saturating_sub(amount);
        }
    }

    /// Variable with the highest count; ties go to the earliest-created record.
    pub fn select_hottest(&self) -> Option<&V> {
        self.records
            .values()
            .max_by(|a, b| a.rank_cmp(b))
            .map(|r| &r.variable)
    }

    /// All records, hottest first.
    pub fn ranked(&self) -> Vec<&FrequencyRecord<V>> {
        let mut ranked: Vec<_> = self.records.values().collect();
        ranked.sort_by_key(|r| (Reverse(r.count), r.sequence));
        ranked
    }

    /// Drop zero-count records, keeping `keep` even when it has decayed to zero.
    /// Returns the number of records removed.
    pub fn purge_expired(&mut self, keep: Option<VariableId>) -> usize {
        let before = self.records.len();
        self.records
            .retain(|id, record| record.count > 0 || Some(*id) == keep);
        before - self.records.len()
    }

    pub fn count_of(&self, id: VariableId) -> Option<u64> {
        self.records.get(&id).map(|r| r.count)
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every record and restart the creation sequence.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_sequence = 0;
    }
}

impl<V: TrackedVariable> Default for FrequencyTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}
