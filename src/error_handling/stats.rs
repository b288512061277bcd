//! Run statistics tracking.
//!
//! Thread-safe counters for verdicts, flags and network failures, shared by
//! all workers of a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;
use crate::models::{Flag, Verdict};

/// Thread-safe run statistics.
///
/// Every key is inserted with a zero counter on creation, so lookups never miss
/// for a properly constructed value. Share across workers with `Arc`.
pub struct VerdictStats {
    verdicts: HashMap<Verdict, AtomicUsize>,
    flags: HashMap<Flag, AtomicUsize>,
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl VerdictStats {
    pub fn new() -> Self {
        VerdictStats {
            verdicts: Verdict::iter().map(|v| (v, AtomicUsize::new(0))).collect(),
            flags: Flag::iter().map(|f| (f, AtomicUsize::new(0))).collect(),
            failures: FailureKind::iter()
                .map(|k| (k, AtomicUsize::new(0)))
                .collect(),
        }
    }

    pub fn record_verdict(&self, verdict: Verdict) {
        Self::bump(&self.verdicts, verdict);
    }

    pub fn record_flag(&self, flag: Flag) {
        Self::bump(&self.flags, flag);
    }

    pub fn record_failure(&self, kind: FailureKind) {
        Self::bump(&self.failures, kind);
    }

    pub fn verdict_count(&self, verdict: Verdict) -> usize {
        Self::read(&self.verdicts, verdict)
    }

    pub fn flag_count(&self, flag: Flag) -> usize {
        Self::read(&self.flags, flag)
    }

    pub fn failure_count(&self, kind: FailureKind) -> usize {
        Self::read(&self.failures, kind)
    }

    /// Number of results recorded (one verdict per result).
    pub fn total(&self) -> usize {
        self.verdicts.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn total_failures(&self) -> usize {
        self.failures.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    fn bump<K>(map: &HashMap<K, AtomicUsize>, key: K)
    where
        K: std::hash::Hash + Eq + std::fmt::Debug,
    {
        if let Some(counter) = map.get(&key) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            // Don't panic - log and continue
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map",
                key
            );
        }
    }

    fn read<K>(map: &HashMap<K, AtomicUsize>, key: K) -> usize
    where
        K: std::hash::Hash + Eq,
    {
        map.get(&key).map(|c| c.load(Ordering::SeqCst)).unwrap_or(0)
    }
}

impl Default for VerdictStats {
    fn default() -> Self {
        Self::new()
    }
}
