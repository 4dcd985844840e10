//! Config-driven facade over the free functions.
//!
//! A `Scanner` returns exactly what the corresponding free function returns.
//! The only difference is the trace event emitted afterwards when its
//! `ScanConfig` asks for one.

use seqalg_core::{Found, Result, ScanConfig, Sequence};

use crate::trace;
use crate::{compare, merge, mutate, search};

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Lenient environment loading; see [`ScanConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ScanConfig::from_env())
    }

    /// Strict environment loading; see [`ScanConfig::try_from_env`].
    pub fn try_from_env() -> Result<Self> {
        Ok(Self::new(ScanConfig::try_from_env()?))
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn any_of<S, P>(&self, seq: &S, pred: P) -> bool
    where
        S: Sequence + ?Sized,
        P: FnMut(&S::Item) -> bool,
    {
        let hit = search::any_of(seq, pred);
        self.observe_flag("any_of", hit, seq.as_items().len());
        hit
    }

    pub fn find_if<S, P>(&self, seq: &S, pred: P) -> Found
    where
        S: Sequence + ?Sized,
        P: FnMut(&S::Item) -> bool,
    {
        let found = search::find_if(seq, pred);
        self.observe_found("find_if", found, seq.as_items().len());
        found
    }

    pub fn adjacent_find<S, P>(&self, seq: &S, pred: P) -> Found
    where
        S: Sequence + ?Sized,
        P: FnMut(&S::Item, &S::Item) -> bool,
    {
        let found = search::adjacent_find(seq, pred);
        self.observe_found("adjacent_find", found, seq.as_items().len());
        found
    }

    pub fn equal<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: Sequence + ?Sized,
        B: Sequence<Item = A::Item> + ?Sized,
        A::Item: PartialEq,
    {
        let same = compare::equal(a, b);
        self.observe_flag("equal", same, a.as_items().len());
        same
    }

    pub fn is_sorted<S>(&self, seq: &S) -> bool
    where
        S: Sequence + ?Sized,
        S::Item: Ord,
    {
        let sorted = compare::is_sorted(seq);
        self.observe_flag("is_sorted", sorted, seq.as_items().len());
        sorted
    }

    pub fn replace_if<T, P>(&self, seq: &mut [T], replacement: T, pred: P) -> Found
    where
        P: FnMut(&T) -> bool,
    {
        let found = mutate::replace_if(seq, replacement, pred);
        self.observe_mutation("replace_if", found, seq.len());
        found
    }

    pub fn remove_if<T, P>(&self, seq: &mut Vec<T>, pred: P) -> Found
    where
        P: FnMut(&T) -> bool,
    {
        let found = mutate::remove_if(seq, pred);
        self.observe_mutation("remove_if", found, seq.len());
        found
    }

    pub fn merge<A, B>(&self, a: &A, b: &B) -> Vec<A::Item>
    where
        A: Sequence + ?Sized,
        B: Sequence<Item = A::Item> + ?Sized,
        A::Item: Clone,
    {
        self.observe_merge("merge", a.as_items().len(), b.as_items().len());
        merge::merge(a, b)
    }

    pub fn merge_owned<T>(&self, a: Vec<T>, b: Vec<T>) -> Vec<T> {
        self.observe_merge("merge_owned", a.len(), b.len());
        merge::merge_owned(a, b)
    }

    fn observe_found(&self, op: &'static str, found: Found, len: usize) {
        if self.config.trace_matches {
            trace::emit_found(&self.config.label, op, found, len);
        }
    }

    fn observe_flag(&self, op: &'static str, outcome: bool, len: usize) {
        if self.config.trace_matches {
            trace::emit_flag(&self.config.label, op, outcome, len);
        }
    }

    fn observe_merge(&self, op: &'static str, left: usize, right: usize) {
        if self.config.trace_matches {
            trace::emit_merge(&self.config.label, op, left, right);
        }
    }

    fn observe_mutation(&self, op: &'static str, found: Found, len: usize) {
        if self.config.trace_mutations {
            trace::emit_found(&self.config.label, op, found, len);
        }
    }
}
