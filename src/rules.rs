//! Ordered priority cascades.
//!
//! A resolver with competing conditions lists them as [`Rule`]s from highest
//! to lowest priority. The first rule that applies decides the outcome.

/// One entry of a priority cascade.
#[derive(Debug, Clone, Copy)]
pub struct Rule<F, O> {
    /// Short identifier, used in logs and tests.
    pub name: &'static str,
    /// Predicate deciding whether the rule applies.
    pub applies: fn(&F) -> bool,
    /// What the resolver does when this rule wins.
    pub outcome: O,
}

impl<F, O> Rule<F, O> {
    /// Creates a rule.
    pub const fn new(name: &'static str, applies: fn(&F) -> bool, outcome: O) -> Self {
        Self {
            name,
            applies,
            outcome,
        }
    }
}

/// Returns the first rule of `rules` that applies to `facts`.
pub fn first_match<'r, F, O>(rules: &'r [Rule<F, O>], facts: &F) -> Option<&'r Rule<F, O>> {
    rules.iter().find(|rule| (rule.applies)(facts))
}
