//! State-pattern-matching engine.
//!
//! A [`Matcher`] drives a state value forward one step at a time. At every
//! step exactly one [`Pattern`] is active: the engine keeps calling its
//! `continuation` hook while its predicate still holds, and otherwise closes
//! it with `end` and activates the first pattern whose predicate accepts the
//! current state. This is the driver loop of the tokenizer, but nothing here
//! knows about bytes or tokens.
//!
//! # Protocol
//!
//! For `run(state, until)`:
//!
//! 1. If `until(state)` holds, return the state untouched.
//! 2. Activate the first pattern whose predicate holds and call its `begin`.
//! 3. Advance the state. If `until` now holds, call `end` on the active
//!    pattern and return.
//! 4. If the active pattern's predicate still holds, call `continuation`
//!    and go to 3.
//! 5. Otherwise call `end`, activate a new pattern as in 2, and go to 3.
//!
//! `begin` and `end` are always paired, once per activation.

use thiserror::Error;

/// A state the engine can step forward.
pub trait Advance {
    /// Move the state one step forward.
    fn advance(&mut self);
}

/// One scanning pattern over a state `S`.
///
/// Patterns are stateful: anything they need to remember between hooks
/// (an open delimiter, a comment end offset) lives in the pattern itself
/// and is reset by `end`.
pub trait Pattern<S> {
    /// Does this pattern accept the state at the current step?
    ///
    /// Queried both to select a new pattern and to decide whether the
    /// active one continues.
    fn predicate(&mut self, state: &S) -> bool;

    /// Called once when the pattern becomes active.
    fn begin(&mut self, state: &mut S);

    /// Called for every further step the pattern stays active.
    fn continuation(&mut self, state: &mut S);

    /// Called once when the pattern stops being active.
    fn end(&mut self, state: &mut S);
}

/// No pattern accepted the state.
///
/// A matcher whose patterns cover every state never produces this; seeing it
/// means the pattern set has a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("none of the {pattern_count} patterns matched the current state")]
pub struct NoPatternMatched {
    /// Number of patterns that were consulted.
    pub pattern_count: usize,
}

/// Fixed, ordered set of patterns. Earlier patterns win ties.
#[derive(Clone, Debug)]
pub struct Matcher<P, const N: usize> {
    patterns: [P; N],
}

impl<P, const N: usize> Matcher<P, N> {
    /// Create a matcher from patterns listed in priority order.
    pub const fn new(patterns: [P; N]) -> Self {
        Self { patterns }
    }

    /// Give back the patterns, e.g. to inspect their final scan state.
    pub fn into_patterns(self) -> [P; N] {
        self.patterns
    }

    /// Drive `state` forward until `until` holds.
    pub fn run<S>(&mut self, mut state: S, until: impl Fn(&S) -> bool) -> Result<S, NoPatternMatched>
    where
        S: Advance,
        P: Pattern<S>,
    {
        if until(&state) {
            return Ok(state);
        }

        let mut active = self.find_pattern(&state)?;
        self.patterns[active].begin(&mut state);

        loop {
            state.advance();
            if until(&state) {
                self.patterns[active].end(&mut state);
                return Ok(state);
            }

            if self.patterns[active].predicate(&state) {
                self.patterns[active].continuation(&mut state);
            } else {
                self.patterns[active].end(&mut state);
                active = self.find_pattern(&state)?;
                self.patterns[active].begin(&mut state);
            }
        }
    }

    fn find_pattern<S>(&mut self, state: &S) -> Result<usize, NoPatternMatched>
    where
        P: Pattern<S>,
    {
        self.patterns
            .iter_mut()
            .position(|pattern| pattern.predicate(state))
            .ok_or(NoPatternMatched { pattern_count: N })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
