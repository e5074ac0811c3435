use pretty_assertions::assert_eq;

use super::*;

#[derive(Default, Debug)]
struct Log {
    current: String,
    begins: Vec<&'static str>,
    continuations: Vec<&'static str>,
    ends: Vec<&'static str>,
}

// === Doubling state ===

/// Each step doubles the string.
#[derive(Default, Debug)]
struct Doubling(Log);

impl Advance for Doubling {
    fn advance(&mut self) {
        self.0.current = self.0.current.repeat(2);
    }
}

enum DoublingPattern {
    /// Active on the empty string, seeds it with "foo".
    Foo,
    /// Active on any non-empty string, replaces it with "bar".
    Bar,
}

impl Pattern<Doubling> for DoublingPattern {
    fn predicate(&mut self, state: &Doubling) -> bool {
        match self {
            Self::Foo => state.0.current.is_empty(),
            Self::Bar => !state.0.current.is_empty(),
        }
    }

    fn begin(&mut self, state: &mut Doubling) {
        match self {
            Self::Foo => {
                state.0.begins.push("foo");
                state.0.current = "foo".to_owned();
            }
            Self::Bar => state.0.begins.push("bar"),
        }
    }

    fn continuation(&mut self, state: &mut Doubling) {
        match self {
            Self::Foo => panic!("foo is never active for more than one step"),
            Self::Bar => {
                state.0.continuations.push("bar");
                state.0.current = "bar".to_owned();
            }
        }
    }

    fn end(&mut self, state: &mut Doubling) {
        match self {
            Self::Foo => state.0.ends.push("foo"),
            Self::Bar => state.0.ends.push("bar"),
        }
    }
}

#[test]
fn patterns_hand_over_in_order() {
    let mut matcher = Matcher::new([DoublingPattern::Foo, DoublingPattern::Bar]);
    let Doubling(log) = matcher
        .run(Doubling::default(), |s| s.0.current == "barbar")
        .unwrap();

    // "" -> begin foo ("foo") -> "foofoo" -> end foo, begin bar
    // -> "foofoofoofoo" -> continue bar ("bar") -> "barbar" -> end bar
    assert_eq!(log.current, "barbar");
    assert_eq!(log.begins, vec!["foo", "bar"]);
    assert_eq!(log.continuations, vec!["bar"]);
    assert_eq!(log.ends, vec!["foo", "bar"]);
}

// === Single active pattern ===

/// Advancing changes nothing; only the hooks move the state.
#[derive(Default, Debug)]
struct Still {
    log: Log,
    matching_foo: bool,
}

impl Advance for Still {
    fn advance(&mut self) {}
}

enum OverlapPattern {
    Foo,
    /// Accepts everything `Foo` accepts, so it may only run after `Foo` ends.
    Bar,
}

impl Pattern<Still> for OverlapPattern {
    fn predicate(&mut self, state: &Still) -> bool {
        match self {
            Self::Foo => state.log.current == "foo",
            Self::Bar => state.log.current == "foo" || state.log.current == "bar",
        }
    }

    fn begin(&mut self, state: &mut Still) {
        match self {
            Self::Foo => {
                state.log.begins.push("foo");
                state.matching_foo = true;
            }
            Self::Bar => {
                assert!(!state.matching_foo, "bar began while foo was active");
                state.log.begins.push("bar");
            }
        }
    }

    fn continuation(&mut self, state: &mut Still) {
        match self {
            Self::Foo => {
                state.log.continuations.push("foo");
                state.log.current = "bar".to_owned();
            }
            Self::Bar => {
                assert!(!state.matching_foo, "bar continued while foo was active");
                state.log.continuations.push("bar");
                state.log.current = "finish".to_owned();
            }
        }
    }

    fn end(&mut self, state: &mut Still) {
        match self {
            Self::Foo => {
                state.log.ends.push("foo");
                state.matching_foo = false;
            }
            Self::Bar => state.log.ends.push("bar"),
        }
    }
}

#[test]
fn only_one_pattern_is_active_at_a_time() {
    let start = Still {
        log: Log {
            current: "foo".to_owned(),
            ..Log::default()
        },
        matching_foo: false,
    };
    let mut matcher = Matcher::new([OverlapPattern::Foo, OverlapPattern::Bar]);
    let end = matcher.run(start, |s| s.log.current == "finish").unwrap();

    assert_eq!(end.log.current, "finish");
    assert_eq!(end.log.begins, vec!["foo", "bar"]);
    assert_eq!(end.log.continuations, vec!["foo", "bar"]);
    assert_eq!(end.log.ends, vec!["foo", "bar"]);
    assert!(!end.matching_foo);
}

// === Edge cases ===

/// Counts steps; used with patterns that keep their own tallies.
#[derive(Default, Debug, PartialEq)]
struct Counter(u32);

impl Advance for Counter {
    fn advance(&mut self) {
        self.0 += 1;
    }
}

#[derive(Default, Debug)]
struct Tally {
    accepts_below: u32,
    begins: u32,
    continuations: u32,
    ends: u32,
}

impl Pattern<Counter> for Tally {
    fn predicate(&mut self, state: &Counter) -> bool {
        state.0 < self.accepts_below
    }

    fn begin(&mut self, _: &mut Counter) {
        self.begins += 1;
    }

    fn continuation(&mut self, _: &mut Counter) {
        self.continuations += 1;
    }

    fn end(&mut self, _: &mut Counter) {
        self.ends += 1;
    }
}

#[test]
fn satisfied_until_returns_immediately() {
    let mut matcher = Matcher::new([Tally::default()]);
    let state = matcher.run(Counter(7), |s| s.0 == 7).unwrap();
    assert_eq!(state, Counter(7));

    let [tally] = matcher.into_patterns();
    assert_eq!((tally.begins, tally.continuations, tally.ends), (0, 0, 0));
}

#[test]
fn no_matching_pattern_is_reported() {
    let mut matcher = Matcher::new([Tally::default(), Tally::default()]);
    let err = matcher.run(Counter(0), |s| s.0 == 5).unwrap_err();
    assert_eq!(err, NoPatternMatched { pattern_count: 2 });
    assert_eq!(
        err.to_string(),
        "none of the 2 patterns matched the current state"
    );
}

#[test]
fn hole_after_first_pattern_ends_is_reported() {
    let first = Tally {
        accepts_below: 3,
        ..Tally::default()
    };
    let mut matcher = Matcher::new([first]);
    let err = matcher.run(Counter(0), |s| s.0 == 10).unwrap_err();
    assert_eq!(err.pattern_count, 1);
}

#[test]
fn first_listed_pattern_wins_ties() {
    let everything = || Tally {
        accepts_below: u32::MAX,
        ..Tally::default()
    };
    let mut matcher = Matcher::new([everything(), everything()]);
    let state = matcher.run(Counter(0), |s| s.0 == 4).unwrap();
    assert_eq!(state, Counter(4));

    let [first, second] = matcher.into_patterns();
    assert_eq!((first.begins, first.continuations, first.ends), (1, 3, 1));
    assert_eq!((second.begins, second.continuations, second.ends), (0, 0, 0));
}

#[test]
fn begin_and_end_pair_on_every_hand_over() {
    let low = Tally {
        accepts_below: 2,
        ..Tally::default()
    };
    let high = Tally {
        accepts_below: u32::MAX,
        ..Tally::default()
    };
    let mut matcher = Matcher::new([low, high]);
    matcher.run(Counter(0), |s| s.0 == 6).unwrap();

    let [low, high] = matcher.into_patterns();
    // low: steps 0..2, high: steps 2..6
    assert_eq!((low.begins, low.continuations, low.ends), (1, 1, 1));
    assert_eq!((high.begins, high.continuations, high.ends), (1, 3, 1));
}
