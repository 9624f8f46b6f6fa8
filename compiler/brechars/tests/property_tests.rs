//! Property-based tests for bracket-expression expansion.
//!
//! These check the algebra of the generator rather than fixed outputs:
//! swap symmetry of ranges, negation as bounded complement, and that
//! tightening bounds never grows a generated set.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use brechars::{Generator, Options, PosixClass};
use proptest::prelude::*;

// -- Strategies --

/// A printable ASCII character that is literal inside a bracket body.
fn literal_char() -> impl Strategy<Value = char> {
    (0x20u8..0x7F)
        .prop_map(char::from)
        .prop_filter("not special in a bracket body", |c| {
            !matches!(*c, '-' | ']' | '^' | ':' | '\\' | '[')
        })
}

fn class() -> impl Strategy<Value = PosixClass> {
    proptest::sample::select(PosixClass::ALL.to_vec())
}

/// A bracket body built from literals, ranges and classes.
fn body() -> impl Strategy<Value = String> {
    let item = prop_oneof![
        literal_char().prop_map(String::from),
        (literal_char(), literal_char()).prop_map(|(a, b)| format!("{a}-{b}")),
        class().prop_map(|c| c.name().to_owned()),
    ];
    proptest::collection::vec(item, 1..6).prop_map(|items| items.concat())
}

fn bounds_pair() -> impl Strategy<Value = (char, char)> {
    (0u8..=0x7F, 0u8..=0x7F).prop_map(|(a, b)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (char::from(lo), char::from(hi))
    })
}

fn generator(min: char, max: char) -> Generator {
    Options::new().min_rune(min).max_rune(max).build()
}

proptest! {
    #[test]
    fn single_literal_is_itself(c in literal_char()) {
        let out = Generator::new().generate(&format!("[{c}]")).unwrap();
        prop_assert_eq!(out, c.to_string());
    }

    #[test]
    fn range_is_swap_symmetric(a in literal_char(), b in literal_char()) {
        let generator = Generator::new();
        let forward = generator.generate(&format!("[{a}-{b}]")).unwrap();
        let backward = generator.generate(&format!("[{b}-{a}]")).unwrap();
        prop_assert_eq!(&forward, &backward);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let expected: String = (lo..=hi).collect();
        prop_assert_eq!(forward, expected);
    }

    #[test]
    fn negation_is_bounded_complement(body in body(), (min, max) in bounds_pair()) {
        let generator = generator(min, max);
        let listed = generator.generate(&format!("[{body}]")).unwrap();
        let negated = generator.generate(&format!("[^{body}]")).unwrap();

        for c in negated.chars() {
            prop_assert!(!listed.contains(c), "{c:?} is listed and negated");
            prop_assert!(min <= c && c <= max, "{c:?} outside bounds");
        }
        for c in min..=max {
            prop_assert!(
                listed.contains(c) || negated.contains(c),
                "{c:?} is neither listed nor negated"
            );
        }
    }

    #[test]
    fn tighter_bounds_never_grow_output(
        body in body(),
        (min, max) in bounds_pair(),
        shrink_lo in 0u8..8,
        shrink_hi in 0u8..8,
    ) {
        let wide = generator(min, max).generate(&format!("[{body}]")).unwrap();
        let lo = u32::from(min) + u32::from(shrink_lo);
        let hi = u32::from(max).saturating_sub(u32::from(shrink_hi));
        prop_assume!(lo <= hi);
        let narrow_gen = generator(char::from_u32(lo).unwrap(), char::from_u32(hi).unwrap());
        let narrow = narrow_gen.generate(&format!("[{body}]")).unwrap();

        for c in narrow.chars() {
            prop_assert!(wide.contains(c), "{c:?} appeared after narrowing");
        }
        prop_assert!(narrow.chars().count() <= wide.chars().count());
    }

    #[test]
    fn classes_stay_inside_bounds(class in class(), (min, max) in bounds_pair()) {
        let out = generator(min, max).generate(&format!("[{}]", class.name())).unwrap();
        prop_assert!(out.chars().all(|c| min <= c && c <= max));
    }
}
