use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unset_options_resolve_to_ascii() {
    assert_eq!(Options::new().resolve(), Bounds::ASCII);
}

#[test]
fn bounds_default_independently() {
    assert_eq!(
        Options::new().max_rune('\u{FFFF}').resolve(),
        Bounds::new('\0', '\u{FFFF}')
    );
    assert_eq!(
        Options::new().min_rune('a').resolve(),
        Bounds::new('a', '\u{7F}')
    );
}

#[test]
fn equal_bounds_are_valid() {
    assert_eq!(
        Options::new().min_rune('q').max_rune('q').resolve(),
        Bounds::new('q', 'q')
    );
}

#[test]
fn inverted_bounds_resolve_as_given() {
    let bounds = Options::new().min_rune('z').max_rune('a').resolve();
    assert_eq!(bounds, Bounds::new('z', 'a'));
    assert_eq!(bounds.alphabet().count(), 0);
}

#[test]
fn min_above_default_max_still_builds() {
    let generator = Options::new().min_rune('\u{0E01}').build();
    assert_eq!(generator.bounds(), Bounds::new('\u{0E01}', '\u{7F}'));
    assert_eq!(generator.generate("[x:alpha:]"), Ok("x".to_owned()));
}

// === serde ===

#[test]
fn deserialize_partial_options() {
    let options: Result<Options, _> = serde_json::from_str(r#"{ "max_rune": "\uFFFF" }"#);
    assert_eq!(options.ok(), Some(Options::new().max_rune('\u{FFFF}')));
}

#[test]
fn deserialize_empty_object() {
    let options: Result<Options, _> = serde_json::from_str("{}");
    assert_eq!(options.ok(), Some(Options::new()));
}

#[test]
fn deserialize_rejects_unknown_fields() {
    let options: Result<Options, _> = serde_json::from_str(r#"{ "graphic_only": true }"#);
    assert!(options.is_err());
}
