//! Property-based tests for template compilation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use pathrex::{KeyName, Options, compile_template};
use proptest::prelude::*;

proptest! {
    /// A template without parameters matches exactly its own text
    #[test]
    fn literal_template_matches_itself(segments in prop::collection::vec("[a-z0-9_-]{1,8}", 1..5)) {
        let template = format!("/{}", segments.join("/"));
        let (pattern, keys) = compile_template(&template, &Options::default()).unwrap();

        prop_assert!(keys.is_empty());
        prop_assert!(pattern.is_match(&template).unwrap());
        let with_slash = format!("{template}/");
        prop_assert!(pattern.is_match(&with_slash).unwrap());
        prop_assert!(pattern.is_match(&template.to_uppercase()).unwrap());
        let with_extra = format!("{template}/extra");
        prop_assert!(!pattern.is_match(&with_extra).unwrap());
    }

    /// Case-sensitive literals reject a differently-cased path
    #[test]
    fn sensitive_literal_rejects_uppercase(segment in "[a-z]{1,10}") {
        let template = format!("/{segment}");
        let options = Options::default().with_sensitive(true);
        let (pattern, _) = compile_template(&template, &options).unwrap();

        prop_assert!(!pattern.is_match(&template.to_uppercase()).unwrap());
    }

    /// A named parameter captures exactly one segment
    #[test]
    fn param_captures_segment(
        prefix in "[a-z]{1,8}",
        name in "[a-z][a-z0-9_]{0,7}",
        value in "[A-Za-z0-9_.~-]{1,12}"
    ) {
        let template = format!("/{prefix}/:{name}");
        let (pattern, keys) = compile_template(&template, &Options::default()).unwrap();

        prop_assert_eq!(keys.len(), 1);
        prop_assert_eq!(&keys[0].name, &KeyName::Named(name));

        let caps = pattern.captures(&format!("/{prefix}/{value}")).unwrap();
        prop_assert_eq!(caps, Some(vec![Some(value)]));
    }

    /// Every capturing group gets exactly one key
    #[test]
    fn keys_cover_every_group(parts in prop::collection::vec(
        prop_oneof![
            Just("/lit"),
            Just("/:p"),
            Just("/:q?"),
            Just("/*"),
            Just("/:r*"),
            Just("/:s((a)b)"),
            Just(".:ext"),
            Just("-:t"),
            Just(r"\-:e"),
            Just("(x)-:v"),
            Just("/(a|b)~:g"),
        ],
        0..6,
    )) {
        let template = parts.concat();
        let (pattern, keys) = compile_template(&template, &Options::default()).unwrap();

        prop_assert_eq!(keys.len(), pattern.group_count());
        let positional: Vec<usize> = keys.iter().filter_map(|k| k.name.index()).collect();
        let expected: Vec<usize> = (0..positional.len()).collect();
        prop_assert_eq!(positional, expected);
    }
}
