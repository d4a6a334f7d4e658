//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use pathrex::output::{CompileResult, MatchResult, OutputMode, PathMatch};
use pathrex::{Options, compile_template};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CompileResult Tests
// =============================================================================

#[test]
fn compile_result_serialization() {
    let (pattern, keys) = compile_template("/user/:id?/*", &Options::default()).unwrap();
    let result = CompileResult::new(&pattern, &keys);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], pattern.source());
    assert_eq!(json["flags"], "i");
    assert_eq!(json["keys"][0]["name"], "id");
    assert_eq!(json["keys"][0]["optional"], true);
    assert_eq!(json["keys"][1]["name"], 0);
}

// =============================================================================
// MatchResult Tests
// =============================================================================

#[test]
fn path_match_pairs_keys_with_values() {
    let (pattern, keys) = compile_template("/user/:id/:tab?", &Options::default()).unwrap();
    let m = PathMatch::new("/user/7", &keys, pattern.captures("/user/7").unwrap());

    assert!(m.matched);
    assert_eq!(m.params.len(), 2);
    assert_eq!(m.params[0].name.to_string(), "id");
    assert_eq!(m.params[0].value.as_deref(), Some("7"));
    assert_eq!(m.params[1].value, None);
}

#[test]
fn path_match_unmatched_has_no_params() {
    let (pattern, keys) = compile_template("/user/:id", &Options::default()).unwrap();
    let m = PathMatch::new("/nope", &keys, pattern.captures("/nope").unwrap());

    assert!(!m.matched);
    assert!(m.params.is_empty());
}

#[test]
fn match_result_all_matched() {
    let (pattern, keys) = compile_template("/a", &Options::default()).unwrap();
    let paths = ["/a", "/b"]
        .iter()
        .map(|p| PathMatch::new(p, &keys, pattern.captures(p).unwrap()))
        .collect();
    let result = MatchResult {
        source: pattern.source().to_string(),
        paths,
    };

    assert!(!result.all_matched());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["paths"][0]["matched"], true);
    assert_eq!(json["paths"][1]["matched"], false);
}
