//! Integration tests for position metadata, raw text and option decoding

mod common;
use common::{first_expression, script, script_with};
use ferrow::options::DEFAULT_MAX_DEPTH;
use ferrow::ParseOptions;
use pretty_assertions::assert_eq;
use serde_json::json;

fn ranges() -> ParseOptions {
    ParseOptions::default().with_ranges(true)
}

fn locations() -> ParseOptions {
    ParseOptions::default().with_locations(true)
}

mod ranges {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expression_statement_ranges() {
        let tree = script_with("x = 0", ranges());
        assert_eq!(
            tree,
            json!({
                "type": "Program",
                "start": 0,
                "end": 5,
                "body": [{
                    "type": "ExpressionStatement",
                    "start": 0,
                    "end": 5,
                    "expression": {
                        "type": "AssignmentExpression",
                        "start": 0,
                        "end": 5,
                        "operator": "=",
                        "left": {"type": "Identifier", "start": 0, "end": 1, "name": "x"},
                        "right": {"type": "Literal", "start": 4, "end": 5, "value": 0}
                    }
                }],
                "sourceType": "script"
            })
        );
    }

    #[test]
    fn test_program_covers_whole_source() {
        let tree = script_with("  a;  // trailing\n", ranges());
        assert_eq!(tree["start"], 0);
        assert_eq!(tree["end"], 18);
        assert_eq!(tree["body"][0]["start"], 2);
        assert_eq!(tree["body"][0]["end"], 4);
    }

    #[test]
    fn test_parenthesized_operand_ranges() {
        let tree = script_with("(a + b) * c", ranges());
        let outer = first_expression(&tree);
        assert_eq!((outer["start"].clone(), outer["end"].clone()), (json!(0), json!(11)));
        assert_eq!(outer["left"]["start"], 1);
        assert_eq!(outer["left"]["end"], 6);
    }

    #[test]
    fn test_offsets_are_bytes() {
        let tree = script_with("'ü' + b", ranges());
        let binary = first_expression(&tree);
        assert_eq!(binary["left"]["end"], 4);
        assert_eq!(binary["right"]["start"], 7);
    }

    #[test]
    fn test_statement_without_semicolon_ends_at_last_token() {
        let tree = script_with("a\nb", ranges());
        assert_eq!(tree["body"][0]["end"], 1);
        assert_eq!(tree["body"][1]["start"], 2);
    }

    #[test]
    fn test_no_positions_by_default() {
        let tree = script("a");
        assert!(tree.get("start").is_none());
        assert!(tree["body"][0].get("loc").is_none());
    }
}

mod locations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multiline_locations() {
        let tree = script_with("a\n  + b", locations());
        let binary = first_expression(&tree);
        assert_eq!(
            binary["loc"],
            json!({"start": {"line": 1, "column": 0}, "end": {"line": 2, "column": 5}})
        );
        assert_eq!(
            binary["right"]["loc"],
            json!({"start": {"line": 2, "column": 4}, "end": {"line": 2, "column": 5}})
        );
        assert!(binary.get("start").is_none());
    }

    #[test]
    fn test_program_location() {
        let tree = script_with("a;\nb;", locations());
        assert_eq!(
            tree["loc"],
            json!({"start": {"line": 1, "column": 0}, "end": {"line": 2, "column": 2}})
        );
    }

    #[test]
    fn test_crlf_counts_as_one_line_break() {
        let tree = script_with("a\r\nb", locations());
        assert_eq!(tree["body"][1]["loc"]["start"], json!({"line": 2, "column": 0}));
    }

    #[test]
    fn test_template_spanning_lines() {
        let tree = script_with("`a\nb` + c", locations());
        let right = &first_expression(&tree)["right"];
        assert_eq!(right["loc"]["start"], json!({"line": 2, "column": 5}));
    }

    #[test]
    fn test_ranges_and_locations_together() {
        let options = ParseOptions::default().with_ranges(true).with_locations(true);
        let tree = script_with("x", options);
        let identifier = first_expression(&tree);
        assert_eq!(identifier["start"], 0);
        assert_eq!(identifier["end"], 1);
        assert_eq!(identifier["loc"]["end"], json!({"line": 1, "column": 1}));
    }
}

mod raw {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw() -> ParseOptions {
        ParseOptions::default().with_raw(true)
    }

    #[test]
    fn test_literal_raw_text() {
        let tree = script_with("[0x10, 'a\\n', 1.50, 10n, /a/g, true]", raw());
        let elements = &first_expression(&tree)["elements"];
        assert_eq!(elements[0], json!({"type": "Literal", "value": 16, "raw": "0x10"}));
        assert_eq!(elements[1]["value"], "a\n");
        assert_eq!(elements[1]["raw"], "'a\\n'");
        assert_eq!(elements[2]["raw"], "1.50");
        assert_eq!(elements[3]["raw"], "10n");
        assert_eq!(elements[4]["raw"], "/a/g");
        assert_eq!(elements[5]["raw"], "true");
    }

    #[test]
    fn test_no_raw_by_default() {
        let tree = script("'a'");
        assert!(first_expression(&tree).get("raw").is_none());
    }
}

mod options {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_options_from_json() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"next": true, "jsx": true, "locations": true, "maxDepth": 32}"#).unwrap();
        assert!(options.next);
        assert!(options.jsx);
        assert!(options.locations);
        assert!(!options.ranges);
        assert!(!options.raw);
        assert_eq!(options.max_depth, 32);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builders() {
        let options = ParseOptions::new()
            .with_next(true)
            .with_raw(true)
            .with_max_depth(7);
        assert!(options.next && options.raw && !options.jsx);
        assert_eq!(options.max_depth, 7);
    }
}
