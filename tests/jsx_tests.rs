//! Integration tests for the JSX extension

mod common;
use common::{first_expression, jsx, parses, script_error_with, script_with};
use ferrow::{parse_script, ErrorKind, ParseOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

fn options() -> ParseOptions {
    ParseOptions::default().with_jsx(true)
}

mod elements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_self_closing_element_with_expression_attribute() {
        let tree = jsx("<img width={320}/>");
        assert_eq!(
            *first_expression(&tree),
            json!({
                "type": "JSXElement",
                "openingElement": {
                    "type": "JSXOpeningElement",
                    "name": {"type": "JSXIdentifier", "name": "img"},
                    "attributes": [{
                        "type": "JSXAttribute",
                        "name": {"type": "JSXIdentifier", "name": "width"},
                        "value": {
                            "type": "JSXExpressionContainer",
                            "expression": {"type": "Literal", "value": 320}
                        }
                    }],
                    "selfClosing": true
                },
                "children": [],
                "closingElement": null
            })
        );
    }

    #[test]
    fn test_element_with_children() {
        let tree = jsx("<div>hello {name}<br/></div>");
        let element = first_expression(&tree);
        assert_eq!(element["openingElement"]["selfClosing"], false);
        assert_eq!(element["closingElement"]["name"]["name"], "div");
        let children = element["children"].as_array().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], json!({"type": "JSXText", "value": "hello "}));
        assert_eq!(children[1]["type"], "JSXExpressionContainer");
        assert_eq!(children[1]["expression"]["name"], "name");
        assert_eq!(children[2]["type"], "JSXElement");
    }

    #[test]
    fn test_text_keeps_whitespace_and_punctuation() {
        let tree = jsx("<p>\n  a > b; }\n</p>");
        let text = &first_expression(&tree)["children"][0];
        assert_eq!(text["value"], "\n  a > b; }\n");
    }

    #[test]
    fn test_attribute_forms() {
        let tree = jsx("<a b=\"x\" c='y' d e-f={g} {...h} />");
        let attributes = first_expression(&tree)["openingElement"]["attributes"].as_array().unwrap().clone();
        assert_eq!(attributes.len(), 5);
        assert_eq!(attributes[0]["value"], json!({"type": "Literal", "value": "x"}));
        assert_eq!(attributes[1]["value"]["value"], "y");
        assert_eq!(attributes[2]["value"], json!(null));
        assert_eq!(attributes[3]["name"]["name"], "e-f");
        assert_eq!(
            attributes[4],
            json!({"type": "JSXSpreadAttribute", "argument": {"type": "Identifier", "name": "h"}})
        );
    }

    #[test]
    fn test_attribute_string_keeps_backslashes() {
        let tree = jsx(r#"<a b="\n" />"#);
        let value = &first_expression(&tree)["openingElement"]["attributes"][0]["value"]["value"];
        assert_eq!(*value, r"\n");
    }

    #[test]
    fn test_element_as_attribute_value() {
        let tree = jsx("<a b=<c/> />");
        let value = &first_expression(&tree)["openingElement"]["attributes"][0]["value"];
        assert_eq!(value["type"], "JSXElement");
        assert_eq!(value["openingElement"]["name"]["name"], "c");
    }

    #[test]
    fn test_namespaced_names() {
        let tree = jsx("<svg:path xlink:href='#a'></svg:path>");
        let opening = &first_expression(&tree)["openingElement"];
        assert_eq!(
            opening["name"],
            json!({
                "type": "JSXNamespacedName",
                "namespace": {"type": "JSXIdentifier", "name": "svg"},
                "name": {"type": "JSXIdentifier", "name": "path"}
            })
        );
        assert_eq!(opening["attributes"][0]["name"]["type"], "JSXNamespacedName");
    }

    #[test]
    fn test_member_names() {
        let tree = jsx("<A.B.C></A.B.C>");
        let name = &first_expression(&tree)["openingElement"]["name"];
        assert_eq!(name["type"], "JSXMemberExpression");
        assert_eq!(name["property"]["name"], "C");
        assert_eq!(name["object"]["type"], "JSXMemberExpression");
        assert_eq!(name["object"]["object"]["name"], "A");
    }

    #[test]
    fn test_keyword_tag_names() {
        assert!(parse_script("\"use strict\"; <async />", options()).is_ok());
        assert!(parse_script("<this />", options()).is_ok());
        let tree = jsx("<class></class>");
        assert_eq!(first_expression(&tree)["openingElement"]["name"]["name"], "class");
    }

    #[test]
    fn test_nested_elements() {
        let tree = jsx("<ul><li>a</li><li>b</li></ul>");
        let children = first_expression(&tree)["children"].as_array().unwrap().clone();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1]["children"][0]["value"], "b");
    }
}

mod children {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_expression() {
        let tree = jsx("<a>{/* nothing */}</a>");
        let child = &first_expression(&tree)["children"][0];
        assert_eq!(
            *child,
            json!({"type": "JSXExpressionContainer", "expression": {"type": "JSXEmptyExpression"}})
        );
    }

    #[test]
    fn test_spread_child() {
        let tree = jsx("<a>{...items}</a>");
        let child = &first_expression(&tree)["children"][0];
        assert_eq!(child["type"], "JSXSpreadChild");
        assert_eq!(child["expression"]["name"], "items");
    }

    #[test]
    fn test_fragment() {
        let tree = jsx("<><a/>text</>");
        let fragment = first_expression(&tree);
        assert_eq!(fragment["type"], "JSXFragment");
        assert_eq!(fragment["openingFragment"], json!({"type": "JSXOpeningFragment"}));
        assert_eq!(fragment["closingFragment"], json!({"type": "JSXClosingFragment"}));
        assert_eq!(fragment["children"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_expression_child_with_nested_jsx() {
        let tree = jsx("<ul>{items.map(item => <li>{item}</li>)}</ul>");
        let call = &first_expression(&tree)["children"][0]["expression"];
        assert_eq!(call["type"], "CallExpression");
        assert_eq!(call["arguments"][0]["body"]["type"], "JSXElement");
    }
}

mod embedding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_jsx_in_return_and_yield() {
        assert!(parse_script("function f() { return <div/>; }", options()).is_ok());
        assert!(parse_script("function* g() { yield <a></a>; }", options()).is_ok());
    }

    #[test]
    fn test_statement_continues_after_element() {
        let tree = jsx("x = <a></a>; y");
        assert_eq!(tree["body"].as_array().unwrap().len(), 2);
        assert_eq!(tree["body"][1]["expression"]["name"], "y");
    }

    #[test]
    fn test_directive_before_element() {
        let tree = jsx("\"use strict\"; <async />");
        assert_eq!(tree["body"][0]["directive"], "use strict");
        assert_eq!(tree["body"][1]["expression"]["type"], "JSXElement");
        assert!(tree["body"][1].get("directive").is_none());
    }

    #[test]
    fn test_jsx_requires_option() {
        assert!(!parses("<a/>"));
    }

    #[test]
    fn test_less_than_still_works() {
        let tree = jsx("a < b");
        assert_eq!(first_expression(&tree)["operator"], "<");
    }

    #[test]
    fn test_raw_values() {
        let tree = script_with("<a b='x'>t</a>", options().with_raw(true));
        let element = first_expression(&tree);
        assert_eq!(element["openingElement"]["attributes"][0]["value"]["raw"], "'x'");
        assert_eq!(element["children"][0], json!({"type": "JSXText", "value": "t", "raw": "t"}));
    }

    #[test]
    fn test_ranges() {
        let tree = script_with("<a>b</a>", options().with_ranges(true));
        let element = first_expression(&tree);
        assert_eq!((element["start"].clone(), element["end"].clone()), (json!(0), json!(8)));
        assert_eq!(element["openingElement"]["end"], 3);
        assert_eq!(element["children"][0]["start"], 3);
        assert_eq!(element["closingElement"]["start"], 4);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mismatched_closing_tag() {
        let err = script_error_with("<div></span>", options());
        assert_eq!(err.kind(), ErrorKind::Early);
        assert!(err.message().contains("<div>"));
        assert!(err.message().contains("</span>"));

        let err = script_error_with("<Foo></Bar>", options());
        assert!(err.message().contains("Foo") && err.message().contains("Bar"));
    }

    #[test]
    fn test_mismatched_namespaced_and_member_tags() {
        assert!(parse_script("<a:b></a:c>", options()).is_err());
        assert!(parse_script("<a.b></a.c>", options()).is_err());
        assert!(parse_script("<a.b></a:b>", options()).is_err());
    }

    #[test]
    fn test_fragment_closing_mismatch() {
        assert!(parse_script("<></div>", options()).is_err());
        assert!(parse_script("<div></>", options()).is_err());
    }

    #[test]
    fn test_empty_attribute_expression() {
        let err = script_error_with("<a b={} />", options());
        assert_eq!(err.message(), "JSX attributes must only be assigned a non-empty expression");
    }

    #[test]
    fn test_invalid_attribute_value() {
        let err = script_error_with("<a b=1 />", options());
        assert_eq!(err.message(), "JSX value should be either an expression or a quoted JSX text");
    }

    #[test]
    fn test_unterminated_contents() {
        let err = script_error_with("<a>text", options());
        assert_eq!(err.message(), "Unterminated JSX contents");
    }

    #[test]
    fn test_unterminated_attribute_string() {
        let err = script_error_with("<a b='x />", options());
        assert_eq!(err.kind(), ErrorKind::Lexical);
    }
}
