//! Integration tests for expressions

mod common;
use common::{first_expression, module, parses, script, script_error, script_next};
use ferrow::{ErrorKind, ParseOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

mod operators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_assignment() {
        let tree = script("x = 0");
        assert_eq!(
            *first_expression(&tree),
            json!({
                "type": "AssignmentExpression",
                "operator": "=",
                "left": {"type": "Identifier", "name": "x"},
                "right": {"type": "Literal", "value": 0}
            })
        );
    }

    #[test]
    fn test_precedence() {
        let tree = script("1 + 2 * 3");
        let expr = first_expression(&tree);
        assert_eq!(expr["operator"], "+");
        assert_eq!(expr["right"]["operator"], "*");

        let tree = script("a || b && c");
        let expr = first_expression(&tree);
        assert_eq!(expr["type"], "LogicalExpression");
        assert_eq!(expr["operator"], "||");
        assert_eq!(expr["right"]["operator"], "&&");
    }

    #[test]
    fn test_left_associativity() {
        let tree = script("a - b - c");
        let expr = first_expression(&tree);
        assert_eq!(expr["left"]["operator"], "-");
        assert_eq!(expr["right"]["name"], "c");
    }

    #[test]
    fn test_exponent_is_right_associative() {
        let tree = script("a ** b ** c");
        let expr = first_expression(&tree);
        assert_eq!(expr["left"]["name"], "a");
        assert_eq!(expr["right"]["operator"], "**");
        assert_eq!(expr["right"]["left"]["name"], "b");
    }

    #[test]
    fn test_unary_before_exponent() {
        let err = script_error("-a ** b");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(parses("(-a) ** b"));
        assert!(parses("a ** -b"));
        assert!(!parses("typeof a ** b"));
    }

    #[test]
    fn test_nullish_mixing_requires_parentheses() {
        assert!(parses("a ?? b ?? c"));
        assert!(!parses("a ?? b || c"));
        assert!(!parses("a || b ?? c"));
        assert!(!parses("a && b ?? c"));
        assert!(parses("(a ?? b) || c"));
        assert!(parses("a ?? (b && c)"));
    }

    #[test]
    fn test_in_and_instanceof() {
        let tree = script("a in b instanceof c");
        let expr = first_expression(&tree);
        assert_eq!(expr["operator"], "instanceof");
        assert_eq!(expr["left"]["operator"], "in");
    }

    #[test]
    fn test_conditional() {
        let tree = script("a ? b : c ? d : e");
        let expr = first_expression(&tree);
        assert_eq!(expr["type"], "ConditionalExpression");
        assert_eq!(expr["alternate"]["type"], "ConditionalExpression");
    }

    #[test]
    fn test_sequence() {
        let tree = script("a, b, c");
        let expr = first_expression(&tree);
        assert_eq!(expr["type"], "SequenceExpression");
        assert_eq!(expr["expressions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_compound_assignment() {
        let tree = script("a.b **= 2; c ??= d; e &&= f");
        assert_eq!(tree["body"][0]["expression"]["operator"], "**=");
        assert_eq!(tree["body"][0]["expression"]["left"]["type"], "MemberExpression");
        assert_eq!(tree["body"][1]["expression"]["operator"], "??=");
        assert_eq!(tree["body"][2]["expression"]["operator"], "&&=");
    }

    #[test]
    fn test_compound_assignment_rejects_patterns() {
        assert!(!parses("[a] += 1"));
        assert!(!parses("({a} ||= b)"));
    }

    #[test]
    fn test_invalid_assignment_targets() {
        let err = script_error("a + b = c");
        assert_eq!(err.kind(), ErrorKind::Early);
        assert_eq!(err.message(), "Invalid left-hand side in assignment");
        assert!(!parses("a() = b"));
        assert!(!parses("1 = 2"));
        assert!(!parses("(a, b) = (c, d)"));
    }

    #[test]
    fn test_parenthesized_simple_targets() {
        assert!(parses("(a) = 1"));
        assert!(parses("(a.b) = 1"));
        assert!(!parses("({a}) = 1"));
        assert!(!parses("([a]) = 1"));
    }

    #[test]
    fn test_update_expressions() {
        let tree = script("++a; b--");
        assert_eq!(tree["body"][0]["expression"]["prefix"], true);
        assert_eq!(tree["body"][1]["expression"]["operator"], "--");
        assert_eq!(tree["body"][1]["expression"]["prefix"], false);
        assert!(!parses("++a()"));
        assert!(!parses("(a + b)++"));
    }

    #[test]
    fn test_strict_eval_update() {
        assert!(parses("eval++"));
        assert!(!parses("'use strict'; eval++"));
        assert!(!parses("'use strict'; arguments = 1"));
    }

    #[test]
    fn test_strict_delete_of_identifier() {
        let err = script_error("'use strict'; delete x;");
        assert_eq!(err.kind(), ErrorKind::Early);
        assert!(parses("'use strict'; delete x.y;"));
        assert!(parses("delete x;"));
    }

    #[test]
    fn test_unary_operators() {
        let tree = script("typeof a; void 0; !b; ~c");
        assert_eq!(tree["body"][0]["expression"]["operator"], "typeof");
        assert_eq!(tree["body"][0]["expression"]["prefix"], true);
        assert_eq!(tree["body"][1]["expression"]["operator"], "void");
        assert_eq!(tree["body"][2]["expression"]["operator"], "!");
        assert_eq!(tree["body"][3]["expression"]["operator"], "~");
    }

    #[test]
    fn test_nested_parentheses() {
        let source = format!("{}x{}", "(".repeat(40), ")".repeat(40));
        let tree = script(&source);
        assert_eq!(*first_expression(&tree), json!({"type": "Identifier", "name": "x"}));
    }
}

mod members_and_calls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_and_call() {
        let tree = script("a.b[c](d, ...e)");
        let call = first_expression(&tree);
        assert_eq!(call["type"], "CallExpression");
        assert_eq!(call["callee"]["computed"], true);
        assert_eq!(call["callee"]["object"]["property"]["name"], "b");
        assert_eq!(call["arguments"][1]["type"], "SpreadElement");
        assert!(call.get("optional").is_none());
    }

    #[test]
    fn test_keyword_property_names() {
        let tree = script("a.if.class");
        assert_eq!(first_expression(&tree)["property"]["name"], "class");
    }

    #[test]
    fn test_new_expression() {
        let tree = script("new Foo(1); new Bar; new new X()()");
        assert_eq!(tree["body"][0]["expression"]["type"], "NewExpression");
        assert_eq!(tree["body"][1]["expression"]["arguments"], json!([]));
        assert_eq!(tree["body"][2]["expression"]["callee"]["type"], "NewExpression");
    }

    #[test]
    fn test_new_with_member_callee() {
        let tree = script("new a.b.c()");
        let expr = first_expression(&tree);
        assert_eq!(expr["callee"]["type"], "MemberExpression");
        assert_eq!(expr["callee"]["property"]["name"], "c");
    }

    #[test]
    fn test_optional_chain() {
        let tree = script("a?.b.c");
        let chain = first_expression(&tree);
        assert_eq!(chain["type"], "ChainExpression");
        let outer = &chain["expression"];
        assert_eq!(outer["type"], "MemberExpression");
        assert!(outer.get("optional").is_none());
        assert_eq!(outer["object"]["optional"], true);
    }

    #[test]
    fn test_optional_call_and_computed() {
        let tree = script("a?.(b)?.[c]");
        let expr = &first_expression(&tree)["expression"];
        assert_eq!(expr["type"], "MemberExpression");
        assert_eq!(expr["computed"], true);
        assert_eq!(expr["optional"], true);
        assert_eq!(expr["object"]["type"], "CallExpression");
        assert_eq!(expr["object"]["optional"], true);
    }

    #[test]
    fn test_optional_chain_restrictions() {
        assert!(!parses("new a?.b()"));
        assert!(!parses("a?.b`t`"));
        assert!(!parses("a?.b = 1"));
        assert!(!parses("a?.b++"));
    }

    #[test]
    fn test_tagged_template() {
        let tree = script("tag`a${b}c`");
        let expr = first_expression(&tree);
        assert_eq!(expr["type"], "TaggedTemplateExpression");
        assert_eq!(expr["quasi"]["quasis"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_super_outside_methods() {
        let err = script_error("super.x");
        assert_eq!(err.message(), "'super' keyword unexpected here");
        assert!(parses("({ m() { return super.x; } })"));
        assert!(!parses("({ m: function () { return super.x; } })"));
    }
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbers() {
        let tree = script("0x1F; 1e3; .5; 0b11; 0o17; 1_000");
        let values: Vec<_> = tree["body"]
            .as_array()
            .unwrap()
            .iter()
            .map(|stmt| stmt["expression"]["value"].clone())
            .collect();
        assert_eq!(values, vec![json!(31), json!(1000), json!(0.5), json!(3), json!(15), json!(1000)]);
    }

    #[test]
    fn test_legacy_octal() {
        assert_eq!(first_expression(&script("017"))["value"], 15);
        let err = script_error("'use strict'; 017");
        assert_eq!(err.message(), "Octal literals are not allowed in strict mode");
    }

    #[test]
    fn test_bigint() {
        let tree = script("10n");
        assert_eq!(*first_expression(&tree), json!({"type": "Literal", "value": null, "bigint": "10"}));
    }

    #[test]
    fn test_strings() {
        let tree = script(r#"'a\tb'; "\u{41}""#);
        assert_eq!(tree["body"][0]["expression"]["value"], "a\tb");
        assert_eq!(tree["body"][1]["expression"]["value"], "A");
    }

    #[test]
    fn test_keyword_literals() {
        let tree = script("null; true; false; this");
        assert_eq!(tree["body"][0]["expression"], json!({"type": "Literal", "value": null}));
        assert_eq!(tree["body"][1]["expression"]["value"], true);
        assert_eq!(tree["body"][2]["expression"]["value"], false);
        assert_eq!(tree["body"][3]["expression"], json!({"type": "ThisExpression"}));
    }

    #[test]
    fn test_regular_expression() {
        let tree = script("x = /a+[/]/gi");
        assert_eq!(
            first_expression(&tree)["right"],
            json!({"type": "Literal", "value": null, "regex": {"pattern": "a+[/]", "flags": "gi"}})
        );
    }

    #[test]
    fn test_regex_starting_with_equals() {
        let tree = script("x = /=/");
        assert_eq!(first_expression(&tree)["right"]["regex"]["pattern"], "=");
    }

    #[test]
    fn test_division_is_not_a_regex() {
        let tree = script("a / b / c");
        assert_eq!(first_expression(&tree)["operator"], "/");
    }

    #[test]
    fn test_template_literal() {
        let tree = script("`a${b}c${d}`");
        let template = first_expression(&tree);
        assert_eq!(template["type"], "TemplateLiteral");
        assert_eq!(template["expressions"].as_array().unwrap().len(), 2);
        let quasis = template["quasis"].as_array().unwrap();
        assert_eq!(quasis.len(), 3);
        assert_eq!(quasis[0]["value"], json!({"raw": "a", "cooked": "a"}));
        assert_eq!(quasis[2]["tail"], true);
        assert_eq!(quasis[2]["value"]["cooked"], "");
    }

    #[test]
    fn test_invalid_escape_in_tagged_template() {
        let tree = script(r"tag`\unicode`");
        let quasi = &first_expression(&tree)["quasi"]["quasis"][0];
        assert_eq!(quasi["value"]["cooked"], json!(null));
        assert_eq!(quasi["value"]["raw"], r"\unicode");
        assert!(!parses(r"`\unicode`"));
    }

    #[test]
    fn test_array_holes() {
        let tree = script("[, a, , ...b]");
        let elements = first_expression(&tree)["elements"].as_array().unwrap().clone();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0], json!(null));
        assert_eq!(elements[2], json!(null));
        assert_eq!(elements[3]["type"], "SpreadElement");
    }
}

mod objects {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_members() {
        let tree = script("({ a: 1, b, get c() { return 1; }, set c(v) {}, m() {}, [k]: 2, 'q': 3, 4: 5 })");
        let properties = first_expression(&tree)["properties"].as_array().unwrap().clone();
        assert_eq!(properties.len(), 8);
        assert_eq!(properties[0]["kind"], "init");
        assert_eq!(properties[1]["shorthand"], true);
        assert_eq!(properties[2]["kind"], "get");
        assert_eq!(properties[3]["kind"], "set");
        assert_eq!(properties[4]["method"], true);
        assert_eq!(properties[4]["value"]["type"], "FunctionExpression");
        assert_eq!(properties[5]["computed"], true);
        assert_eq!(properties[6]["key"]["value"], "q");
        assert_eq!(properties[7]["key"]["value"], 4);
    }

    #[test]
    fn test_keyword_keys() {
        let tree = script("({ if: 1, get: 2, set() {}, async: 3 })");
        let properties = first_expression(&tree)["properties"].as_array().unwrap().clone();
        assert_eq!(properties[0]["key"]["name"], "if");
        assert_eq!(properties[1]["kind"], "init");
        assert_eq!(properties[2]["method"], true);
        assert_eq!(properties[3]["key"]["name"], "async");
    }

    #[test]
    fn test_async_and_generator_methods() {
        let tree = script("({ async m() {}, *g() {} })");
        let properties = first_expression(&tree)["properties"].as_array().unwrap().clone();
        assert_eq!(properties[0]["value"]["async"], true);
        assert_eq!(properties[1]["value"]["generator"], true);
    }

    #[test]
    fn test_duplicate_proto() {
        let err = script_error("({ __proto__: a, __proto__: b })");
        assert_eq!(err.kind(), ErrorKind::Early);
        assert_eq!(err.message(), "Redefinition of __proto__ property");
        assert!(parses("({ __proto__: a, '__proto__': b } = c)"));
        assert!(parses("({ __proto__: a, ['__proto__']: b })"));
        assert!(parses("({ __proto__: a, __proto__() {} })"));
    }

    #[test]
    fn test_shorthand_initializer_only_in_patterns() {
        let err = script_error("({ a = 1 })");
        assert_eq!(err.message(), "Invalid shorthand property initializer");
        assert!(parses("({ a = 1 } = b)"));
        assert!(parses("({ a = 1 }) => a"));
        assert!(!parses("f({ a = 1 })"));
    }

    #[test]
    fn test_shorthand_reserved_word() {
        assert!(!parses("({ if })"));
        assert!(!parses("'use strict'; ({ implements })"));
    }

    #[test]
    fn test_object_spread_requires_next() {
        assert!(!parses("({ ...a })"));
        let tree = script_next("({ ...a, b })");
        assert_eq!(first_expression(&tree)["properties"][0]["type"], "SpreadElement");
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arrow_functions() {
        let tree = script("(a, b) => a + b");
        let arrow = first_expression(&tree);
        assert_eq!(arrow["type"], "ArrowFunctionExpression");
        assert_eq!(arrow["expression"], true);
        assert_eq!(arrow["id"], json!(null));
        assert_eq!(arrow["params"].as_array().unwrap().len(), 2);
        assert_eq!(arrow["body"]["operator"], "+");

        let tree = script("x => { return x; }");
        assert_eq!(first_expression(&tree)["expression"], false);
        assert_eq!(first_expression(&tree)["body"]["type"], "BlockStatement");
    }

    #[test]
    fn test_arrow_parameters() {
        let tree = script("([a, b], {c}, d = 1, ...e) => 0");
        let params = first_expression(&tree)["params"].as_array().unwrap().clone();
        assert_eq!(params[0]["type"], "ArrayPattern");
        assert_eq!(params[1]["type"], "ObjectPattern");
        assert_eq!(params[2]["type"], "AssignmentPattern");
        assert_eq!(params[3]["type"], "RestElement");
    }

    #[test]
    fn test_invalid_arrow_parameters() {
        assert!(!parses("(a, a) => 1"));
        assert!(!parses("((a)) => 1"));
        assert!(!parses("(a.b) => 1"));
        assert!(!parses("(1) => 1"));
        assert!(!parses("(...a, b) => 1"));
        assert!(!parses("(...a = 1) => 1"));
        assert!(!parses("()"));
    }

    #[test]
    fn test_arrow_line_terminator() {
        assert!(!parses("(a)\n=> a"));
        assert!(!parses("a\n=> a"));
    }

    #[test]
    fn test_arrow_is_not_an_operand() {
        assert!(!parses("() => {} + 1"));
        assert!(!parses("!() => {}"));
        assert!(parses("(() => {}) + 1"));
    }

    #[test]
    fn test_async_arrow_versus_call() {
        let tree = script("async (a, b) => a");
        let arrow = first_expression(&tree);
        assert_eq!(arrow["type"], "ArrowFunctionExpression");
        assert_eq!(arrow["async"], true);

        let tree = script("async (a, b)");
        let call = first_expression(&tree);
        assert_eq!(call["type"], "CallExpression");
        assert_eq!(call["callee"]["name"], "async");

        let tree = script("async x => x");
        assert_eq!(first_expression(&tree)["async"], true);

        let tree = script("async");
        assert_eq!(*first_expression(&tree), json!({"type": "Identifier", "name": "async"}));
    }

    #[test]
    fn test_async_arrow_await_parameter() {
        assert!(!parses("async (await) => 1"));
        assert!(!parses("async (a = await 1) => 1"));
        assert!(parses("async (a = 1) => await a"));
    }

    #[test]
    fn test_function_expression() {
        let tree = script("(function named() {})");
        let function = first_expression(&tree);
        assert_eq!(function["type"], "FunctionExpression");
        assert_eq!(function["id"]["name"], "named");
    }

    #[test]
    fn test_class_expression() {
        let tree = script("(class extends Base {})");
        let class = first_expression(&tree);
        assert_eq!(class["type"], "ClassExpression");
        assert_eq!(class["id"], json!(null));
        assert_eq!(class["superClass"]["name"], "Base");
    }

    #[test]
    fn test_new_target() {
        let tree = script("function f() { return new.target; }");
        let meta = &tree["body"][0]["body"]["body"][0]["argument"];
        assert_eq!(
            *meta,
            json!({
                "type": "MetaProperty",
                "meta": {"type": "Identifier", "name": "new"},
                "property": {"type": "Identifier", "name": "target"}
            })
        );
        assert!(!parses("new.target"));
        assert!(parses("function f() { return () => new.target; }"));
        assert!(!parses("() => new.target"));
    }
}

mod generators_and_async {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_yield_forms() {
        let tree = script("function* g() { yield; yield a; yield* b; }");
        let body = &tree["body"][0]["body"]["body"];
        assert_eq!(body[0]["expression"]["argument"], json!(null));
        assert_eq!(body[0]["expression"]["delegate"], false);
        assert_eq!(body[1]["expression"]["argument"]["name"], "a");
        assert_eq!(body[2]["expression"]["delegate"], true);
    }

    #[test]
    fn test_yield_as_identifier() {
        assert!(parses("var yield = 1; yield + 1;"));
        assert!(!parses("'use strict'; var yield;"));
        assert!(!parses("function* g() { var yield; }"));
    }

    #[test]
    fn test_yield_in_generator_parameters() {
        assert!(!parses("function* g(a = yield) {}"));
        assert!(parses("function* g() { function f(a = yield) {} }"));
    }

    #[test]
    fn test_yield_operand_line_terminator() {
        let tree = script("function* g() { yield\na; }");
        let body = &tree["body"][0]["body"]["body"];
        assert_eq!(body[0]["expression"]["argument"], json!(null));
        assert_eq!(body[1]["expression"]["name"], "a");
    }

    #[test]
    fn test_await_forms() {
        let tree = script("async function f() { await a; (await b)(); }");
        let body = &tree["body"][0]["body"]["body"];
        assert_eq!(body[0]["expression"]["type"], "AwaitExpression");
        assert_eq!(body[1]["expression"]["callee"]["type"], "AwaitExpression");
    }

    #[test]
    fn test_await_as_identifier() {
        assert!(parses("var await = 1; await;"));
        assert!(!parses("async function f() { var await; }"));
        assert!(!parses("async function f(await) {}"));
        assert!(ferrow::parse_module("var await;", ParseOptions::default()).is_err());
    }

    #[test]
    fn test_await_in_async_parameters() {
        assert!(!parses("async function f(a = await 1) {}"));
    }

    #[test]
    fn test_top_level_await_in_module() {
        let tree = module("await x;");
        assert_eq!(first_expression(&tree)["type"], "AwaitExpression");
        assert!(!parses("await x;"));
    }

    #[test]
    fn test_async_generator_method_requires_next() {
        assert!(!parses("({ async *m() {} })"));
        let tree = script_next("({ async *m() { yield await 1; } })");
        let value = &first_expression(&tree)["properties"][0]["value"];
        assert_eq!(value["async"], true);
        assert_eq!(value["generator"], true);
    }
}

mod imports {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dynamic_import() {
        let tree = script("import('./a.js')");
        let expr = first_expression(&tree);
        assert_eq!(expr["type"], "ImportExpression");
        assert_eq!(expr["source"]["value"], "./a.js");
        assert!(!parses("new import('a')"));
    }

    #[test]
    fn test_import_meta() {
        let tree = module("import.meta.url");
        let member = first_expression(&tree);
        assert_eq!(member["object"]["type"], "MetaProperty");
        assert_eq!(member["object"]["meta"]["name"], "import");
        assert_eq!(member["object"]["property"]["name"], "meta");

        let err = script_error("import.meta");
        assert_eq!(err.message(), "Cannot use 'import.meta' outside a module");
    }
}
