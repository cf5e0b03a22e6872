//! Shared test helpers for integration tests

use ferrow::{parse_module, parse_script, Error, ParseOptions};
use serde_json::Value;

/// Parse a script with default options and return its ESTree JSON
#[allow(dead_code)]
pub fn script(source: &str) -> Value {
    script_with(source, ParseOptions::default())
}

/// Parse a script with `options` and return its ESTree JSON
pub fn script_with(source: &str, options: ParseOptions) -> Value {
    match parse_script(source, options) {
        Ok(program) => ferrow::to_estree(&program),
        Err(e) => panic!("failed to parse {:?}: {}", source, e),
    }
}

/// Parse a module with default options and return its ESTree JSON
#[allow(dead_code)]
pub fn module(source: &str) -> Value {
    match parse_module(source, ParseOptions::default()) {
        Ok(program) => ferrow::to_estree(&program),
        Err(e) => panic!("failed to parse module {:?}: {}", source, e),
    }
}

/// Parse a script with the `next` syntax extensions enabled
#[allow(dead_code)]
pub fn script_next(source: &str) -> Value {
    script_with(source, ParseOptions::default().with_next(true))
}

/// Parse a script with JSX enabled
#[allow(dead_code)]
pub fn jsx(source: &str) -> Value {
    script_with(source, ParseOptions::default().with_jsx(true))
}

/// Parse a script that must be rejected and return the error
#[allow(dead_code)]
pub fn script_error(source: &str) -> Error {
    script_error_with(source, ParseOptions::default())
}

/// Parse a script with `options` that must be rejected
#[allow(dead_code)]
pub fn script_error_with(source: &str, options: ParseOptions) -> Error {
    match parse_script(source, options) {
        Ok(program) => panic!("expected {:?} to fail, got {}", source, ferrow::to_estree(&program)),
        Err(e) => e,
    }
}

/// Parse a module that must be rejected and return the error
#[allow(dead_code)]
pub fn module_error(source: &str) -> Error {
    match parse_module(source, ParseOptions::default()) {
        Ok(program) => panic!("expected module {:?} to fail, got {}", source, ferrow::to_estree(&program)),
        Err(e) => e,
    }
}

/// Whether a script parses with default options
#[allow(dead_code)]
pub fn parses(source: &str) -> bool {
    parse_script(source, ParseOptions::default()).is_ok()
}

/// Expression of the first statement
#[allow(dead_code)]
pub fn first_expression(tree: &Value) -> &Value {
    &tree["body"][0]["expression"]
}
