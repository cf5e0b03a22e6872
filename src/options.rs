//! Parser configuration

use serde::{Deserialize, Serialize};

/// Default ceiling on nested statements and expressions.
///
/// Parsing recurses once per level, so the stack must hold that many
/// frames: unoptimized builds need about 4 MiB at this depth (the 8 MiB
/// main thread is enough, a default 2 MiB spawned thread is not), while
/// optimized builds fit comfortably in 2 MiB. Lower
/// [`ParseOptions::max_depth`] when parsing on a small stack.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Options recognized by [`parse_script`](crate::parse_script) and
/// [`parse_module`](crate::parse_module).
///
/// Deserializes from the same camelCase object a JavaScript caller would
/// pass, with every field optional:
///
/// ```
/// let options: ferrow::ParseOptions = serde_json::from_str(r#"{"jsx": true, "ranges": true}"#).unwrap();
/// assert!(options.jsx && options.ranges && !options.locations);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Enable syntax newer than the baseline: object rest/spread, async
    /// generators and `for await`, class fields and private names
    pub next: bool,
    /// Enable the JSX sub-parser
    pub jsx: bool,
    /// Attach `start`/`end` offsets to every node
    pub ranges: bool,
    /// Attach `loc` line/column information to every node
    pub locations: bool,
    /// Keep the source text of literals as `raw`
    pub raw: bool,
    /// Maximum nesting of statements and expressions before giving up.
    /// Each link of a member, call or binary-operator chain counts as one
    /// level while the chain is being read.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            next: false,
            jsx: false,
            ranges: false,
            locations: false,
            raw: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next(mut self, next: bool) -> Self {
        self.next = next;
        self
    }

    pub fn with_jsx(mut self, jsx: bool) -> Self {
        self.jsx = jsx;
        self
    }

    pub fn with_ranges(mut self, ranges: bool) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_locations(mut self, locations: bool) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
