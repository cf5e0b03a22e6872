//! Character classification for ECMAScript source text
//!
//! Thin layer over `unicode-xid` that adds the code points ECMAScript treats
//! specially: `$` and `_` in identifiers, ZWNJ/ZWJ as identifier parts, the
//! Other_ID_Start characters, and the `Zs` whitespace category.

use unicode_xid::UnicodeXID;

/// Zero-width non-joiner
pub const ZWNJ: char = '\u{200C}';
/// Zero-width joiner
pub const ZWJ: char = '\u{200D}';
/// Byte order mark, whitespace in ECMAScript source
pub const BOM: char = '\u{FEFF}';

/// Can `c` begin an IdentifierName?
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '$' || c == '_';
    }
    c.is_xid_start() || matches!(c, '\u{2118}' | '\u{212E}' | '\u{309B}' | '\u{309C}')
}

/// Can `c` continue an IdentifierName?
pub fn is_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '$' || c == '_';
    }
    c.is_xid_continue()
        || c == ZWNJ
        || c == ZWJ
        || matches!(c, '\u{2118}' | '\u{212E}' | '\u{309B}' | '\u{309C}' | '\u{00B7}' | '\u{0387}' | '\u{19DA}')
        || ('\u{1369}'..='\u{1371}').contains(&c)
}

/// WhiteSpace production: TAB, VT, FF, SP, NBSP, ZWNBSP and category Zs
pub fn is_white_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | BOM
    )
}

/// LineTerminator production: LF, CR, LS, PS
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Code points in the surrogate range cannot be represented in a Rust
/// `char`; escapes that name one decode to the replacement character.
pub fn is_surrogate(code: u32) -> bool {
    (0xD800..=0xDFFF).contains(&code)
}

pub fn is_lead_surrogate(code: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

pub fn is_trail_surrogate(code: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}

/// Combine a surrogate pair into the code point it encodes
pub fn from_surrogate_pair(lead: u32, trail: u32) -> u32 {
    ((lead - 0xD800) << 10) + (trail - 0xDC00) + 0x10000
}
