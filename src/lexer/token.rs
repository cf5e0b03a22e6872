//! Token definitions for the ECMAScript scanner

use bitflags::bitflags;

/// A token produced by the scanner
///
/// Tokens are transient: the parser holds the current one and a cloned
/// scanner for lookahead, and only their spans and decoded values survive
/// into the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub start: u32,
    /// Byte offset just past the last character
    pub end: u32,
    /// Line of `start` (1-indexed)
    pub line: u32,
    /// Column of `start` (0-indexed)
    pub column: u32,
    /// Line of `end`
    pub end_line: u32,
    /// Column of `end`
    pub end_column: u32,
    /// Decoded payload
    pub value: TokenValue,
    /// A line terminator was crossed between the previous token and this one
    pub newline_before: bool,
    /// Scanner observations the parser validates later
    pub flags: TokenFlags,
    /// The source text of the token
    pub raw: &'src str,
}

bitflags! {
    /// Facts about a token that only become errors in some contexts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TokenFlags: u8 {
        /// Identifier or keyword spelled with `\u` escapes
        const ESCAPED = 1 << 0;
        /// Legacy octal (`017`) or non-octal decimal (`089`) literal
        const LEGACY_OCTAL = 1 << 1;
        /// String with an octal escape (`\01`) or `\8` / `\9`
        const OCTAL_ESCAPE = 1 << 2;
    }
}

/// Decoded payload of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Number(f64),
    /// Decimal digits of a BigInt literal, without the `n` suffix
    BigInt(String),
    /// Decoded string literal contents, or an identifier's resolved name
    String(String),
    /// Text taken verbatim from the source (JSX text and attribute strings)
    RawSlice(u32, u32),
    RegExp {
        pattern: String,
        flags: String,
    },
    /// A template piece; `cooked` is `None` when it holds an invalid escape
    Template {
        cooked: Option<String>,
        raw: String,
    },
}

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Numeric literal (42, 3.14, 0xFF)
    NumberLiteral,
    /// BigInt literal (42n)
    BigIntLiteral,
    /// String literal ("hello", 'world')
    StringLiteral,
    /// Template literal with no substitutions (`hello`)
    TemplateLiteral,
    /// Template head (`hello ${)
    TemplateHead,
    /// Template middle (} middle ${)
    TemplateMiddle,
    /// Template tail (} tail`)
    TemplateTail,
    /// Regular expression literal (/pattern/flags)
    RegexLiteral,

    // Identifiers and keywords
    /// Identifier (foo, bar, $baz)
    Identifier,
    /// Private name (#foo, #bar)
    PrivateName,
    /// Reserved or contextual keyword
    Keyword(Keyword),

    // JSX
    /// JSX element or attribute name segment, may contain `-`
    JsxIdentifier,
    /// Run of JSX child text
    JsxText,
    /// Quoted JSX attribute value
    JsxString,

    // Punctuators
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    Colon,
    Question,
    QuestionDot,
    QuestionQuestion,
    QuestionQuestionEquals,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Comparison operators
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    EqualsEquals,
    EqualsEqualsEquals,
    BangEquals,
    BangEqualsEquals,

    // Bitwise operators
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    LessLess,
    GreaterGreater,
    GreaterGreaterGreater,

    // Logical operators
    Bang,
    AmpersandAmpersand,
    PipePipe,

    // Assignment operators
    Equals,
    PlusEquals,
    MinusEquals,
    StarEquals,
    StarStarEquals,
    SlashEquals,
    PercentEquals,
    LessLessEquals,
    GreaterGreaterEquals,
    GreaterGreaterGreaterEquals,
    AmpersandEquals,
    PipeEquals,
    CaretEquals,
    AmpersandAmpersandEquals,
    PipePipeEquals,

    /// `=>`
    Arrow,

    /// End of file
    Eof,
}

/// Reserved words and the contextual keywords the parser looks for by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Reserved words
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    // Reserved only in strict mode code
    Implements,
    Interface,
    Let,
    Package,
    Private,
    Protected,
    Public,
    Static,
    Yield,
    // Reserved in module and async code
    Await,
    // Contextual
    As,
    Async,
    From,
    Get,
    Meta,
    Of,
    Set,
    Target,
}

impl Keyword {
    /// Look up the keyword spelled by `name`
    pub fn lookup(name: &str) -> Option<Keyword> {
        let keyword = match name {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "debugger" => Keyword::Debugger,
            "default" => Keyword::Default,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "enum" => Keyword::Enum,
            "export" => Keyword::Export,
            "extends" => Keyword::Extends,
            "false" => Keyword::False,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "in" => Keyword::In,
            "instanceof" => Keyword::Instanceof,
            "new" => Keyword::New,
            "null" => Keyword::Null,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "true" => Keyword::True,
            "try" => Keyword::Try,
            "typeof" => Keyword::Typeof,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            "with" => Keyword::With,
            "implements" => Keyword::Implements,
            "interface" => Keyword::Interface,
            "let" => Keyword::Let,
            "package" => Keyword::Package,
            "private" => Keyword::Private,
            "protected" => Keyword::Protected,
            "public" => Keyword::Public,
            "static" => Keyword::Static,
            "yield" => Keyword::Yield,
            "await" => Keyword::Await,
            "as" => Keyword::As,
            "async" => Keyword::Async,
            "from" => Keyword::From,
            "get" => Keyword::Get,
            "meta" => Keyword::Meta,
            "of" => Keyword::Of,
            "set" => Keyword::Set,
            "target" => Keyword::Target,
            _ => return None,
        };
        Some(keyword)
    }

    /// Reserved in every context; never usable as an identifier
    pub fn is_reserved(&self) -> bool {
        !self.is_strict_reserved() && !self.is_contextual() && *self != Keyword::Await
    }

    /// Reserved only in strict mode code
    pub fn is_strict_reserved(&self) -> bool {
        matches!(
            self,
            Keyword::Implements
                | Keyword::Interface
                | Keyword::Let
                | Keyword::Package
                | Keyword::Private
                | Keyword::Protected
                | Keyword::Public
                | Keyword::Static
                | Keyword::Yield
        )
    }

    /// Never reserved; only meaningful in particular positions
    pub fn is_contextual(&self) -> bool {
        matches!(
            self,
            Keyword::As
                | Keyword::Async
                | Keyword::From
                | Keyword::Get
                | Keyword::Meta
                | Keyword::Of
                | Keyword::Set
                | Keyword::Target
        )
    }

    /// Get the string representation of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::False => "false",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::New => "new",
            Keyword::Null => "null",
            Keyword::Return => "return",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
            Keyword::Implements => "implements",
            Keyword::Interface => "interface",
            Keyword::Let => "let",
            Keyword::Package => "package",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Public => "public",
            Keyword::Static => "static",
            Keyword::Yield => "yield",
            Keyword::Await => "await",
            Keyword::As => "as",
            Keyword::Async => "async",
            Keyword::From => "from",
            Keyword::Get => "get",
            Keyword::Meta => "meta",
            Keyword::Of => "of",
            Keyword::Set => "set",
            Keyword::Target => "target",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TokenKind {
    /// Check if this token is an assignment operator
    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::StarStarEquals
                | TokenKind::SlashEquals
                | TokenKind::PercentEquals
                | TokenKind::LessLessEquals
                | TokenKind::GreaterGreaterEquals
                | TokenKind::GreaterGreaterGreaterEquals
                | TokenKind::AmpersandEquals
                | TokenKind::PipeEquals
                | TokenKind::CaretEquals
                | TokenKind::AmpersandAmpersandEquals
                | TokenKind::PipePipeEquals
                | TokenKind::QuestionQuestionEquals
        )
    }

    /// Identifier-like: a plain identifier or any keyword spelling
    pub fn is_identifier_name(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Keyword(_))
    }
}

impl Token<'_> {
    /// The resolved name of an identifier or keyword token
    pub fn name(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::String(name)) => Some(name),
            (TokenKind::Keyword(keyword), _) => Some(keyword.as_str()),
            _ => None,
        }
    }

    /// String payload of a string, private name or JSX identifier token
    pub fn string_value(&self) -> String {
        match &self.value {
            TokenValue::String(value) => value.clone(),
            _ => String::new(),
        }
    }

    /// Is this the keyword `keyword` spelled without escapes?
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword) && !self.flags.contains(TokenFlags::ESCAPED)
    }
}
