use std::fmt;

/// The closed set of token kinds the scanner can produce.
///
/// There are no reserved keywords in the surface grammar: names like
/// `true`, `false`, `null` and `puts` are ordinary [`Type::Ident`]
/// tokens that resolve to built-in bindings at evaluation time.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Type {
    // Single-character operators and delimiters.
    Equal,
    Plus,
    Minus,
    Star,
    Slash,
    Less,
    Greater,
    Comma,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // Two-character operators.
    EqualEqual,
    BangEqual,
    LessEqual,
    GreaterEqual,

    // Line structure.
    Newline,

    // Literals and identifiers.
    Int,
    String,
    Ident,

    // Control.
    Illegal,
    EOF,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Type::Equal => "=",
            Type::Plus => "+",
            Type::Minus => "-",
            Type::Star => "*",
            Type::Slash => "/",
            Type::Less => "<",
            Type::Greater => ">",
            Type::Comma => ",",
            Type::LeftParen => "(",
            Type::RightParen => ")",
            Type::LeftBrace => "{",
            Type::RightBrace => "}",
            Type::LeftBracket => "[",
            Type::RightBracket => "]",
            Type::EqualEqual => "==",
            Type::BangEqual => "!=",
            Type::LessEqual => "<=",
            Type::GreaterEqual => ">=",
            Type::Newline => "NEWLINE",
            Type::Int => "INT",
            Type::String => "STRING",
            Type::Ident => "IDENT",
            Type::Illegal => "ILLEGAL",
            Type::EOF => "EOF",
        };
        write!(f, "{tag}")
    }
}

/// A line/column pair pointing at the start of a token's lexeme.
///
/// Lines and columns are stored zero-indexed; [`Display`](fmt::Display)
/// adds one so messages read the way a human expects.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A single scanned token.
///
/// `literal` is the token's payload text: the raw digit run for
/// `Int`, the decoded string (escapes already resolved) for
/// `String`, the name for `Ident`, and the operator/delimiter symbol
/// for everything else.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct Token {
    pub kind: Type,
    pub literal: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: Type, literal: String, location: Location) -> Token {
        Token { kind, literal, location }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.literal, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_is_one_indexed() {
        assert_eq!(Location::new(0, 0).to_string(), "1:1");
    }

    #[test]
    fn type_display_matches_symbol() {
        assert_eq!(Type::EqualEqual.to_string(), "==");
        assert_eq!(Type::Int.to_string(), "INT");
        assert_eq!(Type::EOF.to_string(), "EOF");
    }

    #[test]
    fn token_display() {
        let token = Token::new(Type::Plus, "+".to_string(), Location::new(0, 3));
        assert_eq!(token.to_string(), "+ \"+\" @ 1:4");
    }
}
