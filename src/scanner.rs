//! Byte-stream to token-stream conversion: a hand-written, one-character
//! lookahead scanner built on [`peekmore`]. `Scanner::next_token` is the
//! whole contract — pull one token at a time, no buffering of results,
//! no backtracking.

use peekmore::{PeekMore, PeekMoreIterator};
use std::str::Chars;

use crate::token::{Location, Token, Type};

pub struct Scanner<'a> {
    chars: PeekMoreIterator<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            chars: source.chars().peekmore(),
            line: 0,
            column: 0,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        c
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Consumes every immediately-following newline so a run of blank
    /// lines collapses into the single NEWLINE already emitted by the
    /// caller. Not called for a comment-terminating newline — see
    /// `next_token`'s `/` arm.
    fn skip_newlines(&mut self) {
        while self.peek_char() == Some('\n') {
            self.advance();
        }
    }

    fn is_letter(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut lexeme = String::new();
        lexeme.push(first);
        while let Some(c) = self.peek_char() {
            if Self::is_letter(c) || Self::is_digit(c) {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        lexeme
    }

    fn read_int(&mut self, first: char) -> String {
        let mut lexeme = String::new();
        lexeme.push(first);
        while let Some(c) = self.peek_char() {
            if Self::is_digit(c) {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        lexeme
    }

    /// Reads a `"…"` literal, decoding `\n \t \\ \"` and silently
    /// discarding any other `\X` escape. Returns `None` if EOF is
    /// reached before the closing quote.
    fn read_string(&mut self) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.advance() {
                None => return None,
                Some('"') => return Some(value),
                Some('\\') => match self.advance() {
                    None => return None,
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\\') => value.push('\\'),
                    Some('"') => value.push('"'),
                    Some(_) => {}
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// Returns the next token and advances past it. Terminates with
    /// an unbounded stream of `EOF` once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let location = Location::new(self.line, self.column);

        let c = match self.advance() {
            None => return Token::new(Type::EOF, String::new(), location),
            Some(c) => c,
        };

        match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(Type::EqualEqual, "==".to_string(), location)
                } else {
                    Token::new(Type::Equal, "=".to_string(), location)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(Type::BangEqual, "!=".to_string(), location)
                } else {
                    Token::new(Type::Illegal, "!".to_string(), location)
                }
            }
            '<' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(Type::LessEqual, "<=".to_string(), location)
                } else {
                    Token::new(Type::Less, "<".to_string(), location)
                }
            }
            '>' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(Type::GreaterEqual, ">=".to_string(), location)
                } else {
                    Token::new(Type::Greater, ">".to_string(), location)
                }
            }
            '/' => {
                if self.peek_char() == Some('/') {
                    self.advance();
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    // The comment's terminating newline is emitted on
                    // its own: unlike a bare `\n`, it does not swallow
                    // a following run of blank lines.
                    if self.peek_char() == Some('\n') {
                        self.advance();
                    }
                    Token::new(Type::Newline, "\n".to_string(), location)
                } else {
                    Token::new(Type::Slash, "/".to_string(), location)
                }
            }
            '\n' => {
                self.skip_newlines();
                Token::new(Type::Newline, "\n".to_string(), location)
            }
            '+' => Token::new(Type::Plus, "+".to_string(), location),
            '-' => Token::new(Type::Minus, "-".to_string(), location),
            '*' => Token::new(Type::Star, "*".to_string(), location),
            ',' => Token::new(Type::Comma, ",".to_string(), location),
            '(' => Token::new(Type::LeftParen, "(".to_string(), location),
            ')' => Token::new(Type::RightParen, ")".to_string(), location),
            '{' => Token::new(Type::LeftBrace, "{".to_string(), location),
            '}' => Token::new(Type::RightBrace, "}".to_string(), location),
            '[' => Token::new(Type::LeftBracket, "[".to_string(), location),
            ']' => Token::new(Type::RightBracket, "]".to_string(), location),
            '"' => match self.read_string() {
                Some(literal) => Token::new(Type::String, literal, location),
                None => Token::new(Type::Illegal, "unterminated string".to_string(), location),
            },
            c if Self::is_letter(c) => {
                let lexeme = self.read_identifier(c);
                Token::new(Type::Ident, lexeme, location)
            }
            c if Self::is_digit(c) => {
                let lexeme = self.read_int(c);
                Token::new(Type::Int, lexeme, location)
            }
            other => Token::new(Type::Illegal, other.to_string(), location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Type> {
        let mut scanner = Scanner::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = scanner.next_token();
            let done = token.kind == Type::EOF;
            kinds.push(token.kind);
            if done {
                break;
            }
        }
        kinds
    }

    #[test]
    fn single_character_tokens() {
        assert_eq!(
            tokens("=+-*/,(){}<>[]"),
            vec![
                Type::Equal,
                Type::Plus,
                Type::Minus,
                Type::Star,
                Type::Slash,
                Type::Comma,
                Type::LeftParen,
                Type::RightParen,
                Type::LeftBrace,
                Type::RightBrace,
                Type::Less,
                Type::Greater,
                Type::LeftBracket,
                Type::RightBracket,
                Type::EOF,
            ]
        );
    }

    #[test]
    fn two_character_operators() {
        assert_eq!(
            tokens("== != <= >="),
            vec![Type::EqualEqual, Type::BangEqual, Type::LessEqual, Type::GreaterEqual, Type::EOF]
        );
    }

    #[test]
    fn line_comment_emits_its_own_newline() {
        assert_eq!(
            tokens("+//aaa\n-"),
            vec![Type::Plus, Type::Newline, Type::Minus, Type::EOF]
        );
    }

    #[test]
    fn consecutive_newlines_collapse() {
        assert_eq!(tokens("1\n\n\n2"), vec![Type::Int, Type::Newline, Type::Int, Type::EOF]);
    }

    #[test]
    fn string_escapes_decode() {
        let mut scanner = Scanner::new("\"\\n\\t\"");
        let token = scanner.next_token();
        assert_eq!(token.kind, Type::String);
        assert_eq!(token.literal, "\n\t");
    }

    #[test]
    fn unknown_escape_discards_both_characters() {
        let mut scanner = Scanner::new("\"a\\zb\"");
        let token = scanner.next_token();
        assert_eq!(token.literal, "ab");
    }

    #[test]
    fn unterminated_string_is_illegal() {
        let mut scanner = Scanner::new("\"abc");
        let token = scanner.next_token();
        assert_eq!(token.kind, Type::Illegal);
    }

    #[test]
    fn bare_bang_is_illegal() {
        let mut scanner = Scanner::new("!");
        let token = scanner.next_token();
        assert_eq!(token.kind, Type::Illegal);
    }

    #[test]
    fn last_token_is_always_eof() {
        for source in ["", "abc", "1 + 2", "\"x\""] {
            let mut scanner = Scanner::new(source);
            let mut last = scanner.next_token();
            for _ in 0..64 {
                if last.kind == Type::EOF {
                    break;
                }
                last = scanner.next_token();
            }
            assert_eq!(last.kind, Type::EOF, "source: {source:?}");
        }
    }

    #[test]
    fn identifiers_and_integers() {
        let mut scanner = Scanner::new("foo_bar 123");
        let id = scanner.next_token();
        assert_eq!((id.kind, id.literal.as_str()), (Type::Ident, "foo_bar"));
        let int = scanner.next_token();
        assert_eq!((int.kind, int.literal.as_str()), (Type::Int, "123"));
    }
}
