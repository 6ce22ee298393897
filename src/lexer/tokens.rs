use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Literal carried by every token that has no decoded value.
pub const NULL_LITERAL: &str = "null";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("loop", TokenKind::Loop);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Single character
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two characters
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Identifier,
    String,
    Number,

    // Reserved
    Var,
    Const,
    Fn,
    Return,
    If,
    Else,
    For,
    Loop,
    Break,
    Continue,
    And,
    Or,
    Switch,
    Case,

    EOF,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Var => "VAR",
            TokenKind::Const => "CONST",
            TokenKind::Fn => "FN",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::Loop => "LOOP",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Switch => "SWITCH",
            TokenKind::Case => "CASE",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single classified slice of source text.
///
/// `lexeme` is the exact source text, `literal` the decoded value: the
/// string body for strings, the numeral for numbers, the identifier text
/// for identifiers and [`NULL_LITERAL`] for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.line, self.kind, self.literal, self.lexeme)
    }
}

impl Token {
    pub fn eof(line: usize) -> Self {
        Token {
            kind: TokenKind::EOF,
            lexeme: String::new(),
            literal: String::from(NULL_LITERAL),
            line,
        }
    }

    /// One CSV row in `line,TokenType,Literal,Lexeme` order.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
