use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Literals too large for an `i64`
    /// fail the callback and surface as lexical errors.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `arr`. Names consist
    /// of letters only.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression into `(Token, byte offset)` pairs.
///
/// The offset accompanying each token is the position of its first byte in
/// `source`; downstream errors report it so malformed input can be located.
/// Whitespace never produces a token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` carrying the offending slice if the
/// input contains a character outside the expression language.
///
/// # Example
/// ```
/// use arrex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a + 1").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], (Token::Integer(1), 4));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     pos:   lexer.span().start, });
        }
    }

    Ok(tokens)
}
