use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - parenthesized expressions
/// - scalar variable references
/// - array subscript accesses
///
/// There are no unary operators in the expression language, so this level
/// sits directly beneath the multiplicative level. The function dispatches
/// to specialized parsing functions depending on the leading token.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | "(" expression ")"
///              | IDENT
///              | IDENT "[" expression "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: 0 })?;

    match peeked {
        (Token::Integer(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier(tokens),
        (tok, pos) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                        pos:   *pos, }),
    }
}

/// Parses an integer literal.
///
/// The literal's value was already decoded by the lexer; this function only
/// wraps it in a tree node.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, pos) = tokens.peek().unwrap();
    match tok {
        Token::Integer(n) => {
            tokens.next();
            Ok(Expr::Literal { value: *n,
                               pos:   *pos, })
        },
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, pos) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { pos }),
    }
}

/// Parses a scalar reference or an array subscript access.
///
/// Supported forms:
///
/// - name
/// - name[subscript]
///
/// The function first consumes the identifier token. If the next token is
/// `[`, a subscript expression is parsed — the subscript may itself contain
/// variables, subscripts, and parentheses — and a closing `]` is required.
/// Otherwise the identifier is a scalar variable reference. Whether the
/// name actually denotes a discovered symbol is the evaluator's concern,
/// not the parser's.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::ArrayIndex`] if followed by a bracketed subscript,
/// - [`Expr::Scalar`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - the subscript expression fails to parse,
/// - the closing `]` is missing.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, pos) = match tokens.next() {
        Some((Token::Identifier(n), pos)) => (n.clone(), *pos),
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     pos:   *pos, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { pos: 0 });
        },
    };

    if let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();
        let index = parse_expression(tokens)?;
        match tokens.next() {
            Some((Token::RBracket, _)) => Ok(Expr::ArrayIndex { name,
                                                                index: Box::new(index),
                                                                pos }),
            _ => Err(ParseError::ExpectedClosingBracket { pos }),
        }
    } else {
        Ok(Expr::Scalar { name, pos })
    }
}
