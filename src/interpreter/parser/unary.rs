use std::iter::Peekable;

use crate::{
    ast::{Expr, LibFunction, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `++` and `--` (increment and decrement, identifiers only)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | ("++" | "--") IDENT
///            | postfix
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`], an [`Expr::PreIncDec`] or a postfix expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, line) = match tokens.peek() {
        Some((Token::Minus, line)) => (UnaryOperator::Negate, *line),
        Some((Token::Bang, line)) => (UnaryOperator::Not, *line),
        Some((Token::PlusPlus, line)) => return parse_prefix_inc_dec(tokens, 1.0, *line),
        Some((Token::MinusMinus, line)) => return parse_prefix_inc_dec(tokens, -1.0, *line),
        _ => return parse_postfix(tokens),
    };
    tokens.next();
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses `++IDENT` or `--IDENT`; the operator has been peeked but not
/// consumed.
fn parse_prefix_inc_dec<'a, I>(tokens: &mut Peekable<I>,
                               delta: f64,
                               line: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(Expr::PreIncDec { name: name.clone(),
                                                                   delta,
                                                                   line }),
        Some((_, line)) => Err(ParseError::InvalidAssignmentTarget { line: *line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a primary expression and an optional postfix `++` / `--`.
///
/// Only a bare identifier may carry a postfix operator; anything else
/// followed by `++` or `--` is an `InvalidAssignmentTarget`.
///
/// Grammar: `postfix := IDENT ("++" | "--") | primary`
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_primary(tokens)?;

    let delta = match tokens.peek() {
        Some((Token::PlusPlus, _)) => 1.0,
        Some((Token::MinusMinus, _)) => -1.0,
        _ => return Ok(expr),
    };
    tokens.next();

    match expr {
        Expr::Identifier { name, line } => Ok(Expr::PostIncDec { name, delta, line }),
        other => Err(ParseError::InvalidAssignmentTarget { line: other.line_number() }),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string, boolean and `nil` literals
/// - identifiers
/// - library calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | IDENT
///              | LIBFN "(" expression? ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        // Re-tagged with the last line of input by `parse_tokens`.
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let value = match token {
        Token::Number(n) => LiteralValue::Number(*n),
        Token::Str(s) => LiteralValue::String(s.clone()),
        Token::Bool(b) => LiteralValue::Boolean(*b),
        Token::Nil => LiteralValue::Nil,
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, line)?;
            return Ok(Expr::Paren { expr: Box::new(expr),
                                    line });
        },
        Token::Identifier(name) => {
            if matches!(tokens.peek(), Some((Token::LParen, _))) {
                return parse_lib_call(tokens, name, line);
            }
            return Ok(Expr::Identifier { name: name.clone(),
                                         line });
        },
        tok => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses the argument list of a library call.
///
/// The name has already been consumed and the next token is `(`. The math
/// functions take exactly one argument, `read` takes zero or one.
///
/// # Errors
/// - `UnknownFunction` if `name` is not a library function.
/// - `InvalidArgumentCount` if the arity does not match.
fn parse_lib_call<'a, I>(tokens: &mut Peekable<I>, name: &str, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(function) = LibFunction::from_name(name) else {
        return Err(ParseError::UnknownFunction { name: name.to_string(),
                                                 line });
    };
    expect(tokens, &Token::LParen, line)?;

    let mut args = parse_comma_separated(tokens, parse_expression, &Token::RParen, line)?;
    let arity_ok = match args.len() {
        0 => function.argument_optional(),
        1 => true,
        _ => false,
    };
    if !arity_ok {
        return Err(ParseError::InvalidArgumentCount { name: name.to_string(),
                                                      found: args.len(),
                                                      line });
    }

    Ok(Expr::LibCall { function,
                       argument: args.pop().map(Box::new),
                       line })
}
