use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly parses an operand with `next`, then folds any following
/// operator accepted by `accepts` into a left-leaning `Expr::BinaryOp` tree.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `next`: Parser for the next-higher precedence level.
/// - `accepts`: Operators handled at this level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = next(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: *line };
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// The rule is: `and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_equality, |op| op == BinaryOperator::And)
}

/// Parses `==` and `!=`.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Eq | BinaryOperator::Neq)
    })
}

/// Parses the ordering comparisons `<`, `<=`, `>` and `>=`.
///
/// Comparisons chain left to right, so `a < b < c` compares the Boolean
/// result of `a < b` against `c` and fails at runtime.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Lt
                 | BinaryOperator::Lteq
                 | BinaryOperator::Gt
                 | BinaryOperator::Gteq)
    })
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_power, |op| {
        matches!(op, BinaryOperator::Mult | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative:
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `power := unary ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_unary(tokens)?;
    if let Some((Token::Caret, line)) = tokens.peek() {
        tokens.next();
        let right = parse_power(tokens)?;
        return Ok(Expr::BinaryOp { left:  Box::new(left),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(right),
                                   line:  *line, });
    }
    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mult),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Lt),
        Token::Greater => Some(BinaryOperator::Gt),
        Token::LessEqual => Some(BinaryOperator::Lteq),
        Token::GreaterEqual => Some(BinaryOperator::Gteq),
        Token::EqualEqual => Some(BinaryOperator::Eq),
        Token::BangEqual => Some(BinaryOperator::Neq),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
