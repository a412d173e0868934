use std::iter::Peekable;

use crate::{
    ast::{Assignment, Block, ConditionBlock, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` / `else if` / `else` chain.
/// - a `while` loop.
/// - a `for` loop.
/// - a `print(...)` call, terminated by `;`.
/// - an assignment or an expression, terminated by `;`.
///
/// The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        // Re-tagged with the last line of input by `parse_tokens`.
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let statement = match token {
        Token::If => return parse_if(tokens, line),
        Token::While => return parse_while(tokens, line),
        Token::For => return parse_for(tokens, line),
        Token::Print => parse_print(tokens, line)?,
        _ => parse_simple_statement(tokens)?,
    };
    expect(tokens, &Token::Semicolon, statement.line_number())?;

    Ok(statement)
}

/// Parses an assignment or an expression statement without the trailing
/// `;`.
///
/// Used both for ordinary statements and for the update clause of a `for`
/// header, which is closed by `)` instead.
///
/// # Errors
/// `InvalidAssignmentTarget` if an `=` follows anything but a bare
/// identifier.
fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(assignment) = parse_assignment(tokens)? {
        return Ok(Statement::Assignment(assignment));
    }

    let expr = parse_expression(tokens)?;
    if let Some((Token::Equals, line)) = tokens.peek() {
        return Err(ParseError::InvalidAssignmentTarget { line: *line });
    }
    let line = expr.line_number();

    Ok(Statement::Expression { expr, line })
}

/// Parses `IDENT "=" expression` if the next two tokens are an identifier
/// and `=`.
///
/// Returns `Ok(None)` without consuming anything otherwise.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Assignment>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(_), line)) = lookahead.next() else {
        return Ok(None);
    };
    if !matches!(lookahead.next(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let name = parse_identifier(tokens, *line)?;
    tokens.next();
    let value = parse_expression(tokens)?;

    Ok(Some(Assignment { name,
                         value,
                         line: *line }))
}

/// Parses an `if` statement with any number of `else if` arms and an
/// optional trailing `else`.
///
/// Grammar:
/// ```text
///     if := "if" expression block ("else" "if" expression block)* ("else" block)?
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::If, line)?;

    let mut branches = vec![parse_condition_block(tokens, line)?];
    let mut else_block = None;

    while let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        if let Some((Token::If, _)) = tokens.peek() {
            tokens.next();
            branches.push(parse_condition_block(tokens, line)?);
        } else {
            else_block = Some(parse_block(tokens, line)?);
            break;
        }
    }

    Ok(Statement::If { branches,
                       else_block,
                       line })
}

fn parse_condition_block<'a, I>(tokens: &mut Peekable<I>,
                                line: usize)
                                -> ParseResult<ConditionBlock>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    let block = parse_block(tokens, line)?;

    Ok(ConditionBlock { condition, block })
}

/// Parses `while expression block`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::While, line)?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a C-style `for` loop.
///
/// The header holds an assignment, a condition, and an update that is
/// either an assignment or an expression such as `i++`.
///
/// Grammar:
/// ```text
///     for := "for" "(" assignment ";" expression ";" (assignment | expression) ")" block
/// ```
///
/// # Errors
/// `UnexpectedToken` if the first header clause is not an assignment.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::For, line)?;
    expect(tokens, &Token::LParen, line)?;

    let Some(init) = parse_assignment(tokens)? else {
        let (token, line) = tokens.peek()
                                  .map_or_else(|| ("end of input".to_string(), line),
                                               |(tok, l)| (format!("{tok:?}"), *l));
        return Err(ParseError::UnexpectedToken { token, line });
    };
    expect(tokens, &Token::Semicolon, line)?;

    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, line)?;

    let update = parse_simple_statement(tokens)?;
    expect(tokens, &Token::RParen, line)?;

    let body: Block = parse_block(tokens, line)?;

    Ok(Statement::For { init,
                        condition,
                        update: Box::new(update),
                        body,
                        line })
}

/// Parses `print "(" expression ("," expression)* ")"`.
///
/// At least one expression is required.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Print, line)?;
    expect(tokens, &Token::LParen, line)?;

    let expressions = parse_comma_separated(tokens, parse_expression, &Token::RParen, line)?;
    if expressions.is_empty() {
        return Err(ParseError::InvalidArgumentCount { name: "print".to_string(),
                                                      found: 0,
                                                      line });
    }

    Ok(Statement::Print { expressions, line })
}
