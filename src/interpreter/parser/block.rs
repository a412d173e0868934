use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the body of a control statement.
///
/// A body is either a braced group of zero or more statements, or a single
/// statement on its own.
///
/// Grammar: `block := "{" statement* "}" | statement`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the body.
/// - `line`: Line number of the owning statement.
///
/// # Errors
/// `UnexpectedEndOfInput` if the closing `}` is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if !matches!(tokens.peek(), Some((Token::LBrace, _))) {
        let statement = parse_statement(tokens)?;
        return Ok(Block { statements: vec![statement] });
    }
    tokens.next();

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Block { statements })
}
