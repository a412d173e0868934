use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into a complete program.
///
/// Statements are parsed one after another until the tokens run out.
/// Running out of tokens inside a statement is reported on the line of the
/// last token, where the input actually ended.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use mulang::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("x = 1; print(x);").unwrap();
/// let program = parse_tokens(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter).map_err(|e| match e {
                                                       ParseError::UnexpectedEndOfInput { .. } => {
                                                           ParseError::UnexpectedEndOfInput { line: end_line }
                                                       },
                                                       other => other,
                                                   })?;
        statements.push(statement);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, LibFunction, LiteralValue, Statement, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Program> {
        parse_tokens(&tokenize(source)?)
    }

    fn parse_expr(source: &str) -> Expr {
        let program = parse(&format!("{source};")).unwrap();
        match program.statements.into_iter().next() {
            Some(Statement::Expression { expr, .. }) => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    fn num(n: f64) -> Expr {
        Expr::Literal { value: LiteralValue::Number(n),
                        line:  1, }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 1 }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse_expr("1 + 2 * 3"),
                   binary(num(1.0), BinaryOperator::Add, binary(num(2.0), BinaryOperator::Mult, num(3.0))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(parse_expr("5 - 2 - 1"),
                   binary(binary(num(5.0), BinaryOperator::Sub, num(2.0)), BinaryOperator::Sub, num(1.0)));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse_expr("2 ^ 3 ^ 2"),
                   binary(num(2.0), BinaryOperator::Pow, binary(num(3.0), BinaryOperator::Pow, num(2.0))));
    }

    #[test]
    fn negation_binds_tighter_than_power() {
        let negated = Expr::UnaryOp { op:   UnaryOperator::Negate,
                                      expr: Box::new(num(2.0)),
                                      line: 1, };
        assert_eq!(parse_expr("-2 ^ 2"), binary(negated, BinaryOperator::Pow, num(2.0)));
    }

    #[test]
    fn logical_operators_have_lowest_precedence() {
        let Expr::BinaryOp { op, left, .. } = parse_expr("a < 1 || b && c") else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Or);
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Lt, .. }));
    }

    #[test]
    fn prefix_and_postfix_increments() {
        assert_eq!(parse_expr("++i"),
                   Expr::PreIncDec { name:  "i".to_string(),
                                     delta: 1.0,
                                     line:  1, });
        assert_eq!(parse_expr("i--"),
                   Expr::PostIncDec { name:  "i".to_string(),
                                      delta: -1.0,
                                      line:  1, });
    }

    #[test]
    fn increment_requires_an_identifier() {
        assert!(matches!(parse("++3;"), Err(ParseError::InvalidAssignmentTarget { line: 1 })));
        assert!(matches!(parse("(x)++;"), Err(ParseError::InvalidAssignmentTarget { line: 1 })));
    }

    #[test]
    fn library_calls_check_arity() {
        assert_eq!(parse_expr("read()"),
                   Expr::LibCall { function: LibFunction::Read,
                                   argument: None,
                                   line:     1, });
        assert!(matches!(parse("x = sqrt();"),
                         Err(ParseError::InvalidArgumentCount { found: 0, .. })));
        assert!(matches!(parse("x = sin(1, 2);"),
                         Err(ParseError::InvalidArgumentCount { found: 2, .. })));
        assert!(matches!(parse("x = tan(1);"), Err(ParseError::UnknownFunction { .. })));
    }

    #[test]
    fn if_with_else_if_chain() {
        let program = parse("if x < 0 { y = 1; } else if x == 0 y = 2; else { y = 3; }").unwrap();
        let [Statement::If { branches, else_block, .. }] = program.statements.as_slice() else {
            panic!("expected a single if statement");
        };
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[1].block.statements.len(), 1);
        assert!(else_block.is_some());
    }

    #[test]
    fn for_header_accepts_expression_update() {
        let program = parse("for (i = 0; i < 3; i++) print(i);").unwrap();
        let [Statement::For { init, update, body, .. }] = program.statements.as_slice() else {
            panic!("expected a single for statement");
        };
        assert_eq!(init.name, "i");
        assert!(matches!(**update, Statement::Expression { expr: Expr::PostIncDec { .. }, .. }));
        assert_eq!(body.statements.len(), 1);
    }

    #[test]
    fn for_header_requires_assignment() {
        assert!(matches!(parse("for (i < 3; i < 3; i++) {}"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn statements_need_semicolons() {
        assert!(matches!(parse("x = 1"), Err(ParseError::UnexpectedEndOfInput { line: 1 })));
        assert!(matches!(parse("x = 1\ny = 2;"), Err(ParseError::UnexpectedToken { line: 2, .. })));
    }

    #[test]
    fn missing_paren_and_brace() {
        assert!(matches!(parse("x = (1 + 2;"), Err(ParseError::ExpectedClosingParen { .. })));
        assert!(matches!(parse("while true {\n x = 1;\n"),
                         Err(ParseError::UnexpectedEndOfInput { line: 2 })));
    }

    #[test]
    fn truncated_input_reports_last_line() {
        let end_line = |source: &str| match parse(source) {
            Err(ParseError::UnexpectedEndOfInput { line }) => line,
            other => panic!("expected end of input for {source:?}, got {other:?}"),
        };

        assert_eq!(end_line("x = 1;\nif x == 1"), 2);
        assert_eq!(end_line("x = 1;\n\nwhile true"), 3);
        assert_eq!(end_line("x = "), 1);
        assert_eq!(end_line("print(1,"), 1);
        assert_eq!(end_line("y = 2;\nx = -"), 2);
        assert_eq!(end_line("for (i = 0;\n i < 3;\n i++)"), 3);
    }

    #[test]
    fn assignment_to_expression_is_rejected() {
        assert!(matches!(parse("x + 1 = 2;"), Err(ParseError::InvalidAssignmentTarget { line: 1 })));
    }

    #[test]
    fn lines_are_recorded() {
        let program = parse("a = 1;\n\nprint(a);").unwrap();
        let lines: Vec<_> = program.statements.iter().map(Statement::line_number).collect();
        assert_eq!(lines, [1, 3]);
    }
}
