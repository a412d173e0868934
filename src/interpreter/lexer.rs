use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. The surrounding quotes are removed and a doubled
    /// quote `""` stands for one embedded quote.
    #[regex(r#""([^"]|"")*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `nil`
    #[token("nil")]
    Nil,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x`, and library function
    /// names such as `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    MultiLineComment,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits `source` into tokens, each paired with the line it starts on.
///
/// # Errors
/// `ParseError::LexError` for the first slice of input that matches no token.
///
/// # Example
/// ```
/// use mulang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;\nprint(x);").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[4], (Token::Print, 2));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        // Strings may span lines; report them on the line they opened on.
        let line = lexer.extras.line;
        match token {
            Ok(Token::Str(text)) => {
                let opened_on = line - text.matches('\n').count();
                tokens.push((Token::Str(text), opened_on));
            },
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                return Err(ParseError::LexError { slice: lexer.slice().to_string(),
                                                  line });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the quotes of a string literal and collapses doubled quotes.
///
/// Newlines inside the literal advance the line counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].replace("\"\"", "\"")
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn numbers_in_every_form() {
        assert_eq!(kinds("42 3.5 .25 2. 1e3"),
                   vec![Token::Number(42.0),
                        Token::Number(3.5),
                        Token::Number(0.25),
                        Token::Number(2.0),
                        Token::Number(1000.0)]);
    }

    #[test]
    fn doubled_quotes_unescape() {
        assert_eq!(kinds(r#""say ""hi""""#), vec![Token::Str("say \"hi\"".to_string())]);
        assert_eq!(kinds(r#""""#), vec![Token::Str(String::new())]);
    }

    #[test]
    fn keywords_beat_identifiers() {
        assert_eq!(kinds("while whiles nil sqrt"),
                   vec![Token::While,
                        Token::Identifier("whiles".to_string()),
                        Token::Nil,
                        Token::Identifier("sqrt".to_string())]);
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("x++ <= != && || --y"),
                   vec![Token::Identifier("x".to_string()),
                        Token::PlusPlus,
                        Token::LessEqual,
                        Token::BangEqual,
                        Token::AndAnd,
                        Token::OrOr,
                        Token::MinusMinus,
                        Token::Identifier("y".to_string())]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("a // one\n/* two\nthree */ b\n\"x\ny\" c").unwrap();
        let lines = tokens.iter().map(|(_, line)| *line).collect::<Vec<_>>();
        assert_eq!(lines, vec![1, 3, 4, 5]);
    }

    #[test]
    fn block_comment_may_end_in_stars() {
        assert_eq!(kinds("/** doc **/ x /* a * b */"),
                   vec![Token::Identifier("x".to_string())]);
    }

    #[test]
    fn unknown_character_is_reported() {
        match tokenize("x = 1;\ny = @;") {
            Err(ParseError::LexError { slice, line }) => {
                assert_eq!(slice, "@");
                assert_eq!(line, 2);
            },
            other => panic!("expected a lex error, got {other:?}"),
        }
    }
}
