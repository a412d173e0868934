use std::{fs, io::Cursor};

use mulang::{
    error::{ParseError, RuntimeError},
    interpreter::{
        io::{NoInput, TokenReader},
        value::core::Value,
    },
    run_with,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_fixtures_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mu"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let mut output: Vec<String> = Vec::new();
        if let Err(e) = run_with(&source, &mut output, &mut NoInput) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }

        let expected: Vec<&str> = expected.lines().collect();
        assert_eq!(output, expected, "output of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> (Vec<String>, Result<(), Box<dyn std::error::Error>>) {
    let mut output: Vec<String> = Vec::new();
    let result = run_with(src, &mut output, &mut NoInput).map(|_| ());
    (output, result)
}

fn assert_output(src: &str, expected: &[&str]) {
    let (output, result) = run(src);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, expected);
}

fn assert_failure(src: &str) -> Box<dyn std::error::Error> {
    match run(src).1 {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let error = assert_failure(src);
    match error.downcast::<RuntimeError>() {
        Ok(e) => *e,
        Err(other) => panic!("expected a runtime error, got: {other}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1 + 2; print(x);", &["3"]);
    assert_output("x = 7 * 9; print(x);", &["63"]);
    assert_output("x = 8 - 5; print(x);", &["3"]);
    assert_output("x = 10 / 4; print(x);", &["2.5"]);
    assert_output("x = 10 % 4; print(x);", &["2"]);
    assert_output("print(2 ^ 3 ^ 2);", &["512"]);
    assert_output("print(-2 ^ 2);", &["4"]);
}

#[test]
fn reassignment_overwrites_with_any_kind() {
    assert_output("x = 1; x = \"one\"; print(x);", &["one"]);
    assert_output("x = nil; print(x);", &["nil"]);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_output("print(1 / 0, -1 / 0);", &["inf", "-inf"]);
    assert_output("x = 0 / 0; print(x == x);", &["0"]);
}

#[test]
fn string_concatenation() {
    assert_output(r#"print("a" + "b");"#, &["ab"]);
    assert_output(r#"print("n = " + 5);"#, &["n = 5"]);
    assert_output(r#"print(1 + "y");"#, &["1y"]);
    assert_output(r#"print("v: " + nil);"#, &["v: nil"]);
    assert_output(r#"print("say ""hi""");"#, &["say \"hi\""]);
}

#[test]
fn booleans_print_as_digits() {
    assert_output("print(true, false, 1 < 2, !true);", &["1", "0", "1", "0"]);
}

#[test]
fn equality_is_tolerant_and_kind_strict() {
    assert_output("print(0.1 + 0.2 == 0.3);", &["1"]);
    assert_output("print(1 == 1.001);", &["0"]);
    assert_output(r#"print(1 == "1", nil == nil, "a" != "b");"#, &["0", "1", "1"]);
    assert_output("print(true == true, nil != 0);", &["1", "1"]);
}

#[test]
fn relational_operators() {
    assert_output("print(2 < 3, 3 > 2, 2 <= 2, 3 >= 4);", &["1", "1", "1", "0"]);
}

#[test]
fn if_takes_first_true_branch() {
    let src = "x = 0;
               if x < 0 { print(\"neg\"); }
               else if x == 0 { print(\"zero\"); }
               else if x < 10 { print(\"small\"); }
               else { print(\"big\"); }";
    assert_output(src, &["zero"]);
    assert_output("if false print(1); else print(2);", &["2"]);
    assert_output("if false print(1); else if false print(2); else print(3);", &["3"]);
    assert_output("if false print(1); else if true print(2); else if true print(3); else print(4);",
                  &["2"]);
    assert_output("if false print(1);", &[]);
}

#[test]
fn while_loop_counts() {
    assert_output("i = 0; while i < 3 { print(i); i = i + 1; }", &["0", "1", "2"]);
    assert_output("i = 5; while i < 3 { print(i); }", &[]);
}

#[test]
fn for_loop_runs_init_once() {
    assert_output("for (i = 0; i < 3; i++) print(i); print(i);", &["0", "1", "2", "3"]);
    assert_output("for (i = 10; i < 3; i = i + 1) print(i);", &[]);
    assert_output("s = 0; for (i = 1; i <= 4; i = i + 1) { s = s + i; } print(s);", &["10"]);
}

#[test]
fn increment_and_decrement() {
    assert_output("x = 5; y = x++; print(x, y);", &["6", "5"]);
    assert_output("x = 5; y = ++x; print(x, y);", &["6", "6"]);
    assert_output("x = 5; y = x--; print(x, y);", &["4", "5"]);
    assert_output("x = 5; y = --x; print(x, y);", &["4", "4"]);
}

#[test]
fn blocks_do_not_scope() {
    assert_output("if true { inner = 42; } print(inner);", &["42"]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_output("x = 0; b = false && x++ == 0; print(b, x);", &["0", "1"]);
    assert_output("x = 0; b = true || x++ == 0; print(b, x);", &["1", "1"]);
}

#[test]
fn math_library() {
    assert_output("print(sqrt(16), sin(0), cos(0), exp(0), log(1));", &["4", "0", "1", "1", "0"]);
    assert_output("print(sqrt(-1) == sqrt(-1));", &["0"]);
}

#[test]
fn read_consumes_tokens_in_order() {
    let mut output: Vec<String> = Vec::new();
    let mut input = TokenReader::new(Cursor::new("3 4\n  5\n"));

    let environment = run_with("a = read(); b = read(); c = read(); print(a + b + c);",
                               &mut output,
                               &mut input).unwrap();

    assert_eq!(output, ["12"]);
    assert_eq!(environment.lookup("c"), Some(&Value::Number(5.0)));
}

#[test]
fn read_reports_bad_and_missing_input() {
    let mut output: Vec<String> = Vec::new();
    let mut input = TokenReader::new(Cursor::new("abc"));
    let error = run_with("x = read();", &mut output, &mut input).unwrap_err();
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::InvalidInput { .. })));

    assert!(matches!(runtime_error("x = read();"), RuntimeError::InputExhausted { line: 1 }));
}

#[test]
fn undefined_variable_is_error() {
    assert!(matches!(runtime_error("y = 1;\nprint(x);"),
                     RuntimeError::UndefinedVariable { line: 2, .. }));
    assert!(matches!(runtime_error("x++;"), RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn type_mismatches() {
    assert!(matches!(runtime_error(r#"x = "a" * 2;"#), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("if 1 { print(1); }"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("while nil { }"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("x = !1;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"x = -"a";"#), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"x = "a" < "b";"#), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("x = 1 && true;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"x = sqrt("4");"#), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"s = "a"; s++;"#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn error_stops_execution_but_keeps_earlier_output() {
    let (output, result) = run("print(1);\nprint(2, missing, 3);\nprint(4);");
    assert_eq!(output, ["1", "2"]);
    assert_eq!(result.unwrap_err().to_string(),
               "Error on line 2: No such variable 'missing'.");
}

#[test]
fn parse_errors_run_nothing() {
    let (output, result) = run("print(1);\nprint(2)");
    assert!(output.is_empty());
    let error = result.unwrap_err();
    assert!(error.downcast_ref::<ParseError>().is_some());
}

#[test]
fn unknown_function_is_parse_error() {
    let error = assert_failure("x = tan(1);");
    assert!(matches!(error.downcast_ref::<ParseError>(),
                     Some(ParseError::UnknownFunction { .. })));
}

#[test]
fn comments_are_ignored() {
    assert_output("// nothing\nx = 1; /* block\ncomment */ print(x); // trailing", &["1"]);
}
