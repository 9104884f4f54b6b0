use ether::{
    Error, Session, get_result,
    interpreter::{lexer::Dialect, value::Value},
    repl,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn output_of(lines: &[&str]) -> Option<String> {
    get_result(lines).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_prints(lines: &[&str], expected: &str) {
    assert_eq!(output_of(lines).as_deref(), Some(expected));
}

fn assert_failure(lines: &[&str]) -> Error {
    match get_result(lines) {
        Ok(output) => panic!("Script succeeded with {output:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn repl_transcript(dialect: Dialect, input: &str) -> (String, String) {
    let mut session = Session::new(dialect);
    let mut out = Vec::new();
    let mut err = Vec::new();
    repl::run(&mut session, input.as_bytes(), &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn precedence_and_unary_minus() {
    assert_prints(&["2+3*4"], "14");
    assert_prints(&["-2*3"], "-6");
    assert_prints(&["2*-3"], "-6");
    assert_prints(&["10 - 4 - 3"], "3");
    assert_prints(&["100 / 10 / 5"], "2");
    assert_prints(&["- - 7"], "7");
}

#[test]
fn parentheses_are_not_part_of_the_grammar() {
    assert_eq!(assert_failure(&["(2+3)"]).code(), 3);
}

#[test]
fn assignment_is_silent_and_bare_expressions_echo() {
    assert_eq!(output_of(&["x = 5"]), None);
    assert_prints(&["x = 5", "x"], "5");
    assert_prints(&["x = 5", "y = x * 2 - 1", "y"], "9");
}

#[test]
fn assignment_is_idempotent() {
    let mut session = Session::new(Dialect::Base);
    session.run_line("x = 5");
    session.run_line("x = 5");

    assert_eq!(session.environment().len(), 1);
    assert_eq!(session.environment().get_variable("x"), Some(&Value::Integer(5)));
    assert_eq!(session.run_line("x").output().as_deref(), Some("5"));
}

#[test]
fn strings_round_trip_with_their_quotes() {
    assert_prints(&[r#"s = "hi""#, "s"], "\"hi\"");
    assert_prints(&[r#"s = "hello world""#, "t = s", "t"], "\"hello world\"");
    assert_eq!(assert_failure(&[r#""hi""#]).code(), 6);
    assert_eq!(assert_failure(&[r#"s = "a""#, "s + 1"]).code(), 10);
}

#[test]
fn empty_line_changes_nothing() {
    let mut session = Session::new(Dialect::Base);
    for line in ["", "   ", "\t", "// a comment"] {
        let report = session.run_line(line);
        assert!(report.is_clean());
        assert_eq!(report.output(), None);
    }
    assert!(session.environment().is_empty());
}

#[test]
fn undefined_symbol() {
    let e = assert_failure(&["nope"]);
    assert_eq!(e.code(), 1);
    assert_eq!(e.to_string(), "Error 1 on line 1: Undefined symbol 'nope' found.");
}

#[test]
fn division_by_zero_keeps_prior_bindings() {
    let mut session = Session::new(Dialect::Base);
    session.run_line("x = 3");

    let report = session.run_line("x = x / 0");
    assert_eq!(report.result.as_ref().map_err(Error::code), Err(2));
    assert_eq!(session.environment().get_variable("x"), Some(&Value::Integer(3)));
}

#[test]
fn reserved_names_cannot_be_assigned_and_still_dispatch() {
    let mut session = Session::new(Dialect::Base);

    let report = session.run_line("help = 5");
    assert_eq!(report.result.as_ref().map_err(Error::code), Err(7));
    assert!(session.environment().is_empty());

    let help = session.run_line("help").output().unwrap();
    assert!(help.starts_with("Available commands"));
    let credits = session.run_line("credits").output().unwrap();
    assert!(credits.contains("Ether"));

    assert_eq!(assert_failure(&["help + 1"]).code(), 12);
}

#[test]
fn lexical_errors_do_not_stop_the_line() {
    let mut session = Session::new(Dialect::Base);
    let report = session.run_line("1 + $2");

    assert_eq!(report.output().as_deref(), Some("3"));
    assert_eq!(report.diagnostics(),
               vec!["Error 8 on line 1: Illegal character '$' at column 5.".to_string()]);
}

#[test]
fn diagnostics_use_the_session_line_number() {
    let mut session = Session::new(Dialect::Base);
    session.run_line("a = 1");
    session.run_line("b = 2");
    let report = session.run_line("c");

    assert_eq!(report.diagnostics(),
               vec!["Error 1 on line 3: Undefined symbol 'c' found.".to_string()]);
}

#[test]
fn overflow_is_reported() {
    assert_eq!(assert_failure(&["9223372036854775807 + 1"]).code(), 11);
    assert_eq!(assert_failure(&["99999999999999999999"]).code(), 9);
}

#[test]
fn long_operator_chains_evaluate() {
    let mut session = Session::new(Dialect::Base);

    let report = session.run_line(&format!("x = {}1", "-".repeat(200_000)));
    assert!(report.is_clean());
    assert_eq!(session.run_line("x").output().as_deref(), Some("1"));

    let odd = session.run_line(&format!("{}7", "-".repeat(200_001)));
    assert_eq!(odd.output().as_deref(), Some("-7"));

    let sum = vec!["1"; 200_000].join("+");
    assert_eq!(session.run_line(&sum).output().as_deref(), Some("200000"));

    let failing = session.run_line(&format!("x = {}nope", "-".repeat(200_000)));
    assert_eq!(failing.result.map_err(|e| e.code()), Err(1));
    assert_eq!(session.environment().get_variable("x"), Some(&Value::Integer(1)));
}

#[test]
fn repl_survives_a_long_minus_run() {
    let input = format!("y = {}5\ny\n", "-".repeat(200_000));
    let (out, err) = repl_transcript(Dialect::Base, &input);

    assert_eq!(out, "Ether> Ether> 5\nEther> \n");
    assert!(err.is_empty());
}

#[test]
fn extended_dialect() {
    let mut session = Session::new(Dialect::Extended);
    session.run_line("имя = 'привет'");
    assert_eq!(session.run_line("имя").output().as_deref(), Some("'привет'"));

    let mut base = Session::new(Dialect::Base);
    assert!(!base.run_line("имя = 1").is_clean());
}

#[test]
fn repl_stops_at_exit_and_reports_errors() {
    let (out, err) = repl_transcript(Dialect::Base, "a = 2\na * 21\nb\n  exit()  \na\n");

    assert_eq!(out, "Ether> Ether> 42\nEther> Ether> ");
    assert_eq!(err, "Error 1 on line 3: Undefined symbol 'b' found.\n");
}

#[test]
fn repl_stops_at_end_of_input() {
    let (out, err) = repl_transcript(Dialect::Base, "s = \"x\"\ns");

    assert_eq!(out, "Ether> Ether> \"x\"\nEther> \n");
    assert!(err.is_empty());
}

proptest! {
    #[test]
    fn division_truncates(a in (i64::MIN + 1)..=i64::MAX, b in (i64::MIN + 1)..=i64::MAX) {
        prop_assume!(b != 0);
        let expected = (a / b).to_string();
        prop_assert_eq!(output_of(&[format!("{a}/{b}").as_str()]), Some(expected));
    }

    #[test]
    fn division_by_zero_is_an_error(a in (i64::MIN + 1)..=i64::MAX) {
        let mut session = Session::new(Dialect::Base);
        session.run_line(&format!("x = {a}"));

        let report = session.run_line(&format!("x = {a}/0"));
        prop_assert_eq!(report.result.map_err(|e| e.code()), Err(2));
        prop_assert_eq!(session.environment().get_variable("x"), Some(&Value::Integer(a)));
    }

    #[test]
    fn unbound_names_are_undefined(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        prop_assume!(name != "help" && name != "credits");
        prop_assert_eq!(assert_failure(&[name.as_str()]).code(), 1);
    }

    #[test]
    fn repeated_assignment_keeps_one_binding(value in 0..i64::MAX) {
        let mut session = Session::new(Dialect::Base);
        session.run_line(&format!("x = {value}"));
        session.run_line(&format!("x = {value}"));

        prop_assert_eq!(session.environment().len(), 1);
        let printed = session.run_line("x").output();
        prop_assert_eq!(printed, Some(value.to_string()));
    }
}
