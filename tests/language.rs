use std::{fs, path::PathBuf};

use robodsl::{
    ast::{Action, Statement},
    error::{LoadError, ParseError},
    interpreter::parser::utils::MAX_NESTING,
    parse_file, parse_source,
};
use walkdir::WalkDir;

fn sources_in(dir: &str) -> Vec<(PathBuf, String)> {
    let sources: Vec<_> =
        WalkDir::new(dir).into_iter()
                         .filter_map(Result::ok)
                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "robot"))
                         .map(|e| {
                             let path = e.path().to_path_buf();
                             let source = fs::read_to_string(&path).unwrap_or_else(|e| {
                                                                      panic!("Failed to read {path:?}: {e}")
                                                                  });
                             (path, source)
                         })
                         .collect();

    assert!(!sources.is_empty(), "No programs found in {dir}");

    sources
}

fn assert_parse_error(src: &str) -> ParseError {
    match parse_source(src) {
        Ok(program) => panic!("Program parsed but was expected to fail:\n{program}"),
        Err(e) => e,
    }
}

#[test]
fn valid_programs_parse_and_round_trip() {
    for (path, source) in sources_in("programs/valid") {
        let program = parse_source(&source).unwrap_or_else(|e| panic!("{path:?} failed:\n{e}"));
        let rendered = program.to_string();
        let reparsed = parse_source(&rendered).unwrap_or_else(|e| {
                                                  panic!("Rendering of {path:?} failed to parse:\n{rendered}\nError: {e}")
                                              });

        assert_eq!(reparsed, program, "{path:?} did not survive a round trip");
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn invalid_programs_fail() {
    for (path, source) in sources_in("programs/invalid") {
        assert!(parse_source(&source).is_err(), "{path:?} parsed but should not");
    }
}

#[test]
fn sequence_of_actions() {
    let program = parse_source("move; turnL; wait;").unwrap();

    assert_eq!(program.statements(),
               &[Statement::Action(Action::Move),
                 Statement::Action(Action::TurnLeft),
                 Statement::Action(Action::Wait)]);
}

#[test]
fn loop_wraps_block() {
    let program = parse_source("loop { move; turnR; }").unwrap();

    let [Statement::Loop(block)] = program.statements() else {
        panic!("expected a single loop, got {program:?}");
    };
    assert_eq!(block.statements(),
               &[Statement::Action(Action::Move), Statement::Action(Action::TurnRight)]);
}

#[test]
fn all_actions_are_recognised() {
    let program = parse_source("move; turnL; turnR; takeFuel; wait;").unwrap();
    let actions: Vec<_> = program.statements()
                                 .iter()
                                 .map(|statement| match statement {
                                     Statement::Action(action) => *action,
                                     other => panic!("unexpected {other:?}"),
                                 })
                                 .collect();

    assert_eq!(actions, Action::ALL);

    for action in Action::ALL {
        assert_eq!(Action::from_keyword(action.keyword()), Some(action));
    }
    assert_eq!(Action::from_keyword("jump"), None);
}

#[test]
fn empty_source_is_empty_program() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source(" \n\t ").unwrap().is_empty());
}

#[test]
fn punctuation_needs_no_whitespace() {
    let spaced = parse_source("loop { move ; turnL ; }").unwrap();
    let packed = parse_source("loop{move;turnL;}").unwrap();

    assert_eq!(spaced, packed);
}

#[test]
fn empty_block_is_error() {
    assert!(matches!(assert_parse_error("loop { }"), ParseError::EmptyBlock { .. }));
    assert!(matches!(assert_parse_error("loop {}"), ParseError::EmptyBlock { .. }));
    assert!(matches!(assert_parse_error("move; loop { move; loop { } }"), ParseError::EmptyBlock { .. }));
}

#[test]
fn missing_semicolon_is_error() {
    match assert_parse_error("move") {
        ParseError::Missing { expected, context, .. } => {
            assert_eq!(expected, "';'");
            assert_eq!(context, "");
        },
        other => panic!("unexpected error {other:?}"),
    }

    match assert_parse_error("move turnL;") {
        ParseError::Missing { expected, context, .. } => {
            assert_eq!(expected, "';'");
            assert_eq!(context, "turnL ;");
        },
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unknown_statement_is_error() {
    assert!(matches!(assert_parse_error("foo;"), ParseError::InvalidStatement { .. }));
    assert!(matches!(assert_parse_error("move; 42;"), ParseError::InvalidStatement { .. }));
    assert!(matches!(assert_parse_error("}"), ParseError::InvalidStatement { .. }));
    assert!(matches!(assert_parse_error("loopy { move; }"), ParseError::InvalidStatement { .. }));
}

#[test]
fn missing_braces_are_errors() {
    match assert_parse_error("loop move;") {
        ParseError::Missing { expected, .. } => assert_eq!(expected, "'{'"),
        other => panic!("unexpected error {other:?}"),
    }
    match assert_parse_error("loop { move;") {
        ParseError::Missing { expected, .. } => assert_eq!(expected, "'}'"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn error_context_is_limited_to_five_tokens() {
    let error = assert_parse_error("move; bogus move ; turnL ; wait ;");

    assert_eq!(error.context(), "bogus move ; turnL ;");
}

#[test]
fn error_reports_line() {
    let error = assert_parse_error("move;\nturnL;\nturnR\n");

    assert!(matches!(error, ParseError::Missing { .. }));
    assert_eq!(error.line(), 3);
    assert!(error.to_string().starts_with("Error on line 3: missing ';'"),
            "unexpected message: {error}");
}

fn nested(depth: usize) -> String {
    format!("{}move;{}", "loop {".repeat(depth), "}".repeat(depth))
}

#[test]
fn nesting_up_to_limit_parses() {
    let program = parse_source(&nested(MAX_NESTING)).unwrap();

    let mut path = vec![0; MAX_NESTING + 1];
    assert_eq!(program.statement_at(&path), Some(&Statement::Action(Action::Move)));
    path.push(0);
    assert_eq!(program.statement_at(&path), None);
}

#[test]
fn nesting_past_limit_is_error() {
    match assert_parse_error(&nested(MAX_NESTING + 1)) {
        ParseError::TooDeep { limit, line, .. } => {
            assert_eq!(limit, MAX_NESTING);
            assert_eq!(line, 1);
        },
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn runaway_nesting_fails_instead_of_overflowing() {
    let error = assert_parse_error(&"loop {".repeat(100_000));

    assert!(matches!(error, ParseError::TooDeep { .. }));
    assert_eq!(error.context(), "loop { loop { loop");
    assert!(error.to_string().contains("nested deeper than"), "unexpected message: {error}");
}

#[test]
fn rendering_mirrors_structure() {
    let program = parse_source("wait; loop { move; loop { turnL; } }").unwrap();

    assert_eq!(program.to_string(),
               "wait;\nloop {\n    move;\n    loop {\n        turnL;\n    }\n}");
}

#[test]
fn statement_paths_resolve() {
    let program = parse_source("wait; loop { move; loop { turnL; } }").unwrap();

    assert_eq!(program.statement_at(&[0]), Some(&Statement::Action(Action::Wait)));
    assert_eq!(program.statement_at(&[1, 0]), Some(&Statement::Action(Action::Move)));
    assert_eq!(program.statement_at(&[1, 1, 0]), Some(&Statement::Action(Action::TurnLeft)));
    assert_eq!(program.statement_at(&[0, 0]), None);
    assert_eq!(program.statement_at(&[2]), None);
    assert_eq!(program.statement_at(&[]), None);
}

#[test]
fn counts_actions_and_loops() {
    let program = parse_source("wait; loop { move; loop { turnL; } }").unwrap();

    assert_eq!(program.action_count(), 3);
    assert!(program.contains_loop());
    assert!(!parse_source("move; wait;").unwrap().contains_loop());
}

#[test]
fn example_file_parses() {
    let program = parse_file("tests/example.robot").unwrap();

    assert_eq!(program.statements().len(), 4);
}

#[test]
fn missing_file_is_distinct_from_parse_error() {
    assert!(matches!(parse_file("programs/does-not-exist.robot"), Err(LoadError::NotFound { .. })));
    assert!(matches!(parse_file("programs/invalid/empty_loop.robot"),
                     Err(LoadError::Parse(ParseError::EmptyBlock { .. }))));
}
