use proptest::prelude::*;
use robodsl::{
    ast::{Action, Block, Program, Statement},
    parse_source,
};

fn action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

/// Statements nested at most four loops deep, every block non-empty.
fn statement() -> impl Strategy<Value = Statement> {
    action().prop_map(Statement::Action).prop_recursive(4, 48, 4, |inner| {
                                                 prop::collection::vec(inner, 1..4).prop_map(|statements| {
                                                     Statement::Loop(Block::new(statements).expect("non-empty block"))
                                                 })
                                             })
}

fn program() -> impl Strategy<Value = Program> {
    prop::collection::vec(statement(), 0..6).prop_map(Program::new)
}

proptest! {
    #[test]
    fn rendered_program_parses_back(program in program()) {
        let rendered = program.to_string();
        let reparsed = parse_source(&rendered);

        prop_assert_eq!(reparsed, Ok(program), "rendering:\n{}", rendered);
    }

    #[test]
    fn layout_does_not_change_the_tree(program in program(),
                                       separator in prop::sample::select(vec![" ", "\n", "\t", " \n\t "])) {
        let rendered = program.to_string();
        let relaid = rendered.split_whitespace().collect::<Vec<_>>().join(separator);

        prop_assert_eq!(parse_source(&relaid), Ok(program));
    }
}
