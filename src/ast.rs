use std::fmt::{self, Display, Formatter, Write};

/// Indentation used per nesting level when rendering.
const INDENT: &str = "    ";

/// One of the primitive actions a program can ask the actuator to perform.
///
/// Each action maps to exactly one actuator call and consumes exactly one
/// scheduling step. New primitives are added here together with their
/// keyword and actuator method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    /// `move;`
    Move,
    /// `turnL;`
    TurnLeft,
    /// `turnR;`
    TurnRight,
    /// `takeFuel;`
    TakeFuel,
    /// `wait;`
    Wait,
}

impl Action {
    /// Every action, in keyword-table order.
    pub const ALL: [Self; 5] = [Self::Move, Self::TurnLeft, Self::TurnRight, Self::TakeFuel, Self::Wait];

    /// The source keyword that introduces this action.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::TurnLeft => "turnL",
            Self::TurnRight => "turnR",
            Self::TakeFuel => "takeFuel",
            Self::Wait => "wait",
        }
    }

    /// Looks an action up by its source keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.keyword() == keyword)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.keyword())
    }
}

/// A single statement of a program or block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Statement {
    /// A primitive action terminated by `;`.
    Action(Action),
    /// `loop { ... }`: repeats its block unconditionally.
    Loop(Block),
    /// A statement without a child. The parser never produces one;
    /// executing it does nothing.
    #[default]
    Nop,
}

impl Statement {
    /// Number of action nodes in this statement, counted through nested
    /// loops once each.
    #[must_use]
    pub fn action_count(&self) -> usize {
        match self {
            Self::Action(_) => 1,
            Self::Loop(block) => block.action_count(),
            Self::Nop => 0,
        }
    }

    /// Returns `true` if this statement is a loop.
    #[must_use]
    pub const fn contains_loop(&self) -> bool {
        matches!(self, Self::Loop(_))
    }

    fn render(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        match self {
            Self::Action(action) => writeln!(out, "{}{action}", INDENT.repeat(depth)),
            Self::Loop(block) => {
                write!(out, "{}loop ", INDENT.repeat(depth))?;
                block.render(out, depth)?;
                writeln!(out)
            },
            Self::Nop => Ok(()),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.render(&mut rendered, 0)?;
        write!(f, "{}", rendered.trim_end())
    }
}

/// A brace-delimited, non-empty sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    statements: Vec<Statement>,
}

impl Block {
    /// Builds a block, refusing an empty statement list.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Option<Self> {
        if statements.is_empty() {
            None
        } else {
            Some(Self { statements })
        }
    }

    /// The statements of the block, in source order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of action nodes inside the block.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.statements.iter().map(Statement::action_count).sum()
    }

    fn render(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        writeln!(out, "{{")?;
        for statement in &self.statements {
            statement.render(out, depth + 1)?;
        }
        write!(out, "{}}}", INDENT.repeat(depth))
    }
}

/// The root of every parse: the top-level statements of a source file.
///
/// Rendering with `Display` produces source text that parses back into an
/// equal `Program`.
///
/// # Example
/// ```
/// use robodsl::parse_source;
///
/// let program = parse_source("loop{move;turnR;}").unwrap();
/// assert_eq!(program.to_string(), "loop {\n    move;\n    turnR;\n}");
/// assert_eq!(parse_source(&program.to_string()).unwrap(), program);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Wraps a list of top-level statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// The top-level statements, in source order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Returns `true` if the program has no statements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of action nodes in the whole tree.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.statements.iter().map(Statement::action_count).sum()
    }

    /// Returns `true` if any top-level statement is a loop. Loops only nest
    /// inside loops, so this covers the whole tree.
    #[must_use]
    pub fn contains_loop(&self) -> bool {
        self.statements.iter().any(Statement::contains_loop)
    }

    /// Resolves an index path, as reported by
    /// [`Execution::path`](crate::interpreter::evaluator::Execution::path),
    /// to the statement it names.
    ///
    /// The first index selects a top-level statement; each further index
    /// selects a statement inside the block of the loop named so far.
    #[must_use]
    pub fn statement_at(&self, path: &[usize]) -> Option<&Statement> {
        let (first, rest) = path.split_first()?;
        let mut statement = self.statements.get(*first)?;

        for index in rest {
            match statement {
                Statement::Loop(block) => statement = block.statements.get(*index)?,
                _ => return None,
            }
        }

        Some(statement)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for statement in &self.statements {
            statement.render(&mut rendered, 0)?;
        }
        write!(f, "{}", rendered.trim_end())
    }
}
