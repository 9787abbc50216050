use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use log::info;
use robodsl::{
    ast::Program,
    error::LoadError,
    interpreter::{
        actuator::{FuelTank, Recorder},
        evaluator::{Execution, Step},
    },
    parse_file,
};

/// robodsl parses and runs robot control programs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parses a program and prints it back in canonical form.
    Parse {
        /// Path to the program source.
        file: PathBuf,
    },
    /// Parses a program and steps it against a recording robot, printing
    /// every action.
    Run {
        /// Path to the program source.
        file: PathBuf,

        /// Maximum number of actions to perform.
        #[arg(short, long, default_value_t = 100)]
        steps: usize,

        /// Give the robot a fuel tank of this size. Each move burns one unit
        /// and `takeFuel` refills it.
        #[arg(short, long)]
        fuel: Option<u32>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Parse { file } => match load(&file) {
            Ok(program) => {
                println!("{program}");
                ExitCode::SUCCESS
            },
            Err(code) => code,
        },
        Command::Run { file, steps, fuel } => {
            let program = match load(&file) {
                Ok(program) => program,
                Err(code) => return code,
            };

            let mut robot = fuel.map_or_else(Recorder::new, |capacity| Recorder::with_fuel(FuelTank::full(capacity)));
            let mut execution = Execution::new(&program);

            for _ in 0..steps {
                match execution.step(&mut robot) {
                    Ok(Step::Performed(action)) => println!("{:>5}  {}", execution.steps(), action.keyword()),
                    Ok(Step::Finished) => break,
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::from(3);
                    },
                }
            }

            info!("performed {} actions, finished: {}", execution.steps(), execution.is_finished());

            ExitCode::SUCCESS
        },
    }
}

/// Loads a program, reporting a missing file and a syntax error with
/// different exit codes.
fn load(file: &Path) -> Result<Program, ExitCode> {
    parse_file(file).map_err(|e| {
                        eprintln!("{e}");
                        match e {
                            LoadError::Parse(_) => ExitCode::FAILURE,
                            LoadError::NotFound { .. } | LoadError::Io { .. } => ExitCode::from(2),
                        }
                    })
}
