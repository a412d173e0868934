use std::{fs, io, process::ExitCode};

use clap::Parser;
use mulang::{
    get_result,
    interpreter::{
        environment::Environment,
        io::{LineWriter, TokenReader},
    },
    parse_program, run_with,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Runs Mu programs: numbers, strings, C-style loops and a few math
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path to a script file instead of script text.
    #[arg(short, long)]
    file: bool,

    /// Log evaluator activity to stderr. Repeat for more detail (-vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the parsed syntax tree to stderr before running.
    #[arg(long)]
    dump_ast: bool,

    /// Print every variable binding to stderr after a successful run.
    #[arg(long)]
    dump_env: bool,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

/// Prints each binding as `name = value`, sorted by name.
fn dump_environment(environment: &Environment) {
    let mut bindings: Vec<_> = environment.iter().collect();
    bindings.sort_by_key(|(name, _)| *name);
    for (name, value) in bindings {
        eprintln!("{name} = {value}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.dump_ast {
        match parse_program(&script) {
            Ok(program) => eprintln!("{program:#?}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let result = if args.dump_env {
        let mut output = LineWriter::new(io::stdout().lock());
        let mut input = TokenReader::new(io::stdin().lock());
        run_with(&script, &mut output, &mut input).map(|environment| dump_environment(&environment))
    } else {
        get_result(&script)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
