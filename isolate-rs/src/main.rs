mod error;

use error::{report_to_stderr, AmbiguousTarget};
use isolate_error::Error;
use isolate_math::{find_vars_in_expr, simplify, solve_for, Expr};
use isolate_parser::parser::{stmt::Stmt, Parser};
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, ops::Range, process::ExitCode};

/// Isolates `target` in `lhs = rhs` and renders the result as `target = value`.
fn isolate(target: &str, lhs: Expr, rhs: Expr, span: Range<usize>) -> Result<String, Error> {
    let value = solve_for(target, &lhs, &rhs).map_err(|err| err.into_error(span))?;
    Ok(format!("{} = {}", target, value))
}

/// Parses and executes a single line of input, returning the text to print.
fn execute(input: &str) -> Result<String, Error> {
    let stmt = Parser::new(input).try_parse_full::<Stmt>()?;
    debug!("parsed statement: {:?}", stmt);

    match stmt {
        Stmt::Solve(solve) => {
            let lhs = Expr::from(solve.equation.lhs);
            let rhs = Expr::from(solve.equation.rhs);
            isolate(&solve.target.name, lhs, rhs, solve.equation.span)
        },
        Stmt::Equation(equation) => {
            let lhs = Expr::from(equation.lhs);
            let rhs = Expr::from(equation.rhs);

            let mut candidates = find_vars_in_expr(&lhs)
                .into_iter()
                .chain(find_vars_in_expr(&rhs))
                .collect::<Vec<_>>();
            candidates.sort();
            candidates.dedup();

            if let [target] = candidates.as_slice() {
                return isolate(target, lhs, rhs, equation.span);
            }
            Err(Error::new(vec![equation.span], AmbiguousTarget { candidates }))
        },
        Stmt::Expr(expr) => Ok(simplify(&Expr::from(expr)).to_string()),
    }
}

/// Executes every non-blank line of the input, printing results and reporting errors. Returns
/// `true` if every line succeeded.
fn execute_lines(input: &str) -> bool {
    let mut ok = true;
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        match execute(line) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                report_to_stderr(&err, line);
                ok = false;
            },
        }
    }
    ok
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run each line of the file
        let input = match fs::read_to_string(&filename) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                return ExitCode::FAILURE;
            },
        };

        if execute_lines(&input) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    } else if !io::stdin().is_terminal() {
        // run each line piped through stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }

        if execute_lines(&input) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            match execute(&input) {
                Ok(output) => println!("{}", output),
                Err(err) => report_to_stderr(&err, &input),
            }
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }

        ExitCode::SUCCESS
    }
}
