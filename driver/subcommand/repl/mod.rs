mod command;
mod history;
mod lispy_helper;
mod syntax;

use std::path;
use std::sync::Arc;

use lispy_interp::reporting::diagnostic_for_io_error;
use lispy_interp::repl::ReplCtx;
use lispy_interp::{emit_diagnostics_to_stderr, SourceLoader};

use crate::subcommand::eval::{eval_source_file, print_value};
use crate::DriverConfig;

use command::{parse_command, ParsedCommand};
use history::repl_history_path;
use lispy_helper::LispyHelper;

const PROMPT: &str = "lispy> ";

fn print_banner() {
    println!("Lispy Version 0.0.0.0.1");
    println!("Press Ctrl+c to Exit");
    println!();
}

/// Evaluates each line of the include file as if it were typed at the prompt
fn eval_include_file(cfg: &DriverConfig, repl_ctx: &ReplCtx, include_path: &path::Path) {
    let source_loader = repl_ctx.source_loader();

    match source_loader.load_path(include_path) {
        Ok(source_file) => {
            eval_source_file(cfg, source_loader, &source_file);
        }
        Err(err) => emit_diagnostics_to_stderr(
            source_loader,
            vec![diagnostic_for_io_error(include_path, &err)],
            cfg.color_choice(),
        ),
    }
}

fn eval_and_print(cfg: &DriverConfig, repl_ctx: &ReplCtx, input: String) {
    match repl_ctx.eval_line(input) {
        Ok(value) => print_value(cfg, &value),
        Err(diagnostics) => {
            emit_diagnostics_to_stderr(repl_ctx.source_loader(), diagnostics, cfg.color_choice())
        }
    }
}

pub fn interactive_loop(cfg: &DriverConfig, include_path: Option<path::PathBuf>) {
    use rustyline::error::ReadlineError;

    // Setup our REPL backend
    let repl_ctx = ReplCtx::new(Arc::new(SourceLoader::new()));

    // Setup Rustyline
    let mut rl = rustyline::Editor::<LispyHelper>::new();
    rl.set_helper(Some(LispyHelper::new(repl_ctx.bound_names(), cfg.colour())));

    let history_path = repl_history_path();
    if let Some(ref history_path) = history_path {
        let _ = rl.load_history(history_path);
    }

    print_banner();

    if let Some(include_path) = include_path {
        eval_include_file(cfg, &repl_ctx, &include_path);
    }

    loop {
        let readline = rl.readline(PROMPT);

        match readline {
            Ok(line) => {
                if !line.chars().all(char::is_whitespace) && rl.add_history_entry(line.clone()) {
                    if let Some(ref history_path) = history_path {
                        let _ = rl.save_history(history_path);
                    }
                }

                match parse_command(line) {
                    ParsedCommand::Eval(input) => eval_and_print(cfg, &repl_ctx, input),
                    ParsedCommand::Quit => {
                        break;
                    }
                    ParsedCommand::Other => {}
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(other) => {
                eprintln!("Readline error: {}", other);
                break;
            }
        }
    }
}
