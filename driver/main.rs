#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

mod subcommand;

use std::sync::Once;
use std::{path, process};

use termcolor::ColorChoice;

static TRACING_INIT: Once = Once::new();

pub struct DriverConfig {
    colour: bool,
}

impl DriverConfig {
    pub fn colour(&self) -> bool {
        self.colour
    }

    /// Colour choice for diagnostics written to stderr
    pub fn color_choice(&self) -> ColorChoice {
        if self.colour {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

/// Installs a stderr log subscriber when `RUST_LOG` is set
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn include_arg<'a, 'b>() -> clap::Arg<'a, 'b> {
    clap::Arg::with_name("INCLUDE")
        .short("i")
        .long("include")
        .value_name("FILE")
        .help("file to evaluate before starting REPL")
}

fn main() {
    use clap::{crate_version, App, Arg, SubCommand};

    init_tracing();

    let matches = App::new("lispy")
        .version(crate_version!())
        .about("Interpreter and REPL for a minimal Lisp")
        .arg(
            Arg::with_name("NOCOLOR")
                .long("no-color")
                .takes_value(false)
                .global(true)
                .help("Disable coloured output"),
        )
        .arg(include_arg())
        .subcommand(
            SubCommand::with_name("eval")
                .about("Evaluates each line of a file and prints the results")
                .arg(
                    Arg::with_name("INPUT")
                        .help("Input source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("repl")
                .about("Starts an interactive REPL")
                .arg(include_arg()),
        )
        .get_matches();

    let no_colour = matches.is_present("NOCOLOR")
        || matches
            .subcommand()
            .1
            .map_or(false, |sub_matches| sub_matches.is_present("NOCOLOR"));

    let cfg = DriverConfig { colour: !no_colour };

    if let Some(eval_matches) = matches.subcommand_matches("eval") {
        let input_param = eval_matches.value_of("INPUT").unwrap_or_default();
        let input_path = path::Path::new(input_param);

        if !subcommand::eval::eval_input_file(&cfg, input_path) {
            process::exit(2);
        }
    } else {
        let include_param = matches
            .subcommand_matches("repl")
            .and_then(|repl_matches| repl_matches.value_of("INCLUDE"))
            .or_else(|| matches.value_of("INCLUDE"));

        let include_path =
            include_param.map(|include_param| path::Path::new(include_param).to_owned());

        subcommand::repl::interactive_loop(&cfg, include_path);
    }
}
