pub const QUIT_COMMAND: &str = "/quit";
pub const HELP_COMMAND: &str = "/help";

pub enum ParsedCommand {
    Eval(String),
    Quit,
    Other,
}

pub fn parse_command(line: String) -> ParsedCommand {
    match line.trim() {
        HELP_COMMAND => {
            println!("Available REPL commands:");
            println!();
            println!("/help                 Prints this summary");
            println!("/quit                 Exits the REPL");
            println!();
            println!("Any other input is evaluated as an expression.");
            ParsedCommand::Other
        }
        QUIT_COMMAND => ParsedCommand::Quit,
        _ => ParsedCommand::Eval(line),
    }
}
