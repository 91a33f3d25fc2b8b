//! Demonstration REPL: registers a handful of sample commands against
//! `termline_terminal::Terminal` and dispatches on the response it returns.
//!
//! Not part of the library's public contract — an embedding application
//! would build its own command table and its own dispatch — but it is the
//! executable proof that the prompt, validator, history and help pieces
//! compose into a working read-eval-print loop.

use anyhow::Result;
use termline_terminal::Terminal;
use termline_types::{Command, Param, ParamModifier, ParamType, ResponseType};

fn main() -> Result<()> {
    init_tracing();

    let commands = vec![
        Command::new("ping")
            .with_description("Ping a host a number of times")
            .with_param(Param::new("-c", ParamType::Number).with_description("Number of pings to send"))
            .with_param(
                Param::new("host", ParamType::Text)
                    .with_description("Host to ping")
                    .with_modifier(ParamModifier::DEFAULT | ParamModifier::REQUIRED),
            ),
        Command::new("echo")
            .with_description("Print the given text back to the terminal")
            .with_param(
                Param::new("text", ParamType::Text)
                    .with_description("Text to print")
                    .with_modifier(ParamModifier::DEFAULT),
            ),
        Command::new("history").with_description("Show previously submitted commands"),
        Command::new("help").with_description("List the available commands").hidden(),
        Command::new("exit").with_description("Exit the terminal"),
    ];

    let mut terminal = Terminal::new(commands).with_bypass_character("!").with_ctrl_keys(vec![]);

    terminal.print_info("termline demo — try `ping example.com`, `echo hi`, `ping?`, or `exit`.");

    loop {
        let response = terminal.get(&[]);
        match response.response_type {
            ResponseType::Cmd => match response.command.as_str() {
                "ping" => run_ping(&terminal, &response),
                "echo" => run_echo(&terminal, &response),
                "history" => terminal.print_history(0),
                "help" => list_commands(&terminal),
                "exit" => {
                    terminal.print_success("bye");
                    break;
                }
                other => terminal.print_warning(&format!("unhandled command: {other}")),
            },
            ResponseType::OsCmd => {
                tracing::debug!(raw = %response.raw_input, "shell bypass executed");
            }
            ResponseType::CtrlKey => {
                terminal.print_info(&format!("ctrl key {} pressed", response.ctrl_key));
            }
            ResponseType::CmdHelp => {}
            ResponseType::CmdError | ResponseType::ParamError => {
                terminal.print_error(response.error.as_deref().unwrap_or("unknown error"));
            }
            ResponseType::ExecutionError => {
                terminal.print_error(response.error.as_deref().unwrap_or("terminal I/O failure"));
                break;
            }
        }
    }

    Ok(())
}

fn run_ping(terminal: &Terminal, response: &termline_types::Response) {
    let host = response.params.get("host").map(|v| v.to_string()).unwrap_or_default();
    let count = response.params.get("-c").and_then(|v| v.as_i64()).unwrap_or(1);
    terminal.print_info(&format!("pinging {host} {count} time(s)..."));
}

fn run_echo(terminal: &Terminal, response: &termline_types::Response) {
    let text = response.params.get("text").map(|v| v.to_string()).unwrap_or_default();
    terminal.print_text(&format!("{text}\n"));
}

fn list_commands(terminal: &Terminal) {
    for command in terminal.commands.iter().filter(|c| !c.hidden) {
        terminal.print_info(&format!("  {:<10} {}", command.name, command.description));
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
