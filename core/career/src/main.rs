mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use adapter::TerminalView;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::CareerCommand;
use ports::inbound::UseCaseRunner;
use std::process;
use wiring::{wire_career, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            CareerCommand::Help => {
                print_help();
                Ok(0)
            }
            CareerCommand::Chat {
                model,
                timeout_secs,
            } => self
                .app
                .career_use_case
                .run_chat(TerminalView::stdio(), model, timeout_secs),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &CareerCommand) -> &'static str {
    match cmd {
        CareerCommand::Help => "help",
        CareerCommand::Chat { .. } => "chat",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("career: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_career(config.verbose)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: career [options]");
}

fn print_help() {
    println!("Usage: career [options]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -m, --model <model>           Gemini model name. Default: config.json \"model\", or gemini-2.0-flash");
    println!("      --timeout <secs>          HTTP timeout in seconds (1-3600). Default: config.json \"timeout_secs\", or 60");
    println!("  -v, --verbose                 Echo structured logs to stderr (for troubleshooting)");
    println!("      --generate <shell>        Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY  API key for the Gemini API. If unset, ./.env and then $CAREER_HOME/secrets.json are checked.");
    println!("  CAREER_HOME     Home directory for config.json, secrets.json and logs/career.jsonl.");
    println!("                  If unset, $XDG_CONFIG_HOME/career-guide (e.g. ~/.config/career-guide) is used.");
    println!();
    println!("Description:");
    println!("  Describe your skills, interests, and education background, one message per line.");
    println!("  Each message is answered with 10 suggested career paths. Press Ctrl-D to quit.");
}
