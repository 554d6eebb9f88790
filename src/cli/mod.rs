//! Command-line front end for the demonstration report.

pub mod demo;
pub mod output;

use std::io::Write;

use crate::config::ConfigManager;
use crate::core::services::FinanceAnalytics;
use crate::errors::FinanceResult;
use crate::utils::build_info;

pub use output::{render_report, ReportStyle};

/// Parsed command-line request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Report { json: bool },
    Version,
    Help,
}

pub fn usage() -> &'static str {
    "Usage: finance_demo [--json | --version | --help]"
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut command = Command::Report { json: false };
    for arg in args {
        command = match arg.as_ref() {
            "--json" => Command::Report { json: true },
            "--version" | "-V" => Command::Version,
            "--help" | "-h" => Command::Help,
            other => return Err(format!("unrecognized argument `{other}`")),
        };
    }
    Ok(command)
}

/// Executes `command`, writing the result to `out`.
pub fn run<W: Write>(command: Command, out: &mut W, color: bool) -> FinanceResult<()> {
    match command {
        Command::Help => writeln!(out, "{}", usage())?,
        Command::Version => writeln!(out, "{}", build_info::current())?,
        Command::Report { json } => {
            let config = ConfigManager::new().load()?;
            let account = demo::build_demo_account()?;
            let summary = FinanceAnalytics::summarize(&account);
            if json {
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)?;
            } else {
                let style = ReportStyle {
                    currency: config.currency_code(),
                    locale: config.locale_config(),
                    color,
                };
                writeln!(out, "{}", render_report(&summary, &style))?;
            }
        }
    }
    Ok(())
}
