use clap::{Arg, ArgAction, Command};

use crate::internal::config::LoggerConfig;
use crate::internal::logger::Severity;

const SEVERITY_VALUES: [&str; 5] = ["debug", "info", "warning", "error", "none"];

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("tint-log")
        .version(version)
        .about("Leveled, colored console logger demo")
        .arg(
            Arg::new("min-severity")
                .long("min-severity")
                .value_parser(SEVERITY_VALUES)
                .help("Lowest severity that is printed (overrides TINT_LOG_MIN_SEVERITY)"),
        )
        .arg(
            Arg::new("stack-buffer-bytes")
                .long("stack-buffer-bytes")
                .value_parser(clap::value_parser!(usize))
                .help("Size of the stack buffer messages are rendered into before spilling to the heap"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Print without ANSI color codes"),
        )
        .arg(
            Arg::new("severity")
                .long("severity")
                .short('s')
                .value_parser(["debug", "info", "warning", "error"])
                .default_value("info")
                .help("Severity of MESSAGE"),
        )
        .arg(
            Arg::new("message")
                .num_args(1..)
                .help("Message to log; without it the demo sequence is printed"),
        )
}

/// Environment configuration with command-line overrides applied.
pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<LoggerConfig> {
    let mut config = LoggerConfig::load()?;

    if let Some(min_severity) = matches.get_one::<String>("min-severity") {
        config.min_severity = min_severity.parse::<Severity>()?;
    }

    if let Some(bytes) = matches.get_one::<usize>("stack-buffer-bytes") {
        config.stack_buffer_bytes = *bytes;
    }

    if matches.get_flag("no-color") {
        config.color = false;
    }

    config.validate()?;
    Ok(config)
}

/// The single message requested on the command line, if any.
pub fn parse_message(matches: &clap::ArgMatches) -> anyhow::Result<Option<(Severity, String)>> {
    let Some(words) = matches.get_many::<String>("message") else {
        return Ok(None);
    };
    let message = words.map(|s| s.as_str()).collect::<Vec<_>>().join(" ");

    let severity = matches
        .get_one::<String>("severity")
        .map(|s| s.parse::<Severity>())
        .transpose()?
        .unwrap_or(Severity::Info);

    Ok(Some((severity, message)))
}
