use tint_log::cli::{build_cli, parse_config, parse_message};
use tint_log::{log_debug, log_error, log_info, log_warning, LogError, Logger};

fn main() {
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let logger = match Logger::new(config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    let request = match parse_message(&matches) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            std::process::exit(1);
        }
    };

    let result = match request {
        Some((severity, message)) => logger.log(severity, format_args!("{}", message)).map(|_| ()),
        None => run_demo(&logger),
    };

    if let Err(e) = result {
        eprintln!("Logging failed: {}", e);
        std::process::exit(e.code());
    }
}

/// One line per severity, then a fatal condition. There is no fatal severity:
/// it is logged as an error and the process decides what to do next.
fn run_demo(logger: &Logger) -> Result<(), LogError> {
    log_debug!(logger: logger, "Debug message, {}", 123)?;
    log_info!(logger: logger, "This is a short info message.")?;
    log_warning!(logger: logger, "This is a very important warning!")?;
    log_error!(logger: logger, "This is a normal error.")?;
    log_error!(logger: logger, "Something went very wrong!")?;
    Ok(())
}
