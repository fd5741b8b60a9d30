use std::env;
use std::process;

const LOG_LEVEL: &str = "RUST_LOG";

#[tokio::main]
async fn main() {
    let error_style = console::Style::new().red().bright().for_stderr();
    let opts = yota_cli::read_args();
    let reset_log_level = init_logging(opts.common_opts.verbose);

    let result = yota_cli::execute_cmd(opts).await;
    if reset_log_level {
        env::remove_var(LOG_LEVEL);
    }
    if let Err(err) = result {
        log::debug!("Command failed: {:?}", err);
        eprintln!("{}", error_style.apply_to(&err));
        process::exit(err.exit_code());
    }
}

/// Sets the log level from the `--verbose` count, unless RUST_LOG is
/// given already. Returns whether RUST_LOG was set here.
fn init_logging(verbose: u8) -> bool {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    };
    let set = match level {
        Some(l) if env::var_os(LOG_LEVEL).is_none() => {
            env::set_var(LOG_LEVEL, l);
            true
        }
        _ => false,
    };
    env_logger::init();
    set
}
