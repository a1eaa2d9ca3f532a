use tally_calc::config::Config;
use tally_calc::session;
use tally_calc::Calculator;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut calculator = Calculator::new();
    let stdout = std::io::stdout();

    if config.lines.is_empty() {
        let stdin = std::io::stdin();
        session::run(&mut calculator, stdin.lock(), stdout.lock(), config.prompt())?;
    } else {
        session::run_lines(&mut calculator, &config.lines, stdout.lock())?;
    }
    Ok(())
}
