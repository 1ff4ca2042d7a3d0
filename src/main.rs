use wordcheck::app;
use wordcheck::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::default();

    // Misses go to stdout; diagnostics stay on stderr via the logger.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    app::run(&config, &mut out)?;

    Ok(())
}
