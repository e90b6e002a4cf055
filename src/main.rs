use clap::Parser;
use ipaddress::cli::{run, Cli};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::env;
use std::error::Error;
use std::io;

const LOG_CONFIG_ENV: &str = "IPADDRESS_LOG_CONFIG";
const LOG_CONFIG_DEFAULT: &str = "log4rs.yml";

/// Load the log4rs config file, or log warnings to stderr without one.
fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| LOG_CONFIG_DEFAULT.to_string());
    match log4rs::init_file(&path, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
            let config = Config::builder()
                .appender(Appender::builder().build("stderr", Box::new(stderr)))
                .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
            log4rs::init_config(config)?;
            log::info!("log config {path} not loaded: {e}");
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    let out = run(&cli, io::stdin().lock())?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
