use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Initializes the logging system.
///
/// When a log4rs configuration file is supplied it takes precedence;
/// otherwise a stderr console appender at INFO level is installed.
/// Should be called once at the beginning of the application's execution.
pub fn init(config_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = config_file {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
