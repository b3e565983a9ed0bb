use std::rc::Rc;

use log::{debug, info};
use logger::{
    observers::{ErrorObserver, FatalErrorObserver, WarningObserver},
    Logger,
};

use crate::config::app::AppConfig;
pub use crate::error::AppError;

mod config;
mod error;

fn main() -> Result<(), AppError> {
    config::log::init();

    let config = AppConfig::new()?;
    debug!("Running with configuration: {:?}", config);

    run(&config);
    Ok(())
}

fn run(config: &AppConfig) {
    let mut logger = Logger::new();

    let warning_observer = Rc::new(WarningObserver::new());
    let error_observer = Rc::new(ErrorObserver::new(&config.error_log_path));
    let fatal_error_observer = Rc::new(FatalErrorObserver::new(&config.fatal_error_log_path));

    logger.add_observer(&warning_observer);
    logger.add_observer(&error_observer);
    logger.add_observer(&fatal_error_observer);

    logger.warning(&config.warning_message);
    logger.error(&config.error_message);
    logger.fatal_error(&config.fatal_error_message);

    logger.remove_observer(&warning_observer);
    logger.remove_observer(&error_observer);
    logger.remove_observer(&fatal_error_observer);

    info!("All events dispatched, {} observers left", logger.len());
}
