use focusboard_core::{Config, Controller};

use crate::session::Session;

/// Open the interactive board on a single-threaded runtime.
pub fn run(manual_clock: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let controller = Controller::from_config(&config);
    let session = Session::new(controller, &config, manual_clock);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session.run())
}
