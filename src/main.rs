use std::process::ExitCode;

use log::error;
use polyview::config::DemoConfig;
use polyview::display::{Headless, NativeWindow, WindowSurface};
use polyview::PolyviewError;

fn main() -> ExitCode {
    env_logger::init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), PolyviewError> {
    let config = DemoConfig::from_env()?;

    let mut surface: Box<dyn WindowSurface> = if *config.show_window() {
        Box::new(NativeWindow)
    } else {
        Box::new(Headless)
    };

    polyview::run(&config, surface.as_mut(), &mut std::io::stdout().lock())?;
    Ok(())
}
