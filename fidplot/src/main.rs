#![warn(clippy::all, rust_2018_idioms)]

use std::{path::PathBuf, time::Duration};

use app_core::backend::BackendEventLoop;
use fidplot::{
    events::{LoadCoordinates, LoadTarget},
    render::{LogStatus, LogSurface},
    BackendAppState, Config, PlotApp,
};

const TICK: Duration = Duration::from_millis(10);

/// Usage: `fidplot [DATA_FILE] [INPUT_SPECTRUM...]`
fn main() -> Result<(), String> {
    env_logger::init();

    // start backend loop
    let (command_tx, command_rx) = std::sync::mpsc::channel();
    let config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file \".fidplot\" from home directory: {err}");
            Config::default()
        }
    };
    let backend_state = BackendAppState::new(config.data_path.clone(), config.reader_settings());
    let eventloop_handle = BackendEventLoop::new(command_rx, backend_state).run();

    let mut app = PlotApp::new(
        config,
        command_tx,
        Some(eventloop_handle),
        Box::new(LogSurface::default()),
        Box::new(LogStatus::default()),
    )
    .map_err(|err| err.to_string())?;

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    if let Some(data_file) = args.next() {
        app.queue_event(Box::new(LoadCoordinates::new(data_file, LoadTarget::DataSet)));
    }
    for input_spectrum in args {
        app.queue_event(Box::new(LoadCoordinates::new(
            input_spectrum,
            LoadTarget::InputSpectrum,
        )));
    }

    app.update_state();
    while app.has_pending_events() {
        std::thread::sleep(TICK);
        app.update_state();
    }

    for label in app.graph().legend_list() {
        println!("{label}");
    }
    app.shutdown();
    Ok(())
}
