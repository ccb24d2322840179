#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, sync::Arc};

use iced::{Settings, Size};
use tracing::error;

use creatorflow_gui::{
    app::App,
    args::{parse_args, resolve_paths},
    config::{Config, ConfigError},
    dir::CreatorFlowDirectory,
    logger::{parse_log_level, setup_logger},
    services::{
        contact::FormRelayClient,
        geolocation::{CachedGeoLocator, HttpGeoLocator},
        http,
    },
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let (datadir, config_path) = resolve_paths(&args)?;
    if !datadir.exists() {
        datadir.init()?;
    }

    let config_path = config_path.unwrap_or_else(|| datadir.config_file_path());
    let config = match Config::from_file(&config_path) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(format!("{}: {}", config_path.display(), e).into()),
    };

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook(&datadir);
    log::info!("CreatorFlow v{}, datadir {}", VERSION, datadir.path().display());

    let client = http::client(config.request_timeout())?;
    let geo = CachedGeoLocator::new(
        HttpGeoLocator::new(config.geolocation_url.clone(), client.clone()),
        config.geolocation_cache_ttl(),
    )
    .with_env_override();
    let contact = FormRelayClient::new(config.contact_endpoint.clone(), client);

    let settings = Settings {
        id: Some("CreatorFlow".to_string()),
        antialiasing: true,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1280.0,
            height: 860.0,
        },
        min_size: Some(Size {
            width: 900.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(Arc::new(geo), Arc::new(contact)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook(datadir: &CreatorFlowDirectory) {
    let datadir = datadir.path().to_path_buf();
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );
        error!("Logs are kept in {}", datadir.display());

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
