// chaksu - A minimal desktop image viewer
// Loads the config, resolves settings and collects the images to show

use anyhow::{bail, Result};
use chaksu::app::ViewerState;
use chaksu::cli::{self, ConfigSource};
use chaksu::config::{ConfigError, Store};
use chaksu::images;
use chaksu::settings::Settings;
use log::{info, warn};

/// Load the config store. `Ok(None)` means no config is in use.
fn load_store(source: &ConfigSource) -> Result<Option<Store>, ConfigError> {
    match source {
        ConfigSource::Default(path) if !path.exists() => {
            info!("No config at {}, using defaults", path.display());
            Ok(None)
        }
        ConfigSource::Default(path) | ConfigSource::File(path) => {
            info!("Loading config from {}", path.display());
            Store::from_file(path).map(Some)
        }
        ConfigSource::Stdin(bytes) => {
            info!("Loading config from stdin");
            Store::from_bytes(bytes).map(Some)
        }
        ConfigSource::None => Ok(None),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args = cli::parse_args()?;

    let store = match load_store(&args.config) {
        Ok(store) => store,
        Err(e) if args.check => bail!("Invalid config: {}", e),
        Err(e) => {
            warn!("Ignoring config: {}", e);
            None
        }
    };

    if args.check {
        let diagnostics = store.as_ref().map(|s| s.diagnostics()).unwrap_or_default();
        for diagnostic in diagnostics {
            eprintln!("{}", diagnostic);
        }
        if !diagnostics.is_empty() {
            bail!("{} problem(s) found in config", diagnostics.len());
        }
        info!(
            "Config OK ({} entries)",
            store.as_ref().map(|s| s.len()).unwrap_or(0)
        );
        return Ok(());
    }

    let settings = match &store {
        Some(store) => Settings::from_store(store),
        None => Settings::defaults(),
    };

    if args.print_config {
        print!("{}", settings);
        return Ok(());
    }

    let images = images::collect_images(&args.images)?;
    let state = ViewerState::new(images, &settings);

    info!(
        "Starting {} ({}x{} @ {} fps) with {} image(s)",
        settings.window_title,
        settings.window_width,
        settings.window_height,
        settings.framerate,
        state.images.len()
    );
    info!("{}", state.status_line());

    Ok(())
}
