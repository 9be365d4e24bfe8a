use std::process::ExitCode;

use cursor_circle::model::{Geometry, OverlayConfig, LOG_LEVEL};
use cursor_circle::platform;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LOG_LEVEL)
        .format_timestamp_millis()
        .init();

    let config = OverlayConfig::default().validate();
    let geometry = Geometry::from_config(&config);
    info!(
        "Cursor circle: {}px window, circle {} glow {}, line {}px, every {}ms",
        geometry.window_size,
        config.circle_color.to_hex(),
        config.glow_color.to_hex(),
        geometry.line_width,
        config.update_interval_ms,
    );

    match platform::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("cursor-circle: {e}");
            ExitCode::FAILURE
        }
    }
}
