use anyhow::Result;
use log::info;

use tiny_rooms::cli::CliArgs;
use tiny_rooms::config::GameConfig;
use tiny_rooms::game::{install_bindings, RoomAction, RoomKey, RoomScene};
use tiny_rooms::EngineBuilder;

fn main() -> Result<()> {
    // info+ unless RUST_LOG overrides; winit chatter stays at warn
    let default = "info,winit=warn";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let args = CliArgs::parse_from_env()?;
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_overrides(args.config_overrides())?;

    info!("Starting Tiny Rooms at {} TPS", config.window.tps);
    let room = RoomScene::demo(&config);
    let axes = config.axes;

    EngineBuilder::<RoomKey, RoomAction>::new()
        .with_tps(config.window.tps)
        .with_window_title(config.window.title.clone())
        .build()
        .init(|systems| {
            install_bindings(&mut systems.input, axes);
            systems.scene_manager.register_default(RoomKey::Main, room);
        })
        .run();

    Ok(())
}
