use std::fs::File;
use std::path::PathBuf;

use arcade_snake::app::App;
use arcade_snake::config::{GameConfig, LOG_FILE, RESOURCE_DIR, SAVE_FILE};
use arcade_snake::save::SaveStore;
use ggez::{event, GameError, GameResult};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> GameResult {
    // Set up logging before anything else
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)
        .map_err(|e| GameError::CustomError(format!("failed to initialise logging: {}", e)))?;

    info!("Starting arcade snake");

    let config = GameConfig::default();
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Arcade Snake")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.board.width as f32, config.board.height as f32)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("arcade_snake", "arcade_snake")
        .add_resource_path(PathBuf::from(RESOURCE_DIR))
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new(&mut ctx, config, SaveStore::new(SAVE_FILE)).map_err(|e| {
        error!("Startup failed: {}", e);
        eprintln!("Startup failed: {}", e);
        e
    })?;
    event::run(ctx, event_loop, app)
}
