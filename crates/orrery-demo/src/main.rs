mod app;
mod tower;

use anyhow::Result;
use winit::dpi::LogicalSize;

use orrery_engine::coords::Vec2;
use orrery_engine::device::GpuInit;
use orrery_engine::logging::{init_logging, LoggingConfig};
use orrery_engine::paint::Color;
use orrery_engine::window::{Runtime, RuntimeConfig};
use orrery_tower::{Actor, Stage};

use crate::app::TowerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let tower = Actor::from_records(&tower::records(), Vec2::new(200.0, 400.0))?;
    let stage = Stage::with_actors([tower]);

    let config = RuntimeConfig {
        title: "orrery tower".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    log::info!("starting \"{}\"", config.title);

    if let Err(e) = Runtime::run(config, GpuInit::default(), TowerApp::new(stage, Color::WHITE)) {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
