use brgos::{
    config::TeleopConfig,
    fs::logger,
    opcontrol::{self, Teleop, status::NEUTRAL_COLOR},
    peripherals::StatusDisplay,
};
use log::{LevelFilter, info};
use vexide::prelude::*;

mod hardware;

impl Compete for hardware::Robot {
    async fn disabled(&mut self) { self.io.drivetrain.stop(); }

    async fn driver(&mut self) {
        info!("Driver control started");
        let mut teleop = Teleop::new(TeleopConfig::default());
        opcontrol::run(&mut teleop, &mut self.io).await;
    }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(LevelFilter::Info) {
        println!("Logger Init Error: {}", e);
    }
    info!("Loading BRGOS...");

    let mut robot = hardware::Robot::default_config(peripherals);
    robot.io.display.set_background_color(NEUTRAL_COLOR);

    robot.compete().await;
}
