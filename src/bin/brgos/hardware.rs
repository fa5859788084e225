use brgos::{
    drivetrain::Differential, opcontrol::TeleopIo, peripherals::controller::ControllerInput,
};
use vexide::prelude::*;

// Smart ports
// Left 1 (reversed), right 2, shoulder 3 (reversed) + 4, elbow 5.
// Pistons on ADI A (inner) and B (outer).

pub struct Robot {
    pub io: TeleopIo,
}

impl Robot {
    pub fn default_config(peripherals: Peripherals) -> Self {
        let io = TeleopIo {
            controller:   Box::new(ControllerInput::new(peripherals.primary_controller)),
            drivetrain:   Differential::new(
                [Motor::new(peripherals.port_1, Gearset::Green, Direction::Reverse)],
                [Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward)],
            ),
            shoulder:     Box::new([
                Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
            ]),
            elbow:        Box::new([Motor::new(
                peripherals.port_5,
                Gearset::Green,
                Direction::Forward,
            )]),
            inner_piston: Box::new(AdiDigitalOut::new(peripherals.adi_a)),
            outer_piston: Box::new(AdiDigitalOut::new(peripherals.adi_b)),
            display:      Box::new(peripherals.display),
        };

        Robot { io }
    }
}
