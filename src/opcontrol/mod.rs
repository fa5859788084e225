//! Driver-control loop.
//!
//! Each cycle runs in three strict phases:
//!
//! 1. **Sample**: [`TeleopIo::sample`] reads the controller and both arm
//!    encoders into a [`CycleInputs`].
//! 2. **Decide**: [`Teleop::step`] runs the mode arbiter, drive mixer,
//!    actuator togglers, arm controller, preset dispatcher and status
//!    indicator. It returns a [`CycleCommands`]. This phase touches no
//!    hardware.
//! 3. **Apply**: [`TeleopIo::apply`] writes the commands. Every output is
//!    written from this one place, at most once per cycle.
//!
//! [`run`] repeats this forever at [`CYCLE_PERIOD`].
//!
//! # Example
//!
//! ```ignore
//! use brgos::{config::TeleopConfig, opcontrol::{self, Teleop}};
//!
//! impl Compete for Robot {
//!     async fn driver(&mut self) {
//!         let mut teleop = Teleop::new(TeleopConfig::default());
//!         opcontrol::run(&mut teleop, &mut self.io).await;
//!     }
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use vexide::time::sleep;

use crate::{
    config::{CYCLE_PERIOD, TeleopConfig},
    drivetrain::{self, Differential, DriveCommand},
    peripherals::{DigitalOutput, InputSource, MotorGroup, StatusDisplay},
};

/// Press-to-toggle pneumatic control.
pub mod actuator;

/// Shoulder/elbow jog, hold, soft limits and tare.
pub mod arm;

/// Rising-edge detection for buttons.
pub mod latch;

/// Speed profile selection (precision / normal / attack).
pub mod mode;

/// Modifier + button arm presets.
pub mod preset;

/// Per-cycle input snapshot.
pub mod snapshot;

/// Attack-mode indicator on the Brain screen.
pub mod status;

use actuator::ActuatorToggler;
use arm::{ArmCommand, ArmController, ArmInputs, JointCommand};
use mode::{ModeArbiter, SpeedProfile};
use preset::{PresetDispatcher, PresetTable};
pub use snapshot::{ControlSnapshot, CycleInputs};
use status::StatusIndicator;

/// Everything one cycle asks the hardware to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleCommands {
    pub profile:      SpeedProfile,
    pub drive:        DriveCommand,
    /// New inner piston level, only on the cycle it changes.
    pub inner_piston: Option<bool>,
    /// New outer piston level, only on the cycle it changes.
    pub outer_piston: Option<bool>,
    pub arm:          ArmCommand,
    /// New background colour, only when it changes.
    pub status:       Option<Rgb888>,
}

/// State carried from one driver-control cycle to the next.
#[derive(Debug, Clone)]
pub struct Teleop {
    config:  TeleopConfig,
    modes:   ModeArbiter,
    inner:   ActuatorToggler,
    outer:   ActuatorToggler,
    arm:     ArmController,
    presets: PresetDispatcher,
    status:  StatusIndicator,
}

impl Teleop {
    pub fn new(config: TeleopConfig) -> Self {
        Self {
            modes:   ModeArbiter::new(config.precision_trigger),
            inner:   ActuatorToggler::new("Inner"),
            outer:   ActuatorToggler::new("Outer"),
            arm:     ArmController::new(config.shoulder, config.elbow, config.hold_speed),
            presets: PresetDispatcher::new(
                PresetTable::new(&config.presets),
                config.bindings.preset_modifier,
            ),
            status:  StatusIndicator::new(config.blink_half_period),
            config,
        }
    }

    pub fn config(&self) -> &TeleopConfig { &self.config }

    pub fn arm(&self) -> &ArmController { &self.arm }

    pub fn modes(&self) -> &ModeArbiter { &self.modes }

    /// Matches the piston togglers to the pistons' real levels.
    pub fn sync_actuators(&mut self, inner: bool, outer: bool) {
        self.inner.sync(inner);
        self.outer.sync(outer);
    }

    /// Takes over from whatever ran before driver control.
    ///
    /// Piston togglers start from the pistons' real levels and both joints
    /// hold where the first sample finds them (clamped to their soft limits).
    /// The first sample is returned so the loop can decide from it.
    pub fn begin(&mut self, io: &mut TeleopIo) -> CycleInputs {
        self.sync_actuators(
            io.inner_piston.output().unwrap_or(false),
            io.outer_piston.output().unwrap_or(false),
        );
        let inputs = io.sample();
        self.arm.sync(inputs.shoulder_position, inputs.elbow_position);
        inputs
    }

    /// Decides this cycle's commands from `inputs`.
    pub fn step(&mut self, inputs: &CycleInputs) -> CycleCommands {
        let controls = &inputs.controls;
        let bindings = self.config.bindings;

        let profile = self.modes.update(
            controls.pressed(bindings.precision),
            controls.pressed(bindings.attack),
        );

        let drive = drivetrain::arcade(
            controls.axis(bindings.drive_forward),
            controls.axis(bindings.drive_turn),
            profile,
            &self.config.drive,
        );

        let inner_piston = self.inner.update(controls.pressed(bindings.inner_piston));
        let outer_piston = self.outer.update(controls.pressed(bindings.outer_piston));

        let arm_inputs = ArmInputs {
            shoulder_axis:     controls.axis(bindings.shoulder),
            elbow_axis:        controls.axis(bindings.elbow),
            shoulder_position: inputs.shoulder_position,
            elbow_position:    inputs.elbow_position,
            override_limits:   controls.pressed(bindings.override_limits),
            tare:              controls.pressed(bindings.tare),
        };
        let mut arm = self.arm.update(&arm_inputs, profile);

        if let Some(preset) = self.presets.update(controls) {
            arm = self
                .arm
                .apply_preset(&preset, self.config.preset_speed, arm.tare);
        }

        let status = self.status.update(self.modes.attack_active());

        CycleCommands {
            profile,
            drive,
            inner_piston,
            outer_piston,
            arm,
            status,
        }
    }
}

/// The robot's driver-control hardware.
pub struct TeleopIo {
    pub controller:   Box<dyn InputSource>,
    pub drivetrain:   Differential,
    pub shoulder:     Box<dyn MotorGroup>,
    pub elbow:        Box<dyn MotorGroup>,
    pub inner_piston: Box<dyn DigitalOutput>,
    pub outer_piston: Box<dyn DigitalOutput>,
    pub display:      Box<dyn StatusDisplay>,
}

impl TeleopIo {
    /// Reads everything one cycle decides from.
    pub fn sample(&mut self) -> CycleInputs {
        CycleInputs {
            controls:          ControlSnapshot::sample(self.controller.as_mut()),
            shoulder_position: self.shoulder.position(),
            elbow_position:    self.elbow.position(),
        }
    }

    /// Writes one cycle's commands to the hardware.
    pub fn apply(&mut self, commands: &CycleCommands) {
        self.drivetrain.drive(commands.drive);

        if let Some(level) = commands.inner_piston {
            self.inner_piston.set_output(level);
        }
        if let Some(level) = commands.outer_piston {
            self.outer_piston.set_output(level);
        }

        if commands.arm.tare {
            self.shoulder.reset_position();
            self.elbow.reset_position();
        }
        send_joint(self.shoulder.as_mut(), commands.arm.shoulder);
        send_joint(self.elbow.as_mut(), commands.arm.elbow);

        if let Some(color) = commands.status {
            self.display.set_background_color(color);
        }
    }
}

fn send_joint(motor: &mut dyn MotorGroup, command: JointCommand) {
    match command {
        JointCommand::Velocity(percent) => motor.set_velocity(percent),
        JointCommand::MoveTo { position, speed } => motor.move_to_position(position, speed),
    }
}

/// Runs the driver-control loop until the caller's future is dropped.
///
/// Pistons and arm joints stay where autonomous left them; see
/// [`Teleop::begin`].
pub async fn run(teleop: &mut Teleop, io: &mut TeleopIo) {
    let mut inputs = teleop.begin(io);

    loop {
        let commands = teleop.step(&inputs);
        io.apply(&commands);
        sleep(CYCLE_PERIOD).await;
        inputs = io.sample();
    }
}

#[cfg(test)]
mod tests {
    use super::{status::*, *};
    use crate::{
        config::{HOLD_SPEED, PrecisionTrigger},
        peripherals::{
            ControllerAxis, ControllerButton,
            mock::{MockDisplay, MockInput, MockMotor, MockOutput, MotorCall},
        },
    };

    struct Rig {
        input:    MockInput,
        left:     MockMotor,
        right:    MockMotor,
        shoulder: MockMotor,
        elbow:    MockMotor,
        inner:    MockOutput,
        outer:    MockOutput,
        display:  MockDisplay,
        io:       TeleopIo,
        teleop:   Teleop,
    }

    impl Rig {
        fn new() -> Self { Self::with_config(TeleopConfig::default()) }

        fn with_config(config: TeleopConfig) -> Self {
            let input = MockInput::default();
            let left = MockMotor::default();
            let right = MockMotor::default();
            let shoulder = MockMotor::at(0.0);
            let elbow = MockMotor::at(0.0);
            let inner = MockOutput::default();
            let outer = MockOutput::default();
            let display = MockDisplay::default();
            let io = TeleopIo {
                controller:   Box::new(input.clone()),
                drivetrain:   Differential::new(left.clone(), right.clone()),
                shoulder:     Box::new(shoulder.clone()),
                elbow:        Box::new(elbow.clone()),
                inner_piston: Box::new(inner.clone()),
                outer_piston: Box::new(outer.clone()),
                display:      Box::new(display.clone()),
            };
            Self {
                input,
                left,
                right,
                shoulder,
                elbow,
                inner,
                outer,
                display,
                io,
                teleop: Teleop::new(config),
            }
        }

        fn cycle(&mut self) -> CycleCommands {
            let inputs = self.io.sample();
            let commands = self.teleop.step(&inputs);
            self.io.apply(&commands);
            commands
        }

        fn press(&self, button: ControllerButton) { self.input.set_button(button, true); }

        fn release(&self, button: ControllerButton) { self.input.set_button(button, false); }
    }

    fn hold(position: f64) -> MotorCall {
        MotorCall::MoveTo {
            degrees: position,
            speed:   HOLD_SPEED,
        }
    }

    #[test]
    fn idle_cycle_stops_drive_and_holds_arm() {
        let mut rig = Rig::new();
        rig.cycle();

        assert_eq!(rig.left.calls(), [MotorCall::Velocity(0.0)]);
        assert_eq!(rig.right.calls(), [MotorCall::Velocity(0.0)]);
        assert_eq!(rig.shoulder.calls(), [hold(0.0)]);
        assert_eq!(rig.elbow.calls(), [hold(0.0)]);
        assert!(rig.inner.writes().is_empty());
        assert_eq!(rig.display.colors(), [NEUTRAL_COLOR]);
    }

    #[test]
    fn drive_axes_reach_the_motors() {
        let mut rig = Rig::new();
        rig.input.set_axis(ControllerAxis::LeftY, 100);
        rig.input.set_axis(ControllerAxis::LeftX, 20);
        rig.cycle();

        assert_eq!(rig.left.last_call(), Some(MotorCall::Velocity(56.0)));
        assert_eq!(rig.right.last_call(), Some(MotorCall::Velocity(84.0)));
    }

    #[test]
    fn each_output_is_written_once_per_cycle() {
        let mut rig = Rig::new();
        rig.input.set_axis(ControllerAxis::RightY, 50);
        rig.press(ControllerButton::ButtonX);
        rig.press(ControllerButton::ButtonUp);
        rig.press(ControllerButton::ButtonL1);
        rig.cycle();

        assert_eq!(rig.left.calls().len(), 1);
        assert_eq!(rig.right.calls().len(), 1);
        assert_eq!(rig.shoulder.calls().len(), 1);
        assert_eq!(rig.elbow.calls().len(), 1);
        assert_eq!(rig.inner.writes().len(), 1);
    }

    #[test]
    fn pistons_toggle_once_per_press() {
        let mut rig = Rig::new();
        rig.press(ControllerButton::ButtonL1);
        for _ in 0..10 {
            rig.cycle();
        }
        assert_eq!(rig.inner.writes(), [true]);
        assert!(rig.outer.writes().is_empty());

        rig.release(ControllerButton::ButtonL1);
        rig.cycle();
        rig.press(ControllerButton::ButtonL1);
        rig.press(ControllerButton::ButtonL2);
        rig.cycle();
        assert_eq!(rig.inner.writes(), [true, false]);
        assert_eq!(rig.outer.writes(), [true]);
    }

    #[test]
    fn jog_then_release_holds_last_position() {
        let mut rig = Rig::new();
        rig.shoulder.0.borrow_mut().position = Some(33.0);
        rig.input.set_axis(ControllerAxis::RightY, 100);
        rig.cycle();
        assert_eq!(rig.shoulder.last_call(), Some(MotorCall::Velocity(65.0)));

        rig.input.set_axis(ControllerAxis::RightY, 0);
        rig.shoulder.0.borrow_mut().position = Some(36.0);
        rig.cycle();
        rig.cycle();
        assert_eq!(rig.shoulder.calls()[1..], [hold(33.0), hold(33.0)]);
        assert_eq!(rig.teleop.arm().shoulder.held_position(), 33.0);
    }

    #[test]
    fn soft_limit_needs_override() {
        let mut rig = Rig::new();
        rig.elbow.0.borrow_mut().position = Some(100.0);
        rig.input.set_axis(ControllerAxis::RightX, 60);
        rig.cycle();
        assert_eq!(rig.elbow.last_call(), Some(hold(0.0)));

        rig.press(ControllerButton::ButtonR2);
        rig.cycle();
        assert_eq!(rig.elbow.last_call(), Some(MotorCall::Velocity(60.0)));
    }

    #[test]
    fn preset_retargets_hold() {
        let mut rig = Rig::new();
        rig.press(ControllerButton::ButtonX);
        rig.press(ControllerButton::ButtonUp);
        rig.cycle();
        assert_eq!(
            rig.shoulder.last_call(),
            Some(MotorCall::MoveTo { degrees: 50.0, speed: 100.0 })
        );
        assert_eq!(
            rig.elbow.last_call(),
            Some(MotorCall::MoveTo { degrees: 30.0, speed: 100.0 })
        );

        rig.release(ControllerButton::ButtonX);
        rig.release(ControllerButton::ButtonUp);
        rig.cycle();
        assert_eq!(rig.shoulder.last_call(), Some(hold(50.0)));
        assert_eq!(rig.elbow.last_call(), Some(hold(30.0)));
    }

    #[test]
    fn tare_resets_encoders_and_targets() {
        let mut rig = Rig::new();
        rig.shoulder.0.borrow_mut().position = Some(40.0);
        rig.input.set_axis(ControllerAxis::RightY, 100);
        rig.cycle();
        rig.input.set_axis(ControllerAxis::RightY, 0);

        rig.press(ControllerButton::ButtonB);
        rig.cycle();
        let calls = rig.shoulder.calls();
        assert_eq!(calls[calls.len() - 2..], [MotorCall::Reset, hold(0.0)]);
        assert_eq!(rig.shoulder.0.borrow().position, Some(0.0));
        assert_eq!(rig.elbow.calls().last(), Some(&hold(0.0)));
        assert_eq!(rig.teleop.arm().shoulder.held_position(), 0.0);
        assert_eq!(rig.teleop.arm().elbow.held_position(), 0.0);
    }

    #[test]
    fn attack_mode_blinks_and_speeds_up() {
        let mut rig = Rig::new();
        rig.press(ControllerButton::ButtonY);
        rig.input.set_axis(ControllerAxis::LeftY, 100);
        let commands = rig.cycle();
        assert_eq!(commands.profile, SpeedProfile::Attack);
        assert_eq!(rig.left.last_call(), Some(MotorCall::Velocity(100.0)));
        assert_eq!(rig.display.colors(), [ALERT_COLOR]);

        for _ in 0..crate::config::BLINK_HALF_PERIOD {
            rig.cycle();
        }
        assert_eq!(rig.display.colors(), [ALERT_COLOR, NEUTRAL_COLOR]);

        rig.release(ControllerButton::ButtonY);
        rig.cycle();
        rig.press(ControllerButton::ButtonY);
        let commands = rig.cycle();
        assert_eq!(commands.profile, SpeedProfile::Normal);
        assert_eq!(rig.display.colors().last(), Some(&NEUTRAL_COLOR));
    }

    #[test]
    fn precision_held_over_attack() {
        let mut rig = Rig::new();
        rig.press(ControllerButton::ButtonY);
        rig.cycle();
        rig.press(ControllerButton::ButtonR1);
        rig.input.set_axis(ControllerAxis::LeftY, 100);
        let commands = rig.cycle();
        assert_eq!(commands.profile, SpeedProfile::Precision);
        assert_eq!(rig.left.last_call(), Some(MotorCall::Velocity(30.0)));
        assert!(rig.teleop.modes().attack_active());
    }

    #[test]
    fn toggled_precision_config_latches() {
        let config = TeleopConfig {
            precision_trigger: PrecisionTrigger::Toggled,
            ..TeleopConfig::default()
        };
        let mut rig = Rig::with_config(config);
        rig.press(ControllerButton::ButtonR1);
        rig.cycle();
        rig.release(ControllerButton::ButtonR1);
        assert_eq!(rig.cycle().profile, SpeedProfile::Precision);
    }

    #[test]
    fn controller_dropout_stops_drive_and_holds_arm() {
        let mut rig = Rig::new();
        rig.shoulder.0.borrow_mut().position = Some(33.0);
        rig.input.set_axis(ControllerAxis::LeftY, 100);
        rig.input.set_axis(ControllerAxis::RightY, 100);
        rig.press(ControllerButton::ButtonL1);
        rig.press(ControllerButton::ButtonX);
        rig.cycle();
        assert_eq!(rig.left.last_call(), Some(MotorCall::Velocity(70.0)));
        assert_eq!(rig.shoulder.last_call(), Some(MotorCall::Velocity(65.0)));
        assert_eq!(rig.inner.writes(), [true]);

        rig.input.set_disconnected(true);
        rig.press(ControllerButton::ButtonUp);
        rig.shoulder.0.borrow_mut().position = Some(38.0);
        for _ in 0..3 {
            let commands = rig.cycle();
            assert_eq!(commands.drive, DriveCommand::default());
            assert_eq!(rig.left.last_call(), Some(MotorCall::Velocity(0.0)));
            assert_eq!(rig.right.last_call(), Some(MotorCall::Velocity(0.0)));
            assert_eq!(rig.shoulder.last_call(), Some(hold(33.0)));
            assert_eq!(rig.elbow.last_call(), Some(hold(0.0)));
        }
        assert_eq!(rig.inner.writes(), [true]);
        assert!(rig.outer.writes().is_empty());
        assert_eq!(rig.teleop.arm().shoulder.held_position(), 33.0);
    }

    #[test]
    fn begin_holds_arm_where_autonomous_left_it() {
        let mut rig = Rig::new();
        rig.shoulder.0.borrow_mut().position = Some(42.0);
        rig.elbow.0.borrow_mut().position = Some(130.0);
        rig.inner.0.borrow_mut().push(true);

        let inputs = rig.teleop.begin(&mut rig.io);
        let commands = rig.teleop.step(&inputs);
        rig.io.apply(&commands);

        assert_eq!(rig.shoulder.last_call(), Some(hold(42.0)));
        assert_eq!(rig.elbow.last_call(), Some(hold(100.0)));
        assert_eq!(rig.input.refreshes(), 1);

        rig.press(ControllerButton::ButtonL1);
        rig.cycle();
        assert_eq!(rig.inner.writes(), [true, false]);
    }

    #[test]
    fn begin_keeps_zero_target_when_encoder_unreadable() {
        let mut rig = Rig::new();
        rig.shoulder.0.borrow_mut().position = None;
        rig.teleop.begin(&mut rig.io);
        rig.cycle();
        assert_eq!(rig.shoulder.last_call(), Some(hold(0.0)));
    }

    #[test]
    fn synced_actuators_toggle_from_real_level() {
        let mut rig = Rig::new();
        rig.teleop.sync_actuators(true, false);
        rig.press(ControllerButton::ButtonL1);
        rig.cycle();
        assert_eq!(rig.inner.writes(), [false]);
    }
}
