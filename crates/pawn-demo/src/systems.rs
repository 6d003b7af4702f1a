//! ECS wiring: pawn component, shared resources, and the per-tick systems.

use bevy_ecs::prelude::*;
use glam::Vec3;
use pawn_config::{Config, ConfigError};
use pawn_controller::{FloatingMovement, LocomotionController, SceneNode};
use pawn_input::{Action, ActionBindings, ActionState, AxisModifiers};
use tracing::{debug, info};

use crate::script::{InputScript, Playback};

/// Concrete controller used by the demo.
pub type PawnController = LocomotionController<FloatingMovement, SceneNode, SceneNode>;

/// A controllable pawn: its controller plus the handlers bound to it.
#[derive(Component)]
pub struct Pawn {
    pub controller: PawnController,
    bindings: ActionBindings<PawnController>,
}

impl Pawn {
    /// Build a pawn at `position` from the controller and movement settings.
    pub fn spawn_at(config: &Config, position: Vec3) -> Result<Self, ConfigError> {
        let controller = LocomotionController::new(
            &config.controller,
            FloatingMovement::new(config.movement),
            SceneNode::at(position),
            Some(SceneNode::default()),
        )?;
        let mut bindings = ActionBindings::new();
        PawnController::setup_player_input(&mut bindings);
        Ok(Self {
            controller,
            bindings,
        })
    }

    /// World-space camera position at the end of the spring arm.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        let body = self.controller.body();
        let state = self.controller.state();
        match self.controller.rig() {
            Some(rig) => {
                let in_body = rig
                    .matrix()
                    .transform_point3(Vec3::Z * state.arm_length());
                body.matrix().transform_point3(in_body)
            }
            None => body.translation + state.camera_offset(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> PawnSummary {
        let state = self.controller.state();
        PawnSummary {
            position: self.controller.body().translation,
            velocity: self.controller.movement().velocity(),
            body_yaw: state.body_yaw(),
            rig_pitch: state.rig_pitch(),
            camera_position: self.camera_position(),
        }
    }
}

/// Snapshot of a pawn for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PawnSummary {
    pub position: Vec3,
    pub velocity: Vec3,
    pub body_yaw: f32,
    pub rig_pitch: f32,
    pub camera_position: Vec3,
}

/// This tick's action values.
#[derive(Resource, Default)]
pub struct Actions(pub ActionState);

/// The script being replayed.
#[derive(Resource)]
pub struct ScriptPlayback(pub Playback);

/// Seconds per tick.
#[derive(Resource, Clone, Copy)]
pub struct TickDelta(pub f32);

/// Modifiers applied to raw script samples.
#[derive(Resource, Clone, Copy)]
pub struct InputShaping {
    pub move_modifiers: AxisModifiers,
    pub look_modifiers: AxisModifiers,
}

impl InputShaping {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            move_modifiers: AxisModifiers::with_dead_zone(config.input.move_dead_zone),
            look_modifiers: AxisModifiers::look(
                config.input.look_sensitivity,
                config.input.invert_look_y,
            ),
        }
    }
}

/// Insert resources and spawn one pawn at the origin.
pub fn setup_world(
    world: &mut World,
    config: &Config,
    script: InputScript,
) -> Result<Entity, ConfigError> {
    world.insert_resource(Actions::default());
    world.insert_resource(ScriptPlayback(Playback::new(script)));
    world.insert_resource(TickDelta(1.0 / config.simulation.tick_rate as f32));
    world.insert_resource(InputShaping::from_config(config));
    let pawn = Pawn::spawn_at(config, Vec3::ZERO)?;
    Ok(world.spawn(pawn).id())
}

/// Playback, input dispatch, movement, reporting, in that order.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            playback_system,
            pawn_input_system,
            movement_system,
            report_system,
        )
            .chain(),
    );
    schedule
}

/// Start a new input frame and feed it the script's next samples.
pub fn playback_system(
    mut playback: ResMut<ScriptPlayback>,
    mut actions: ResMut<Actions>,
    shaping: Res<InputShaping>,
) {
    actions.0.begin_frame();
    if let Some(((move_input, look_input), label)) = playback.0.next_sample() {
        if let Some(label) = label {
            info!(step = label, "script step");
        }
        actions
            .0
            .accumulate(Action::Move, shaping.move_modifiers.apply(move_input));
        actions
            .0
            .accumulate(Action::Look, shaping.look_modifiers.apply(look_input));
    }
}

/// Dispatch the frame's actions to every pawn's bound handlers.
pub fn pawn_input_system(actions: Res<Actions>, mut pawns: Query<&mut Pawn>) {
    for mut pawn in &mut pawns {
        let Pawn {
            controller,
            bindings,
        } = &mut *pawn;
        bindings.dispatch(&actions.0, controller);
    }
}

/// Integrate pending movement and apply it to the body translation.
pub fn movement_system(delta: Res<TickDelta>, mut pawns: Query<&mut Pawn>) {
    for mut pawn in &mut pawns {
        let displacement = pawn.controller.movement_mut().tick(delta.0);
        pawn.controller.body_mut().translation += displacement;
    }
}

pub fn report_system(playback: Res<ScriptPlayback>, pawns: Query<(Entity, &Pawn)>) {
    for (entity, pawn) in &pawns {
        let s = pawn.summary();
        debug!(
            tick = playback.0.ticks_played(),
            ?entity,
            position = ?s.position,
            yaw = s.body_yaw,
            pitch = s.rig_pitch,
            speed = s.velocity.length(),
            camera = ?s.camera_position,
            "pawn"
        );
    }
}

/// Summaries of every pawn in the world.
pub fn pawn_summaries(world: &mut World) -> Vec<PawnSummary> {
    let mut query = world.query::<&Pawn>();
    query.iter(world).map(Pawn::summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptStep;
    use pawn_controller::normalize_axis;

    fn run_to_end(world: &mut World, schedule: &mut Schedule) -> u32 {
        let mut runs = 0;
        while !world.resource::<ScriptPlayback>().0.is_finished() {
            schedule.run(world);
            runs += 1;
        }
        runs
    }

    fn single_pawn(world: &mut World) -> PawnSummary {
        let summaries = pawn_summaries(world);
        assert_eq!(summaries.len(), 1);
        summaries[0]
    }

    fn step(ticks: u32, move_input: [f32; 2], look_input: [f32; 2]) -> ScriptStep {
        ScriptStep {
            ticks,
            move_input,
            look_input,
            label: None,
        }
    }

    #[test]
    fn test_setup_inserts_resources_and_pawn() {
        let mut world = World::new();
        setup_world(&mut world, &Config::default(), InputScript::default()).unwrap();
        assert!(world.contains_resource::<Actions>());
        assert!(world.contains_resource::<ScriptPlayback>());
        assert!(world.contains_resource::<TickDelta>());
        assert!(world.contains_resource::<InputShaping>());
        assert_eq!(pawn_summaries(&mut world).len(), 1);
    }

    #[test]
    fn test_invalid_config_fails_setup() {
        let mut config = Config::default();
        config.controller.pitch_min = 90.0;
        let mut world = World::new();
        assert!(setup_world(&mut world, &config, InputScript::default()).is_err());
    }

    #[test]
    fn test_builtin_script_end_state() {
        let mut world = World::new();
        setup_world(&mut world, &Config::default(), InputScript::builtin()).unwrap();
        let mut schedule = build_schedule();
        run_to_end(&mut world, &mut schedule);

        let s = single_pawn(&mut world);
        assert!(normalize_axis(s.body_yaw - 90.0).abs() < 1e-3);
        assert_eq!(s.rig_pitch, -80.0);
        assert_eq!(s.velocity, Vec3::ZERO);
        assert!(((s.camera_position - s.position).length() - 300.0).abs() < 1e-2);
    }

    #[test]
    fn test_walk_forward_moves_along_neg_z() {
        let mut world = World::new();
        let script = InputScript {
            steps: vec![step(10, [0.0, 1.0], [0.0, 0.0])],
        };
        setup_world(&mut world, &Config::default(), script).unwrap();
        let mut schedule = build_schedule();
        run_to_end(&mut world, &mut schedule);

        let s = single_pawn(&mut world);
        assert!(s.position.z < 0.0);
        assert!(s.position.x.abs() < 1e-3);
        assert_eq!(s.position.y, 0.0);
    }

    #[test]
    fn test_schedule_runs_once_per_script_tick() {
        let mut world = World::new();
        let script = InputScript {
            steps: vec![step(10, [0.0, 1.0], [0.0, 0.0])],
        };
        setup_world(&mut world, &Config::default(), script).unwrap();
        let mut schedule = build_schedule();
        let runs = run_to_end(&mut world, &mut schedule);

        assert_eq!(runs, 10);
        assert_eq!(world.resource::<ScriptPlayback>().0.ticks_played(), 10);
        // Still accelerating: ten ticks at 4000 u/s² and 60 Hz.
        let s = single_pawn(&mut world);
        assert!((s.velocity.length() - 4000.0 / 60.0 * 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_look_up_then_strafe_stays_horizontal() {
        let mut world = World::new();
        let script = InputScript {
            steps: vec![
                step(1, [0.0, 0.0], [0.0, 40.0]),
                step(10, [1.0, 0.0], [0.0, 0.0]),
            ],
        };
        setup_world(&mut world, &Config::default(), script).unwrap();
        let mut schedule = build_schedule();
        run_to_end(&mut world, &mut schedule);

        let s = single_pawn(&mut world);
        assert_eq!(s.rig_pitch, 40.0);
        assert!(s.position.x > 0.0);
        assert!(s.position.y.abs() < 1e-4);
        assert!(s.position.z.abs() < 1e-3);
    }

    #[test]
    fn test_inverted_look_from_config() {
        let mut config = Config::default();
        config.input.invert_look_y = true;
        config.input.look_sensitivity = 2.0;
        let mut world = World::new();
        let script = InputScript {
            steps: vec![step(1, [0.0, 0.0], [5.0, 10.0])],
        };
        setup_world(&mut world, &config, script).unwrap();
        let mut schedule = build_schedule();
        run_to_end(&mut world, &mut schedule);

        let s = single_pawn(&mut world);
        assert_eq!(s.rig_pitch, -20.0);
        assert!((s.body_yaw - 10.0).abs() < 1e-4);
    }
}
