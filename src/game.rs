//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::entity::{Ghost, GhostType, Pacman};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::platform::{Backend, BackendResource};
use crate::systems::{
    collision_system, error_log_system, game_over_system, ghost_respawn_system, input_system, is_running,
    player_control_system, player_movement_system, render_system, GameConfig, RunState, ScoreResource,
};
use crate::time::{GameClock, TimeSource};

/// Core game state built on the Bevy ECS architecture.
///
/// The `World` owns Pac-Man, the ghosts, the score and the run state; the `Schedule` runs one
/// frame as input, then update, then render. The backend is stored as a `NonSend` resource since
/// windowing handles are tied to the thread that created them.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a game with the default rules.
    pub fn new(backend: Box<dyn Backend>, clock: impl TimeSource + Send + Sync + 'static) -> Game {
        Self::with_config(backend, clock, GameConfig::default())
    }

    pub fn with_config(
        backend: Box<dyn Backend>,
        clock: impl TimeSource + Send + Sync + 'static,
        config: GameConfig,
    ) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        let clock = GameClock::new(clock);
        world.spawn(Pacman::spawn(&clock));
        for ghost_type in GhostType::iter() {
            world.spawn(Ghost::spawn(ghost_type, &clock));
        }
        debug!(?config, "Spawned Pac-Man and ghosts");

        world.insert_resource(clock);
        world.insert_resource(config);
        world.insert_resource(ScoreResource::default());
        world.insert_resource(RunState::Running);
        world.insert_non_send_resource(BackendResource(backend));

        Self::configure_schedule(&mut schedule);

        Game { world, schedule }
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.add_systems(
            (
                // Input
                input_system.run_if(is_running),
                player_control_system.run_if(is_running),
                // Update
                player_movement_system.run_if(is_running),
                collision_system.run_if(is_running),
                ghost_respawn_system.run_if(is_running),
                game_over_system.run_if(is_running),
                // Render
                render_system.run_if(is_running),
                error_log_system,
            )
                .chain(),
        );
    }

    /// Runs a single frame.
    ///
    /// Returns true if the game should exit.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        !self.run_state().is_running()
    }

    pub fn run_state(&self) -> RunState {
        *self.world.resource::<RunState>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    /// A snapshot of Pac-Man.
    pub fn pacman(&mut self) -> Option<Pacman> {
        self.world.query::<&Pacman>().single(&self.world).ok().cloned()
    }

    /// A snapshot of every ghost, in ghost order.
    pub fn ghosts(&mut self) -> Vec<Ghost> {
        let mut ghosts: Vec<Ghost> = self.world.query::<&Ghost>().iter(&self.world).cloned().collect();
        ghosts.sort_by_key(|ghost| ghost.ghost_type());
        ghosts
    }
}
