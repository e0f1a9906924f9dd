#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::Vec2;
use pacman_lite::{
    constants::pacman::{SPEED, STARTING_LIVES},
    entity::{Ghost, GhostType, Pacman},
    error::{GameError, GameResult},
    events::GameEvent,
    game::Game,
    platform::{Backend, Color, InputEvent},
    systems::{GameConfig, RunState, ScoreResource},
    time::{GameClock, ManualClock},
};

/// Everything a test can observe about what the game asked the backend to do.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle { center: Vec2, radius: f32, color: Color },
    Present,
}

#[derive(Default)]
struct ScriptState {
    queue: VecDeque<InputEvent>,
    calls: Vec<DrawCall>,
}

/// A headless backend fed from a script of input events.
///
/// Clones share state, so a test keeps one handle while the game owns the other.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    state: Rc<RefCell<ScriptState>>,
}

impl ScriptedBackend {
    /// Queues an event to be delivered on the next frame.
    pub fn push(&self, event: InputEvent) {
        self.state.borrow_mut().queue.push_back(event);
    }

    /// Returns and forgets every draw call recorded so far.
    pub fn take_calls(&self) -> Vec<DrawCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }
}

impl Backend for ScriptedBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.state.borrow_mut().queue.pop_front()
    }

    fn clear(&mut self) -> GameResult<()> {
        self.state.borrow_mut().calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> GameResult<()> {
        self.state.borrow_mut().calls.push(DrawCall::Circle { center, radius, color });
        Ok(())
    }

    fn present(&mut self) -> GameResult<()> {
        self.state.borrow_mut().calls.push(DrawCall::Present);
        Ok(())
    }
}

/// A full game wired to a scripted backend and a manual clock.
pub fn create_test_game(config: GameConfig) -> (Game, ScriptedBackend, ManualClock) {
    let backend = ScriptedBackend::default();
    let clock = ManualClock::new();
    let game = Game::with_config(Box::new(backend.clone()), clock.clone(), config);
    (game, backend, clock)
}

/// Replaces the game's Pac-Man with a fresh, stationary one at `position`.
pub fn place_pacman(game: &mut Game, position: Vec2, clock: &ManualClock) {
    let mut query = game.world.query::<&mut Pacman>();
    let mut pacman = query.single_mut(&mut game.world).expect("game should have exactly one Pac-Man");
    *pacman = Pacman::new(position, SPEED, STARTING_LIVES, clock);
}

/// Creates a bare world holding the resources the gameplay systems need.
pub fn create_test_world(clock: &ManualClock, config: GameConfig) -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(GameClock::new(clock.clone()));
    world.insert_resource(config);
    world.insert_resource(ScoreResource::default());
    world.insert_resource(RunState::Running);

    world
}

/// Spawns a stationary Pac-Man with full lives.
pub fn spawn_test_pacman(world: &mut World, position: Vec2, clock: &ManualClock) -> Entity {
    world.spawn(Pacman::new(position, SPEED, STARTING_LIVES, clock)).id()
}

pub fn spawn_test_ghost(world: &mut World, ghost_type: GhostType, position: Vec2, clock: &ManualClock) -> Entity {
    world.spawn(Ghost::new(ghost_type, position, clock)).id()
}

/// Sends a game event to the world
pub fn send_game_event(world: &mut World, event: GameEvent) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event);
}

/// Removes and returns every game event written so far.
pub fn drain_game_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<Events<GameEvent>>().drain().collect()
}

pub fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}
