use bevy_ecs::{event::EventWriter, system::NonSendMut};
use tracing::trace;

use crate::{
    events::{GameCommand, GameEvent},
    platform::{BackendResource, InputEvent},
};

/// Drains the backend's event queue, turning each input into a game command.
///
/// Every pending event is forwarded in order, so when several directions are pressed within one
/// frame the last one wins.
pub fn input_system(mut backend: NonSendMut<BackendResource>, mut writer: EventWriter<GameEvent>) {
    while let Some(event) = backend.0.poll_event() {
        trace!(?event, "Input event");
        let command = match event {
            InputEvent::CloseRequested => GameCommand::Exit,
            InputEvent::Move(direction) => GameCommand::MovePlayer(direction),
        };
        writer.write(GameEvent::Command(command));
    }
}
