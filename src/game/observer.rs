use crate::error::ObserverError;

use super::GameState;

/// Something that wants to hear about every move applied to a [`Game`].
///
/// Observers run synchronously, in registration order, right after the move
/// lands. They receive the post-move state and may read any of it.
///
/// [`Game`]: super::Game
pub trait Observer {
    fn update(&mut self, state: &GameState) -> Result<(), ObserverError>;
}

impl<F> Observer for F
where
    F: FnMut(&GameState) -> Result<(), ObserverError>,
{
    fn update(&mut self, state: &GameState) -> Result<(), ObserverError> {
        self(state)
    }
}
