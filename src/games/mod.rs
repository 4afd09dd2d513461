pub mod canvas;
pub mod platformer;
pub mod shooter;
pub mod snake;

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

/// Upper bound on live enemies (and, separately, bullets) in one world.
/// Spawns past it are dropped.
pub const MAX_ENTITIES: usize = 128;

/// Where a game sits in `Running ⇄ Paused → GameOver | Won`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
    Won,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }
}

pub trait Game {
    /// Advances the world one tick. A no-op unless running.
    fn update(&mut self);
    fn handle_input(&mut self, key: KeyEvent);
    fn render(&mut self, frame: &mut Frame, area: Rect);
    fn reset(&mut self);
    fn get_score(&self) -> u32;
    fn phase(&self) -> Phase;
    /// Wall-clock length of one tick.
    fn tick_rate(&self) -> Duration;

    fn is_game_over(&self) -> bool {
        self.phase().is_finished()
    }
}
