use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Difficulty, Settings, Variant};
use crate::games::platformer::Platformer;
use crate::games::shooter::Shooter;
use crate::games::snake::{Snake, SnakeLayout};
use crate::games::Game;

/// How long the loop sleeps while no game is running yet.
const MENU_TICK: Duration = Duration::from_millis(40);

pub enum Screen {
    /// Difficulty selection; `choice` indexes [`Difficulty::ALL`].
    DifficultyMenu { choice: usize },
    Playing,
}

pub struct App {
    pub should_quit: bool,
    pub variant: Variant,
    pub screen: Screen,
    pub game: Option<Box<dyn Game>>,
    seed: Option<u64>,
    /// Play field inside the game's border, in cells.
    field: (u16, u16),
}

impl App {
    /// `screen` is the terminal size; games get the area inside their border.
    pub fn new(settings: &Settings, screen: (u16, u16)) -> Self {
        let mut app = Self {
            should_quit: false,
            variant: settings.variant,
            screen: Screen::DifficultyMenu { choice: 0 },
            game: None,
            seed: settings.seed,
            field: (screen.0.saturating_sub(2), screen.1.saturating_sub(2)),
        };
        match (settings.variant.has_difficulty_menu(), settings.difficulty) {
            (false, _) => app.start(Difficulty::Medium),
            (true, Some(difficulty)) => app.start(difficulty),
            (true, None) => {}
        }
        app
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        let (w, h) = self.field;
        let rng = self.rng();
        let game: Box<dyn Game> = match self.variant {
            Variant::Platformer => Box::new(Platformer::new(rng)),
            Variant::Shooter | Variant::ShooterStrict => Box::new(Shooter::new(difficulty, w, h, rng)),
            Variant::Snake => Box::new(Snake::new(SnakeLayout::FullScreen, difficulty, w, h, rng)),
            Variant::SnakeBoxed => Box::new(Snake::new(SnakeLayout::Boxed, difficulty, w, h, rng)),
        };
        info!("starting {:?} on {} ({}x{} field)", self.variant, difficulty.label(), w, h);
        self.game = Some(game);
        self.screen = Screen::Playing;
    }

    pub fn tick_rate(&self) -> Duration {
        match &self.game {
            Some(game) => game.tick_rate(),
            None => MENU_TICK,
        }
    }

    pub fn score(&self) -> Option<u32> {
        self.game.as_ref().map(|game| game.get_score())
    }

    pub fn on_tick(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.update();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Screen::DifficultyMenu { choice } = &mut self.screen {
            match key.code {
                KeyCode::Up => *choice = choice.saturating_sub(1),
                KeyCode::Down => *choice = (*choice + 1).min(Difficulty::ALL.len() - 1),
                KeyCode::Enter => {
                    let difficulty = Difficulty::ALL[*choice];
                    self.start(difficulty);
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let restartable = self.variant.restartable();
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if game.is_game_over() {
            if !restartable {
                self.should_quit = true;
                return;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                KeyCode::Char('r') | KeyCode::Char('R') => game.reset(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => game.handle_input(key),
        }
    }
}
