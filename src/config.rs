//! Run settings: which game to play, how hard, and how to seed it.
//!
//! Everything arrives on the command line; tuning tables are constants.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ascii-arcade")]
#[command(about = "Terminal ASCII games: platformer, shooter and snake")]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[arg(value_enum)]
    pub game: Variant,

    /// Skip the difficulty menu (shooter and snake only)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for every random decision, for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Append log records to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Side-scrolling platformer with coins, patrolling enemies and an exit
    Platformer,
    /// Falling-invader shooter; prints the final score on exit
    Shooter,
    /// Same shooter, refuses to start on a terminal without color
    ShooterStrict,
    /// Full-screen snake
    Snake,
    /// Snake inside a centered box
    SnakeBoxed,
}

impl Variant {
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Platformer => " ASCII Mario ",
            Variant::Shooter | Variant::ShooterStrict => " ASCII SHOOTER ",
            Variant::Snake | Variant::SnakeBoxed => " SNAKE GAME ",
        }
    }

    pub fn has_difficulty_menu(&self) -> bool {
        !matches!(self, Variant::Platformer)
    }

    /// Whether a finished game offers `r` to restart instead of exiting.
    pub fn restartable(&self) -> bool {
        matches!(self, Variant::Platformer)
    }

    pub fn requires_color(&self) -> bool {
        matches!(self, Variant::ShooterStrict)
    }

    pub fn prints_final_score(&self) -> bool {
        matches!(self, Variant::Shooter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Shooter pacing, all counted in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShooterTuning {
    /// Ticks between enemy spawns.
    pub spawn_rate: u32,
    /// Ticks an enemy waits before descending one row.
    pub enemy_speed: u32,
    /// Each enemy fires with probability `1 / fire_chance` per tick.
    pub fire_chance: u32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn shooter_tuning(&self) -> ShooterTuning {
        match self {
            Difficulty::Easy => ShooterTuning { spawn_rate: 80, enemy_speed: 12, fire_chance: 400 },
            Difficulty::Medium => ShooterTuning { spawn_rate: 50, enemy_speed: 8, fire_chance: 200 },
            Difficulty::Hard => ShooterTuning { spawn_rate: 25, enemy_speed: 5, fire_chance: 80 },
        }
    }

    /// Snake speed is its tick length.
    pub fn snake_tick(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(60),
        }
    }
}

/// What the app needs from the command line once parsing is done.
#[derive(Clone, Debug)]
pub struct Settings {
    pub variant: Variant,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            variant: cli.game,
            difficulty: cli.difficulty,
            seed: cli.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_shooter_spawns_and_fires_more_often() {
        let easy = Difficulty::Easy.shooter_tuning();
        let hard = Difficulty::Hard.shooter_tuning();
        assert!(hard.spawn_rate < easy.spawn_rate);
        assert!(hard.enemy_speed < easy.enemy_speed);
        assert!(hard.fire_chance < easy.fire_chance);
    }

    #[test]
    fn cli_parses_variant_and_flags() {
        let cli = Cli::parse_from(["ascii-arcade", "snake-boxed", "--difficulty", "hard", "--seed", "9"]);
        let settings = Settings::from(&cli);
        assert_eq!(settings.variant, Variant::SnakeBoxed);
        assert_eq!(settings.difficulty, Some(Difficulty::Hard));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(cli.verbose, 0);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn only_the_platformer_restarts() {
        assert!(Variant::Platformer.restartable());
        assert!(!Variant::Platformer.has_difficulty_menu());
        assert!(!Variant::Snake.restartable());
        assert!(Variant::ShooterStrict.requires_color());
        assert!(!Variant::Shooter.requires_color());
        assert!(Variant::Shooter.prints_final_score());
    }
}
