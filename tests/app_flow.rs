use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use ascii_arcade::app::{App, Screen};
use ascii_arcade::config::{Difficulty, Settings, Variant};
use ascii_arcade::games::Phase;
use ascii_arcade::ui;

const SCREEN: (u16, u16) = (80, 24);

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_for(variant: Variant, difficulty: Option<Difficulty>) -> App {
    let settings = Settings { variant, difficulty, seed: Some(7) };
    App::new(&settings, SCREEN)
}

/// Draws one frame and returns it row by row.
fn screen_text(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(SCREEN.0, SCREEN.1)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn shows(rows: &[String], text: &str) -> bool {
    rows.iter().any(|row| row.contains(text))
}

fn run_until_finished(app: &mut App, max_ticks: usize) -> bool {
    for _ in 0..max_ticks {
        app.on_tick();
        if app.game.as_ref().is_some_and(|game| game.is_game_over()) {
            return true;
        }
    }
    false
}

#[test]
fn menu_variants_wait_for_a_difficulty() {
    let mut app = app_for(Variant::Shooter, None);
    assert!(matches!(app.screen, Screen::DifficultyMenu { choice: 0 }));
    assert!(app.game.is_none());
    assert_eq!(app.score(), None);

    let rows = screen_text(&mut app);
    assert!(shows(&rows, "Select Difficulty:"));
    assert!(shows(&rows, "1. Easy"));
    assert!(shows(&rows, "3. Hard"));
}

#[test]
fn menu_selection_is_clamped_and_enter_starts_the_game() {
    let mut app = app_for(Variant::Snake, None);
    app.on_key(key(KeyCode::Up));
    assert!(matches!(app.screen, Screen::DifficultyMenu { choice: 0 }));

    for _ in 0..5 {
        app.on_key(key(KeyCode::Down));
    }
    assert!(matches!(app.screen, Screen::DifficultyMenu { choice: 2 }));

    app.on_key(key(KeyCode::Enter));
    assert!(matches!(app.screen, Screen::Playing));
    assert_eq!(app.tick_rate(), Duration::from_millis(60));
    assert_eq!(app.score(), Some(0));
}

#[test]
fn difficulty_flag_skips_the_menu() {
    let mut app = app_for(Variant::Shooter, Some(Difficulty::Easy));
    assert!(matches!(app.screen, Screen::Playing));
    assert_eq!(app.tick_rate(), Duration::from_millis(40));

    let rows = screen_text(&mut app);
    assert!(shows(&rows, "Score:0 Lives:3 Level:Easy"));
}

#[test]
fn platformer_starts_without_a_menu() {
    let mut app = app_for(Variant::Platformer, None);
    assert!(matches!(app.screen, Screen::Playing));
    assert_eq!(app.tick_rate(), Duration::from_millis(30));

    app.on_tick();
    let rows = screen_text(&mut app);
    assert!(shows(&rows, "Score: 0"));
    assert!(shows(&rows, "Lives: 3"));
}

#[test]
fn platformer_restarts_with_r_after_game_over() {
    let mut app = app_for(Variant::Platformer, None);
    let mut finished = false;
    for _ in 0..5_000 {
        app.on_key(key(KeyCode::Right));
        app.on_tick();
        if app.game.as_ref().is_some_and(|game| game.is_game_over()) {
            finished = true;
            break;
        }
    }
    assert!(finished, "walking right never ran out of lives");
    let rows = screen_text(&mut app);
    assert!(shows(&rows, "GAME OVER"));
    assert!(shows(&rows, "Lives: 0"));

    app.on_key(key(KeyCode::Char('x')));
    assert!(!app.should_quit);
    assert!(app.game.as_ref().is_some_and(|game| game.phase() == Phase::GameOver));

    app.on_key(key(KeyCode::Char('r')));
    assert!(!app.should_quit);
    assert!(app.game.as_ref().is_some_and(|game| game.phase() == Phase::Running));
    assert_eq!(app.score(), Some(0));
    let rows = screen_text(&mut app);
    assert!(shows(&rows, "Lives: 3"));
}

#[test]
fn q_quits_from_the_menu_and_during_play() {
    let mut menu = app_for(Variant::SnakeBoxed, None);
    menu.on_key(key(KeyCode::Char('q')));
    assert!(menu.should_quit);

    let mut playing = app_for(Variant::Platformer, None);
    playing.on_key(key(KeyCode::Char('x')));
    assert!(!playing.should_quit);
    playing.on_key(key(KeyCode::Char('q')));
    assert!(playing.should_quit);
}

#[test]
fn ctrl_c_always_quits() {
    let mut app = app_for(Variant::Shooter, None);
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn pause_is_shown_and_freezes_play() {
    let mut app = app_for(Variant::Snake, Some(Difficulty::Easy));
    app.on_key(key(KeyCode::Char('p')));
    let rows = screen_text(&mut app);
    assert!(shows(&rows, "--- PAUSED ---"));

    for _ in 0..200 {
        app.on_tick();
    }
    assert!(!app.game.as_ref().is_some_and(|game| game.is_game_over()));
}

#[test]
fn snake_runs_into_the_wall_and_any_key_exits() {
    let mut app = app_for(Variant::Snake, Some(Difficulty::Medium));
    assert!(run_until_finished(&mut app, 200));

    let rows = screen_text(&mut app);
    assert!(shows(&rows, "Game Over!"));
    assert!(!app.should_quit);

    app.on_key(key(KeyCode::Char('x')));
    assert!(app.should_quit);
}

#[test]
fn shooter_ends_when_invaders_land_and_any_key_exits() {
    let mut app = app_for(Variant::ShooterStrict, Some(Difficulty::Hard));
    assert!(run_until_finished(&mut app, 20_000));

    let rows = screen_text(&mut app);
    assert!(shows(&rows, "GAME OVER"));
    assert!(shows(&rows, "Press any key to exit..."));

    app.on_key(key(KeyCode::Left));
    assert!(app.should_quit);
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut first = app_for(Variant::Shooter, Some(Difficulty::Hard));
    let mut second = app_for(Variant::Shooter, Some(Difficulty::Hard));
    for _ in 0..300 {
        first.on_tick();
        second.on_tick();
    }
    assert_eq!(screen_text(&mut first), screen_text(&mut second));
}
