use std::io;
use std::thread;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ascii_arcade::app::App;
use ascii_arcade::config::{Cli, Settings};
use ascii_arcade::error::{check_color_support, check_terminal_size};
use ascii_arcade::event::EventHandler;
use ascii_arcade::logging::init_logging;
use ascii_arcade::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose)?;
    let settings = Settings::from(&cli);
    info!("ascii-arcade v{} starting {:?}", env!("CARGO_PKG_VERSION"), settings.variant);

    if settings.variant.requires_color() {
        check_color_support(crossterm::style::available_color_count())?;
    }
    let (width, height) = crossterm::terminal::size()?;
    check_terminal_size(settings.variant, width, height)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&settings, (width, height));
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    if settings.variant.prints_final_score() {
        if let Some(score) = app.score() {
            println!("Final Score: {score}");
        }
    }
    info!("exiting with score {:?}", app.score());
    Ok(())
}

/// Input, update, render, sleep. Quit is honoured at the top of the next
/// iteration, so the tick in which it was pressed still completes.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let events = EventHandler::new();
    while !app.should_quit {
        for key in events.drain()? {
            app.on_key(key);
        }

        app.on_tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        thread::sleep(app.tick_rate());
    }
    Ok(())
}
