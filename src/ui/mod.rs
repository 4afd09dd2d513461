pub mod menu;

use ratatui::prelude::*;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    match app.screen {
        Screen::DifficultyMenu { choice } => menu::render_menu(frame, area, app.variant.title(), choice),
        Screen::Playing => {
            if let Some(game) = app.game.as_mut() {
                game.render(frame, area);
            }
        }
    }
}
