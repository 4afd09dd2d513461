use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::Difficulty;
use crate::games::canvas::Canvas;
use crate::games::{Game, Phase};

const FOOD_POINTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeLayout {
    /// Border hugs the screen; HUD on the top row.
    FullScreen,
    /// Centered box half the size of the screen; HUD just above it.
    Boxed,
}

impl SnakeLayout {
    fn initial_length(&self) -> usize {
        match self {
            SnakeLayout::FullScreen => 35,
            SnakeLayout::Boxed => 12,
        }
    }
}

/// Bordered rectangle the snake lives in. The border cells themselves are
/// deadly; food only appears strictly inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayArea {
    pub x0: i32,
    pub y0: i32,
    pub width: i32,
    pub height: i32,
}

impl PlayArea {
    pub fn for_layout(layout: SnakeLayout, screen_w: i32, screen_h: i32) -> Self {
        match layout {
            SnakeLayout::FullScreen => Self {
                x0: 0,
                y0: 1,
                width: screen_w,
                height: screen_h - 1,
            },
            SnakeLayout::Boxed => {
                let mut width = screen_w * 50 / 100;
                let mut height = screen_h * 50 / 100;
                if width < 20 {
                    width = screen_w - 4;
                }
                if height < 10 {
                    height = screen_h - 4;
                }
                Self {
                    x0: (screen_w - width) / 2,
                    y0: (screen_h - height) / 2,
                    width,
                    height,
                }
            }
        }
    }

    pub fn hits_border(&self, cell: Cell) -> bool {
        cell.x <= self.x0
            || cell.x >= self.x0 + self.width - 1
            || cell.y <= self.y0
            || cell.y >= self.y0 + self.height - 1
    }

    fn interior(&self) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        (
            self.x0 + 1..self.x0 + self.width - 1,
            self.y0 + 1..self.y0 + self.height - 1,
        )
    }
}

pub struct Snake {
    layout: SnakeLayout,
    difficulty: Difficulty,
    screen: (i32, i32),
    area: PlayArea,
    /// Head first.
    body: VecDeque<Cell>,
    /// Direction of the last completed step.
    heading: Heading,
    /// Direction the next step will take.
    next_heading: Heading,
    food: Cell,
    score: u32,
    paused: bool,
    game_over: bool,
    won: bool,
    rng: StdRng,
}

impl Snake {
    pub fn new(layout: SnakeLayout, difficulty: Difficulty, width: u16, height: u16, rng: StdRng) -> Self {
        let screen = (width as i32, height as i32);
        let area = PlayArea::for_layout(layout, screen.0, screen.1);
        let mut snake = Self {
            layout,
            difficulty,
            screen,
            area,
            body: VecDeque::new(),
            heading: Heading::Right,
            next_heading: Heading::Right,
            food: Cell::new(0, 0),
            score: 0,
            paused: false,
            game_over: false,
            won: false,
            rng,
        };
        snake.init_body();
        snake.spawn_food();
        snake
    }

    fn init_body(&mut self) {
        let start = match self.layout {
            SnakeLayout::FullScreen => Cell::new(self.screen.0 / 2, self.screen.1 / 2),
            SnakeLayout::Boxed => Cell::new(
                self.area.x0 + self.area.width / 2,
                self.area.y0 + self.area.height / 2,
            ),
        };
        self.body = (0..self.layout.initial_length() as i32)
            .map(|i| Cell::new(start.x - i, start.y))
            .collect();
        self.heading = Heading::Right;
        self.next_heading = Heading::Right;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    /// Queues a turn unless it would reverse the current heading.
    pub fn steer(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.next_heading = heading;
        }
    }

    /// Places food on a random free interior cell. Returns false when no
    /// free cell is left.
    fn spawn_food(&mut self) -> bool {
        let (xs, ys) = self.area.interior();
        if xs.is_empty() || ys.is_empty() {
            return false;
        }
        let budget = xs.len() * ys.len() * 4;
        for _ in 0..budget {
            let cell = Cell::new(self.rng.gen_range(xs.clone()), self.rng.gen_range(ys.clone()));
            if !self.body.contains(&cell) {
                self.food = cell;
                return true;
            }
        }

        let free: Vec<Cell> = ys
            .flat_map(|y| xs.clone().map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        match free.choose(&mut self.rng) {
            Some(&cell) => {
                self.food = cell;
                true
            }
            None => false,
        }
    }

    fn collided(&self) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        self.area.hits_border(head) || self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Moves the head one cell; grows on food, otherwise drops the tail.
    fn step(&mut self) {
        self.heading = self.next_heading;
        let Some(head) = self.head() else {
            return;
        };
        let (dx, dy) = self.heading.delta();
        let new_head = Cell::new(head.x + dx, head.y + dy);
        self.body.push_front(new_head);

        let mut board_full = false;
        if new_head == self.food {
            self.score += FOOD_POINTS;
            debug!("ate food at ({}, {}), length {}", new_head.x, new_head.y, self.body.len());
            board_full = !self.spawn_food();
        } else {
            self.body.pop_back();
        }

        if self.collided() {
            self.game_over = true;
            info!("snake crashed at ({}, {}) with score {}", new_head.x, new_head.y, self.score);
        } else if board_full {
            self.won = true;
            info!("snake filled the board with score {}", self.score);
        }
    }

    fn render_field(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let mut canvas = Canvas::new(width, height);
        let text = Style::default().fg(Color::Yellow);
        let area = self.area;

        let hud = match self.layout {
            SnakeLayout::FullScreen => {
                (2, 0, format!("Score: {} | Level: {}", self.score, self.difficulty.label()))
            }
            SnakeLayout::Boxed => (
                area.x0,
                area.y0 - 1,
                format!(" Score: {} | Level: {} ", self.score, self.difficulty.label()),
            ),
        };
        canvas.print(hud.0, hud.1, &hud.2, text);

        let border = Style::default().fg(Color::Cyan);
        for x in area.x0..area.x0 + area.width {
            canvas.put(x, area.y0, '#', border);
            canvas.put(x, area.y0 + area.height - 1, '#', border);
        }
        for y in area.y0..area.y0 + area.height {
            canvas.put(area.x0, y, '#', border);
            canvas.put(area.x0 + area.width - 1, y, '#', border);
        }

        canvas.put(self.food.x, self.food.y, '@', Style::default().fg(Color::Red));

        let body_style = Style::default().fg(Color::Green);
        for (i, cell) in self.body.iter().enumerate() {
            let ch = if i == 0 { 'O' } else { 'o' };
            canvas.put(cell.x, cell.y, ch, body_style);
        }

        let cx = area.x0 + area.width / 2;
        let cy = area.y0 + area.height / 2;
        if self.game_over || self.won {
            let headline = if self.won { "You Win!" } else { "Game Over!" };
            canvas.print(cx - 5, cy - 1, headline, text);
            canvas.print(cx - 8, cy, &format!("Final Score: {}", self.score), text);
            canvas.print(cx - 12, cy + 1, "Press any key to exit...", text);
        } else if self.paused {
            canvas.print(cx - 7, cy, "--- PAUSED ---", text);
        }

        canvas.into_lines()
    }
}

impl Game for Snake {
    fn update(&mut self) {
        if self.phase() != Phase::Running {
            return;
        }
        self.step();
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if !self.phase().is_finished() {
                    self.paused = !self.paused;
                }
            }
            _ => {
                if self.phase() != Phase::Running {
                    return;
                }
                match key.code {
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => self.steer(Heading::Up),
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => self.steer(Heading::Down),
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.steer(Heading::Left),
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.steer(Heading::Right),
                    _ => {}
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 200, 120)))
            .title(" Snake ")
            .title_style(Style::default().fg(Color::Rgb(120, 255, 160)).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (fw, fh) = (inner.width as usize, inner.height as usize);
        if fw > 0 && fh > 0 {
            frame.render_widget(Paragraph::new(self.render_field(fw, fh)), inner);
        }
    }

    fn reset(&mut self) {
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.won = false;
        self.init_body();
        self.spawn_food();
    }

    fn get_score(&self) -> u32 {
        self.score
    }

    fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    fn tick_rate(&self) -> Duration {
        self.difficulty.snake_tick()
    }
}
