use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::{Difficulty, ShooterTuning};
use crate::games::canvas::Canvas;
use crate::games::{Game, Phase, MAX_ENTITIES};

const TICK: Duration = Duration::from_millis(40);
const PLAYER_LIVES: u32 = 3;
const PLAYER_STEP: i32 = 2;
const KILL_POINTS: u32 = 10;
const ENEMY_SPAWN_ROW: i32 = 3;

/// Same row and at most one column apart.
pub fn collides(ax: i32, ay: i32, bx: i32, by: i32) -> bool {
    ay == by && (ax - bx).abs() <= 1
}

#[derive(Clone, Debug)]
struct Ship {
    x: i32,
    y: i32,
    lives: u32,
    score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Invader {
    x: i32,
    y: i32,
    tick_counter: u32,
    speed_ticks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bullet {
    x: i32,
    y: i32,
    /// -1 for the ship's shots, +1 for invader fire.
    dy: i32,
}

/// Invaders drop in from the top and descend; the ship shoots them down
/// before they reach its row.
pub struct Shooter {
    ship: Ship,
    /// Newest first.
    enemies: VecDeque<Invader>,
    /// Newest first.
    bullets: VecDeque<Bullet>,
    difficulty: Difficulty,
    tuning: ShooterTuning,
    spawn_counter: u32,
    width: i32,
    height: i32,
    paused: bool,
    game_over: bool,
    rng: StdRng,
}

impl Shooter {
    pub fn new(difficulty: Difficulty, width: u16, height: u16, rng: StdRng) -> Self {
        let (width, height) = (width as i32, height as i32);
        Self {
            ship: Ship {
                x: width / 2,
                y: height - 3,
                lives: PLAYER_LIVES,
                score: 0,
            },
            enemies: VecDeque::new(),
            bullets: VecDeque::new(),
            difficulty,
            tuning: difficulty.shooter_tuning(),
            spawn_counter: 0,
            width,
            height,
            paused: false,
            game_over: false,
            rng,
        }
    }

    pub fn lives(&self) -> u32 {
        self.ship.lives
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    pub fn ship_position(&self) -> (i32, i32) {
        (self.ship.x, self.ship.y)
    }

    fn add_enemy(&mut self, x: i32, y: i32) {
        if self.enemies.len() >= MAX_ENTITIES {
            trace!("enemy cap reached, spawn at ({x}, {y}) skipped");
            return;
        }
        self.enemies.push_front(Invader {
            x,
            y,
            tick_counter: 0,
            speed_ticks: self.tuning.enemy_speed,
        });
    }

    fn add_bullet(&mut self, x: i32, y: i32, dy: i32) {
        if self.bullets.len() >= MAX_ENTITIES {
            trace!("bullet cap reached, shot at ({x}, {y}) skipped");
            return;
        }
        self.bullets.push_front(Bullet { x, y, dy });
    }

    fn spawn_enemy(&mut self) {
        if self.width <= 4 {
            return;
        }
        let x = self.rng.gen_range(2..self.width - 2);
        self.add_enemy(x, ENEMY_SPAWN_ROW);
    }

    fn lose_life(&mut self) {
        self.ship.lives = self.ship.lives.saturating_sub(1);
        if self.ship.lives == 0 {
            self.game_over = true;
            info!("game over with score {}", self.ship.score);
        } else {
            debug!("ship hit, {} lives left", self.ship.lives);
        }
    }

    fn update_enemies(&mut self) {
        let landing_row = self.height - 3;
        let mut i = 0;
        while i < self.enemies.len() {
            let enemy = &mut self.enemies[i];
            enemy.tick_counter += 1;
            if enemy.tick_counter >= enemy.speed_ticks {
                enemy.tick_counter = 0;
                enemy.y += 1;
            }
            let (ex, ey) = (enemy.x, enemy.y);

            if self.rng.gen_range(0..self.tuning.fire_chance) == 0 {
                self.add_bullet(ex, ey + 1, 1);
            }

            if ey >= landing_row {
                self.enemies.remove(i);
                self.lose_life();
                continue;
            }
            i += 1;
        }
    }

    fn update_bullets(&mut self) {
        let bottom = self.height - 2;
        for bullet in &mut self.bullets {
            bullet.y += bullet.dy;
        }
        self.bullets.retain(|b| b.y > 2 && b.y < bottom);
    }

    fn check_collisions(&mut self) {
        let mut i = 0;
        while i < self.bullets.len() {
            let bullet = self.bullets[i];
            if bullet.dy < 0 {
                let hit = self
                    .enemies
                    .iter()
                    .position(|e| collides(e.x, e.y, bullet.x, bullet.y));
                if let Some(j) = hit {
                    self.enemies.remove(j);
                    self.bullets.remove(i);
                    self.ship.score += KILL_POINTS;
                    continue;
                }
            } else if collides(bullet.x, bullet.y, self.ship.x, self.ship.y) {
                self.bullets.remove(i);
                self.lose_life();
                continue;
            }
            i += 1;
        }
    }

    /// Adopts a new viewport size and re-anchors the ship to the bottom.
    fn resize(&mut self, width: i32, height: i32) {
        debug!("shooter field resized to {width}x{height}");
        self.width = width;
        self.height = height;
        self.ship.y = height - 3;
        self.ship.x = self.ship.x.clamp(2, (width - 3).max(2));
    }

    fn render_field(&self) -> Vec<Line<'static>> {
        let mut canvas = Canvas::new(self.width.max(0) as usize, self.height.max(0) as usize);
        let text = Style::default().fg(Color::Cyan);

        for x in 0..self.width {
            canvas.put(x, 1, '-', text);
            canvas.put(x, self.height - 2, '-', text);
        }

        canvas.print(
            2,
            0,
            &format!("Score:{} Lives:{} Level:{}", self.ship.score, self.ship.lives, self.difficulty.label()),
            text,
        );
        canvas.print(2, self.height - 1, "Arrows Move | Space Shoot | P Pause | Q Quit", text);

        let ship_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        canvas.print(self.ship.x - 1, self.ship.y, "<^>", ship_style);

        let enemy_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        for enemy in &self.enemies {
            canvas.put(enemy.x, enemy.y, 'W', enemy_style);
        }

        for bullet in &self.bullets {
            if bullet.dy < 0 {
                canvas.put(bullet.x, bullet.y, '|', Style::default().fg(Color::Yellow));
            } else {
                canvas.put(bullet.x, bullet.y, '!', Style::default().fg(Color::Magenta));
            }
        }

        let mid = self.height / 2;
        let banner = text.add_modifier(Modifier::BOLD);
        if self.game_over {
            canvas.print_centered(mid, 5, "GAME OVER", banner);
            canvas.print_centered(mid + 1, 8, &format!("Final Score: {}", self.ship.score), banner);
            canvas.print_centered(mid + 2, 12, "Press any key to exit...", banner);
        } else if self.paused {
            canvas.print_centered(mid, 5, "PAUSED", banner);
        }

        canvas.into_lines()
    }
}

impl Game for Shooter {
    fn update(&mut self) {
        if self.game_over || self.paused {
            return;
        }
        self.spawn_counter += 1;
        if self.spawn_counter >= self.tuning.spawn_rate {
            self.spawn_enemy();
            self.spawn_counter = 0;
        }
        self.update_enemies();
        self.update_bullets();
        self.check_collisions();
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if !self.game_over {
                    self.paused = !self.paused;
                }
            }
            _ => {
                if self.game_over || self.paused {
                    return;
                }
                match key.code {
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                        if self.ship.x > 2 {
                            self.ship.x -= PLAYER_STEP;
                        }
                    }
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                        if self.ship.x < self.width - 3 {
                            self.ship.x += PLAYER_STEP;
                        }
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.add_bullet(self.ship.x, self.ship.y - 1, -1);
                    }
                    _ => {}
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
            .title(" ASCII Shooter ")
            .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (fw, fh) = (inner.width as i32, inner.height as i32);
        if fw != self.width || fh != self.height {
            self.resize(fw, fh);
        }
        if fw > 0 && fh > 0 {
            frame.render_widget(Paragraph::new(self.render_field()), inner);
        }
    }

    fn reset(&mut self) {
        self.ship = Ship {
            x: self.width / 2,
            y: self.height - 3,
            lives: PLAYER_LIVES,
            score: 0,
        };
        self.enemies.clear();
        self.bullets.clear();
        self.spawn_counter = 0;
        self.paused = false;
        self.game_over = false;
    }

    fn get_score(&self) -> u32 {
        self.ship.score
    }

    fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    fn tick_rate(&self) -> Duration {
        TICK
    }
}
