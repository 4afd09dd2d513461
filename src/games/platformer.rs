use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::games::canvas::Canvas;
use crate::games::{Game, Phase, MAX_ENTITIES};

const TICK: Duration = Duration::from_millis(30);
const GRAVITY: f32 = 0.60;
const JUMP_VELOCITY: f32 = -8.0;
const VELOCITY_SCALE: f32 = 0.1; // vy is integrated at a tenth per tick
const MOVE_SPEED: f32 = 1.0;
const FOOT_OFFSET: f32 = 0.9;
const STOMP_TOLERANCE: f32 = 0.75;
const STOMP_BOUNCE: f32 = 0.6;
const COIN_POINTS: u32 = 5;
const STOMP_POINTS: u32 = 20;
const START_LIVES: u32 = 3;

/// `#` platform, `=` ground, `o` coin, `E` patrolling enemy, `>` exit.
pub const LEVEL_ONE: &[&str] = &[
    "                                                                                ",
    "                                                                                ",
    "                                                                                ",
    "                                                                                ",
    "                                                                                ",
    "                                                                                ",
    "                                                                                ",
    "                           o                                                    ",
    "                #####                                                           ",
    "                                                                                ",
    "         o                                                                      ",
    "    #######                                                    >               ",
    "                                                                                ",
    "                              ###                                             ",
    "                                                                                ",
    "                o                                                               ",
    "           #####                                                                ",
    "                                                                                ",
    "                                                             E                ",
    "============================================     =============================",
    "                                                                                ",
    "                                                                                ",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Platform,
    Ground,
    Coin,
    Exit,
    Enemy,
}

impl Tile {
    fn from_char(ch: char) -> Self {
        match ch {
            '#' => Tile::Platform,
            '=' => Tile::Ground,
            'o' => Tile::Coin,
            '>' => Tile::Exit,
            'E' => Tile::Enemy,
            _ => Tile::Empty,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Platform | Tile::Ground)
    }
}

/// Mutable tile grid. Reads outside it yield [`Tile::Empty`], writes are
/// dropped.
#[derive(Clone, Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Parses rows of map text, padding short rows with empty tiles.
    pub fn parse(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut tiles = vec![Tile::Empty; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                tiles[y * width + x] = Tile::from_char(ch);
            }
        }
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.index(x, y).map_or(Tile::Empty, |i| self.tiles[i])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_solid()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Where the player enters: two rows above the first solid tile found
    /// scanning from the top, never above row 1.
    fn spawn_point(&self) -> (f32, f32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.is_solid(x, y) {
                    return (x as f32 + 0.5, (y - 2).max(1) as f32);
                }
            }
        }
        (2.5, 2.0)
    }
}

fn tile_of(v: f32) -> i32 {
    v.floor() as i32
}

#[derive(Clone, Debug)]
struct Player {
    x: f32,
    y: f32,
    vy: f32,
    facing: i32,
    on_ground: bool,
    lives: u32,
    score: u32,
}

impl Player {
    fn new((x, y): (f32, f32)) -> Self {
        Self {
            x,
            y,
            vy: 0.0,
            facing: 1,
            on_ground: false,
            lives: START_LIVES,
            score: 0,
        }
    }
}

#[derive(Clone, Debug)]
struct Enemy {
    x: i32,
    y: i32,
    dir: i32,
    left_bound: i32,
    right_bound: i32,
}

pub struct Platformer {
    /// Pristine copy of the level, restored on every level reset.
    level: TileMap,
    map: TileMap,
    player: Player,
    enemies: Vec<Enemy>,
    spawn: (f32, f32),
    paused: bool,
    game_over: bool,
    won: bool,
    rng: StdRng,
}

impl Platformer {
    pub fn new(rng: StdRng) -> Self {
        Self::with_level(LEVEL_ONE, rng)
    }

    pub fn with_level(rows: &[&str], rng: StdRng) -> Self {
        let level = TileMap::parse(rows);
        let spawn = level.spawn_point();
        let mut game = Self {
            map: level.clone(),
            level,
            player: Player::new(spawn),
            enemies: Vec::new(),
            spawn,
            paused: false,
            game_over: false,
            won: false,
            rng,
        };
        game.spawn_enemies();
        game
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn position(&self) -> (f32, f32) {
        (self.player.x, self.player.y)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Turns every `E` marker into a patrolling enemy and clears the marker.
    fn spawn_enemies(&mut self) {
        let width = self.map.width() as i32;
        for y in 0..self.map.height() as i32 {
            for x in 0..width {
                if self.map.get(x, y) != Tile::Enemy {
                    continue;
                }
                if self.enemies.len() < MAX_ENTITIES {
                    let mut left = x;
                    while left > 0 && self.map.get(left - 1, y) == Tile::Empty {
                        left -= 1;
                    }
                    let mut right = x;
                    while right + 1 < width && self.map.get(right + 1, y) == Tile::Empty {
                        right += 1;
                    }
                    let dir = if self.rng.gen_bool(0.5) { 1 } else { -1 };
                    self.enemies.push(Enemy { x, y, dir, left_bound: left, right_bound: right });
                } else {
                    trace!("enemy cap reached, dropping marker at ({x}, {y})");
                }
                self.map.set(x, y, Tile::Empty);
            }
        }
        debug!("spawned {} enemies", self.enemies.len());
    }

    fn respawn_player(&mut self) {
        let (x, y) = self.spawn;
        self.player.x = x;
        self.player.y = y;
        self.player.vy = 0.0;
        self.player.facing = 1;
        self.player.on_ground = false;
    }

    /// Restores coins and enemies and puts the player back at the spawn
    /// point. Lives and score carry over.
    fn reset_level(&mut self) {
        self.map = self.level.clone();
        self.enemies.clear();
        self.spawn_enemies();
        self.respawn_player();
        info!("level reset, {} lives left", self.player.lives);
    }

    fn lose_life(&mut self) {
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 {
            self.game_over = true;
            info!("game over with score {}", self.player.score);
        } else {
            info!("life lost, {} left", self.player.lives);
        }
    }

    fn column_blocked(&self, column: i32) -> bool {
        let top = tile_of(self.player.y);
        let bottom = tile_of(self.player.y + FOOT_OFFSET);
        self.map.is_solid(column, top) || self.map.is_solid(column, bottom)
    }

    fn move_left(&mut self) {
        let nx = self.player.x - MOVE_SPEED;
        let left_tile = tile_of(nx - 1.0);
        if self.column_blocked(left_tile) {
            self.player.x = (left_tile + 1) as f32 + 1.0;
        } else {
            self.player.x = nx;
        }
        self.player.facing = -1;
    }

    fn move_right(&mut self) {
        let nx = self.player.x + MOVE_SPEED;
        let right_tile = tile_of(nx + 1.0);
        if self.column_blocked(right_tile) {
            self.player.x = (right_tile - 1) as f32 - 1.0;
        } else {
            self.player.x = nx;
        }
        self.player.facing = 1;
    }

    /// True while resting on a tile. Covers the tick after landing, when
    /// gravity has lifted `on_ground` but the feet are still on the tile.
    fn supported(&self) -> bool {
        if self.player.on_ground {
            return true;
        }
        let below = tile_of(self.player.y + FOOT_OFFSET) + 1;
        self.player.vy >= 0.0
            && (self.map.is_solid(tile_of(self.player.x - 1.0), below)
                || self.map.is_solid(tile_of(self.player.x + 1.0), below))
    }

    fn jump(&mut self) {
        if self.supported() {
            self.player.vy = JUMP_VELOCITY;
            self.player.on_ground = false;
        }
    }

    fn update_physics(&mut self) {
        self.player.vy += GRAVITY;
        let new_y = self.player.y + self.player.vy * VELOCITY_SCALE;

        let left = tile_of(self.player.x - 1.0);
        let right = tile_of(self.player.x + 1.0);

        if self.player.vy >= 0.0 {
            let foot = tile_of(new_y + FOOT_OFFSET);
            if self.map.is_solid(left, foot) || self.map.is_solid(right, foot) {
                self.player.on_ground = true;
                self.player.vy = 0.0;
                self.player.y = foot as f32 - 1.0;
            } else {
                self.player.on_ground = false;
                self.player.y = new_y;
            }
        } else {
            let head = tile_of(new_y);
            if self.map.is_solid(left, head) || self.map.is_solid(right, head) {
                self.player.vy = 0.0;
                self.player.y = head as f32 + 1.0;
            } else {
                self.player.on_ground = false;
                self.player.y = new_y;
            }
        }

        if self.player.y > self.map.height() as f32 - 1.0 {
            debug!("fell off the map at x={:.1}", self.player.x);
            self.lose_life();
            if !self.game_over {
                self.reset_level();
            }
            return;
        }

        let cx = tile_of(self.player.x);
        let cy = tile_of(self.player.y + FOOT_OFFSET);
        match self.map.get(cx, cy) {
            Tile::Coin => {
                self.player.score += COIN_POINTS;
                self.map.set(cx, cy, Tile::Empty);
                debug!("coin at ({cx}, {cy}), score {}", self.player.score);
            }
            Tile::Exit => {
                self.won = true;
                info!("level cleared with score {}", self.player.score);
            }
            _ => {}
        }
    }

    fn update_enemies(&mut self) {
        for enemy in &mut self.enemies {
            let mut nx = enemy.x + enemy.dir;
            if nx < enemy.left_bound || nx > enemy.right_bound {
                enemy.dir = -enemy.dir;
                nx = enemy.x + enemy.dir;
            }
            if self.map.is_solid(nx, enemy.y) {
                enemy.dir = -enemy.dir;
            } else {
                enemy.x = nx;
            }
        }
    }

    fn check_enemy_collisions(&mut self) {
        let ptx = tile_of(self.player.x);
        let pty = tile_of(self.player.y + 0.5);
        let mut i = 0;
        while i < self.enemies.len() {
            let (ex, ey) = (self.enemies[i].x, self.enemies[i].y);
            if (ex - ptx).abs() <= 1 && (ey - pty).abs() <= 1 {
                let feet = self.player.y + FOOT_OFFSET;
                if self.player.vy > 0.0 && feet - (ey as f32) < STOMP_TOLERANCE {
                    self.enemies.remove(i);
                    self.player.score += STOMP_POINTS;
                    self.player.vy = JUMP_VELOCITY * STOMP_BOUNCE;
                    self.player.on_ground = false;
                    debug!("stomped enemy at ({ex}, {ey})");
                    continue;
                }
                self.lose_life();
                if !self.game_over {
                    self.respawn_player();
                }
                return;
            }
            i += 1;
        }
    }

    /// Keeps the player a third of the way into the view, clamped to the map.
    fn camera_x(&self, view_width: i32) -> i32 {
        let map_width = self.map.width() as i32;
        if map_width <= view_width {
            return 0;
        }
        let target = tile_of(self.player.x) - view_width / 3;
        target.clamp(0, map_width - view_width)
    }

    fn render_field(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let mut canvas = Canvas::new(width, height);
        let cam = self.camera_x(width as i32);

        let tile_style = Style::default().fg(Color::White);
        let coin_style = Style::default().fg(Color::Magenta);
        let exit_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

        for row in 0..height.min(self.map.height()) {
            for col in 0..width {
                let (ch, style) = match self.map.get(cam + col as i32, row as i32) {
                    Tile::Platform => ('#', tile_style),
                    Tile::Ground => ('=', tile_style),
                    Tile::Coin => ('o', coin_style),
                    Tile::Exit => ('>', exit_style),
                    Tile::Empty | Tile::Enemy => continue,
                };
                canvas.put(col as i32, row as i32, ch, style);
            }
        }

        let enemy_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        for enemy in &self.enemies {
            canvas.put(enemy.x - cam, enemy.y, 'E', enemy_style);
        }

        let player_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let sprite = if self.player.facing < 0 { "<^<" } else { ">^>" };
        canvas.print(
            tile_of(self.player.x) - 1 - cam,
            tile_of(self.player.y),
            sprite,
            player_style,
        );

        let mid = height as i32 / 2;
        let banner = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        if self.won || self.game_over {
            let msg = if self.won { " YOU WIN! " } else { " GAME OVER " };
            canvas.print_centered(mid, 5, msg, banner);
            canvas.print_centered(mid + 1, 17, "Press 'q' to quit or 'r' to restart", banner);
        } else if self.paused {
            canvas.print_centered(mid, 6, "== PAUSED ==", banner);
        }

        canvas.into_lines()
    }
}

impl Game for Platformer {
    fn update(&mut self) {
        if self.phase() != Phase::Running {
            return;
        }
        self.update_physics();
        if self.phase() != Phase::Running {
            return;
        }
        self.update_enemies();
        self.check_enemy_collisions();
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
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.move_left(),
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.move_right(),
                    KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.jump()
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
            .border_style(Style::default().fg(Color::Rgb(220, 180, 60)))
            .title(" ASCII Mario ")
            .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Level
                Constraint::Length(1), // HUD
            ])
            .split(inner);

        let fw = chunks[0].width as usize;
        let fh = chunks[0].height as usize;
        if fw > 0 && fh > 0 {
            frame.render_widget(Paragraph::new(self.render_field(fw, fh)), chunks[0]);
        }

        let hud = Line::from(vec![
            Span::styled(
                format!(" Score: {} ", self.player.score),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" Lives: {} ", self.player.lives),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" Pos: ({:.1},{:.1}) ", self.player.x, self.player.y),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(" P pause  Q quit ", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(hud), chunks[1]);
    }

    /// Full restart: fresh map, full lives, zero score.
    fn reset(&mut self) {
        self.map = self.level.clone();
        self.player = Player::new(self.spawn);
        self.enemies.clear();
        self.paused = false;
        self.game_over = false;
        self.won = false;
        self.spawn_enemies();
        info!("platformer restarted");
    }

    fn get_score(&self) -> u32 {
        self.player.score
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
        TICK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;

    const FLAT: &[&str] = &[
        "          ",
        "          ",
        "          ",
        "          ",
        "==========",
    ];

    fn game(rows: &[&str]) -> Platformer {
        Platformer::with_level(rows, StdRng::seed_from_u64(7))
    }

    fn stand(game: &mut Platformer, x: f32, y: f32) {
        game.player.x = x;
        game.player.y = y;
        game.player.vy = 0.0;
        game.player.on_ground = true;
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_above_the_first_solid_tile() {
        let g = Platformer::new(StdRng::seed_from_u64(1));
        assert_eq!(g.position(), (16.5, 6.0));
        assert_eq!(g.get_score(), 0);
        assert_eq!(g.lives(), START_LIVES);
        assert_eq!(g.enemy_count(), 1);
        assert_eq!(g.phase(), Phase::Running);
    }

    #[test]
    fn enemy_markers_are_consumed_at_spawn() {
        let g = Platformer::new(StdRng::seed_from_u64(1));
        for y in 0..g.map().height() as i32 {
            for x in 0..g.map().width() as i32 {
                assert_ne!(g.map().get(x, y), Tile::Enemy);
            }
        }
    }

    #[test]
    fn map_reads_outside_are_empty() {
        let map = TileMap::parse(&["=", "##"]);
        assert_eq!(map.width(), 2);
        assert_eq!(map.get(1, 0), Tile::Empty);
        assert_eq!(map.get(-1, 0), Tile::Empty);
        assert_eq!(map.get(0, 9), Tile::Empty);
        assert!(map.is_solid(1, 1));
    }

    #[test]
    fn falling_player_lands_one_row_above_solid_tile() {
        let mut g = game(FLAT);
        g.player.x = 4.5;
        g.player.y = 2.95;
        g.player.vy = 1.0;
        g.update();
        assert_eq!(g.player.y, 3.0);
        assert_eq!(g.player.vy, 0.0);
        assert!(g.player.on_ground);
    }

    #[test]
    fn rising_player_bumps_head_on_ceiling() {
        let mut g = game(&["          ", "##########", "          ", "          ", "=========="]);
        g.player.x = 4.5;
        g.player.y = 2.5;
        g.player.vy = JUMP_VELOCITY;
        g.update_physics();
        assert_eq!(g.player.vy, 0.0);
        assert_eq!(g.player.y, 2.0);
    }

    #[test]
    fn walking_onto_a_coin_scores_five_and_clears_it() {
        let mut g = game(&["          ", "          ", "          ", "     o    ", "=========="]);
        stand(&mut g, 4.5, 3.0);
        g.handle_input(key(KeyCode::Right));
        assert_eq!(g.player.x, 5.5);
        g.update();
        assert_eq!(g.get_score(), COIN_POINTS);
        assert_eq!(g.map().get(5, 3), Tile::Empty);
    }

    #[test]
    fn walls_block_horizontal_movement() {
        let mut g = game(&["          ", "          ", "          ", "       #  ", "=========="]);
        stand(&mut g, 5.5, 3.0);
        g.handle_input(key(KeyCode::Char('d')));
        assert_eq!(g.player.x, 5.0);
        assert_eq!(g.player.facing, 1);
        g.handle_input(key(KeyCode::Char('a')));
        assert_eq!(g.player.x, 4.0);
        assert_eq!(g.player.facing, -1);
    }

    #[test]
    fn jump_needs_ground_underfoot() {
        let mut g = game(FLAT);
        g.player.x = 4.5;
        g.player.y = 1.0;
        g.player.vy = 0.5;
        g.player.on_ground = false;
        g.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(g.player.vy, 0.5);

        stand(&mut g, 4.5, 3.0);
        g.update();
        g.handle_input(key(KeyCode::Up));
        assert_eq!(g.player.vy, JUMP_VELOCITY);
    }

    #[test]
    fn falling_onto_an_enemy_stomps_it() {
        let mut g = game(&["          ", "          ", "          ", "     E    ", "=========="]);
        assert_eq!(g.enemy_count(), 1);
        g.player.x = 5.5;
        g.player.y = 2.0;
        g.player.vy = 1.0;
        g.update();
        assert_eq!(g.enemy_count(), 0);
        assert_eq!(g.get_score(), STOMP_POINTS);
        assert!(g.player.vy < 0.0);
        assert_eq!(g.lives(), START_LIVES);
    }

    #[test]
    fn side_contact_costs_a_life_and_respawns() {
        let mut g = game(&["          ", "          ", "          ", "     E    ", "=========="]);
        stand(&mut g, 5.5, 3.0);
        g.update();
        assert_eq!(g.lives(), START_LIVES - 1);
        assert_eq!(g.position(), g.spawn);
        assert_eq!(g.player.vy, 0.0);
        assert_eq!(g.enemy_count(), 1);
    }

    #[test]
    fn falling_off_the_map_resets_the_level() {
        let mut g = game(&["          ", "     o    ", "          ", "          ", "====  ===="]);
        g.map.set(5, 1, Tile::Empty);
        g.player.score = 5;
        g.player.x = 4.5;
        g.player.y = 4.5;
        g.update();
        assert_eq!(g.lives(), START_LIVES - 1);
        assert_eq!(g.position(), g.spawn);
        assert_eq!(g.map().get(5, 1), Tile::Coin);
        assert_eq!(g.get_score(), 5);
    }

    #[test]
    fn losing_the_last_life_ends_the_game() {
        let mut g = game(&["          ", "          ", "          ", "          ", "====  ===="]);
        g.player.lives = 1;
        g.player.x = 4.5;
        g.player.y = 4.5;
        g.update();
        assert_eq!(g.lives(), 0);
        assert_eq!(g.phase(), Phase::GameOver);
        assert!(g.is_game_over());

        g.reset();
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!(g.lives(), START_LIVES);
        assert_eq!(g.get_score(), 0);
    }

    #[test]
    fn reaching_the_exit_wins() {
        let mut g = game(&["          ", "          ", "          ", "      >   ", "=========="]);
        stand(&mut g, 6.5, 3.0);
        g.update();
        assert_eq!(g.phase(), Phase::Won);

        let before = g.position();
        g.update();
        g.handle_input(key(KeyCode::Left));
        assert_eq!(g.position(), before);
    }

    #[test]
    fn enemies_stay_inside_patrol_bounds() {
        let mut g = game(&["          ", "          ", "          ", "  #  E  # ", "=========="]);
        assert_eq!(g.enemies[0].left_bound, 3);
        assert_eq!(g.enemies[0].right_bound, 7);
        for _ in 0..40 {
            g.update_enemies();
            let x = g.enemies[0].x;
            assert!((3..=7).contains(&x), "enemy left its patrol at {x}");
        }
    }

    #[test]
    fn pause_freezes_the_world_and_ignores_moves() {
        let mut g = game(FLAT);
        g.handle_input(key(KeyCode::Char('p')));
        assert_eq!(g.phase(), Phase::Paused);
        let before = g.position();
        g.handle_input(key(KeyCode::Right));
        g.update();
        assert_eq!(g.position(), before);
        g.handle_input(key(KeyCode::Char('P')));
        assert_eq!(g.phase(), Phase::Running);
    }

    #[test]
    fn camera_follows_and_clamps() {
        let mut g = Platformer::new(StdRng::seed_from_u64(1));
        assert_eq!(g.camera_x(120), 0);
        g.player.x = 5.0;
        assert_eq!(g.camera_x(30), 0);
        g.player.x = 40.0;
        assert_eq!(g.camera_x(30), 30);
        g.player.x = 79.0;
        assert_eq!(g.camera_x(30), g.map().width() as i32 - 30);
    }
}
