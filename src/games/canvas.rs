use ratatui::prelude::*;

/// A character grid that games draw into before handing it to ratatui.
///
/// Writes outside the grid are dropped, so callers can draw entities that
/// are partially or fully off screen without checking first.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<(char, Style)>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![(' ', Style::default()); width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y][x] = (ch, style);
        }
    }

    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    /// Prints `text` so that it starts `offset` columns left of the center.
    pub fn print_centered(&mut self, y: i32, offset: i32, text: &str, style: Style) {
        let x = self.width() as i32 / 2 - offset;
        self.print(x, y, text, style);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).map(|&(ch, _)| ch)
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
