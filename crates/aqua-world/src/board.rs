//! Character grid for the tank.

use aqua_core::geometry::{
    check_dimensions, crab_row_index, floor_row, max_sprite_x, WATERLINE_ROW,
};
use aqua_core::{glyph, Position, Result};
use serde::{Deserialize, Serialize};

/// How a sprite's rows are laid onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Rows run down from the entity's y
    Top,
    /// Rows run up from the crab baseline, whatever the entity's y
    Floor,
}

/// Anything the board can draw and erase
pub trait Drawable {
    fn position(&self) -> Position;
    fn set_x(&mut self, x: i32);
    /// Footprint as (width, height)
    fn size(&self) -> (i32, i32);
    fn anchor(&self) -> Anchor;
    /// Sprite rows in the entity's current heading
    fn glyph_rows(&self) -> Vec<String>;
}

/// Rectangle covered by a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The tank as a grid of glyphs, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    cells: Vec<char>,
}

impl Board {
    /// Build an empty tank: side walls, waterline and floor
    pub fn build(width: i32, height: i32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self::blank(width, height))
    }

    /// Dimensions must already be validated
    pub(crate) fn blank(width: i32, height: i32) -> Self {
        let mut board = Self {
            width,
            height,
            cells: vec![glyph::EMPTY; width as usize * height as usize],
        };

        for x in 1..width - 1 {
            board.set(x, WATERLINE_ROW, glyph::WATER);
        }
        for y in 0..height - 1 {
            board.set(0, y, glyph::WALL);
            board.set(width - 1, y, glyph::WALL);
        }

        let floor = floor_row(height);
        board.set(0, floor, glyph::FLOOR_LEFT);
        for x in 1..width - 1 {
            board.set(x, floor, glyph::FLOOR);
        }
        board.set(width - 1, floor, glyph::FLOOR_RIGHT);

        board
    }

    /// Glyph at (x, y), `None` outside the board
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|index| self.cells[index])
    }

    fn set(&mut self, x: i32, y: i32, cell: char) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = cell;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(glyph::WALL) | None)
    }

    /// Walls, animal glyphs and anything off the board block movement
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(glyph::WALL) | Some(glyph::ANIMAL) | None)
    }

    /// Board row of sprite row `row` for the given entity
    fn sprite_row<D: Drawable + ?Sized>(&self, entity: &D, row: i32) -> i32 {
        let (_, height) = entity.size();
        match entity.anchor() {
            Anchor::Top => entity.position().y + row,
            Anchor::Floor => crab_row_index(self.height, height, row),
        }
    }

    /// Rectangle the entity currently covers
    pub fn footprint<D: Drawable + ?Sized>(&self, entity: &D) -> Footprint {
        let (width, height) = entity.size();
        Footprint {
            x: entity.position().x,
            y: self.sprite_row(entity, 0),
            width,
            height,
        }
    }

    /// Write the entity's glyphs. Pulls it back inside the right wall first.
    pub fn draw<D: Drawable + ?Sized>(&mut self, entity: &mut D) {
        let (width, _) = entity.size();
        if self.width - entity.position().x < width + 1 {
            entity.set_x(max_sprite_x(self.width, width));
        }

        let x = entity.position().x;
        for (i, row) in entity.glyph_rows().iter().enumerate() {
            let y = self.sprite_row(entity, i as i32);
            for (dx, cell) in row.chars().enumerate() {
                self.set(x + dx as i32, y, cell);
            }
        }
    }

    /// Blank the entity's footprint, keeping the waterline intact
    pub fn erase<D: Drawable + ?Sized>(&mut self, entity: &D) {
        let footprint = self.footprint(entity);
        for y in footprint.y..footprint.bottom() {
            let fill = if y == WATERLINE_ROW {
                glyph::WATER
            } else {
                glyph::EMPTY
            };
            for x in footprint.x..footprint.right() {
                self.set(x, y, fill);
            }
        }
    }

    /// True when no animal glyph lies inside the rectangle.
    ///
    /// Rows outside the board are skipped; a column range entirely outside
    /// the board is never free.
    pub fn is_free(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        let x0 = x.max(0);
        let x1 = (x + width).min(self.width);
        if x0 >= x1 {
            return false;
        }

        for row in y..y + height {
            if row < 0 || row >= self.height {
                continue;
            }
            if (x0..x1).any(|col| self.get(col, row) == Some(glyph::ANIMAL)) {
                return false;
            }
        }
        true
    }

    /// One string per row, top to bottom, one glyph per cell
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Cells of one row, `None` outside the board
    pub fn row(&self, y: i32) -> Option<&[char]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }
}
