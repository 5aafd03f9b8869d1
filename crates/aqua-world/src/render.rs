//! Text rendering with name tags and hunger bars.

use crate::tank::Tank;
use aqua_core::geometry::floor_row;
use aqua_core::{glyph, Category};
use std::collections::BTreeMap;

/// One printed line of the tank view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    /// Board row shown on this line, `None` for label lines
    pub board_row: Option<i32>,
}

/// `[***..] (3)` style hunger bar
pub fn hunger_bar(food: i32, length: usize) -> String {
    let filled = (food.max(0) as usize).min(length);
    format!(
        "[{}{}] ({})",
        "*".repeat(filled),
        ".".repeat(length - filled),
        food
    )
}

/// Board rows with cells spaced out, plus label lines for every animal.
///
/// The hunger bar sits on a label line above the animal and the name tag on
/// one below it. Crabs have the floor below them, so their name tag goes
/// above the hunger bar instead.
pub fn display_lines(tank: &Tank) -> Vec<DisplayLine> {
    let board = tank.board();
    let bar_length = tank.config().lifecycle.hunger_bar_length;
    let mut labels: BTreeMap<i32, Vec<(i32, String)>> = BTreeMap::new();

    for animal in tank.animals().iter().filter(|a| a.is_alive()) {
        let footprint = board.footprint(animal);
        let top = footprint.y;
        let x = footprint.x;

        labels
            .entry(top)
            .or_default()
            .push((x, hunger_bar(animal.food, bar_length)));

        let tag = format!("{} ({})", animal.name, animal.age);
        let below = top + footprint.height;
        if below < floor_row(board.height) {
            labels.entry(below).or_default().push((x, tag));
        } else if animal.category() == Category::Crab && top >= 1 {
            labels.entry(top - 1).or_default().push((x, tag));
        }
    }

    let line_width = (2 * board.width - 1) as usize;
    let mut lines = Vec::with_capacity(board.height as usize * 2);

    for y in 0..board.height {
        if let Some(row_labels) = labels.get(&y) {
            let mut chars = vec![' '; line_width];
            for (x, text) in row_labels {
                let start = 2 * *x as usize;
                for (i, c) in text.chars().enumerate() {
                    if let Some(slot) = chars.get_mut(start + i) {
                        *slot = c;
                    }
                }
            }
            chars[0] = glyph::WALL;
            chars[line_width - 1] = glyph::WALL;
            lines.push(DisplayLine {
                text: chars.into_iter().collect(),
                board_row: None,
            });
        }

        let cells = board.row(y).unwrap_or_default();
        let text = cells
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(DisplayLine {
            text,
            board_row: Some(y),
        });
    }

    lines
}
