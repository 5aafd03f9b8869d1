//! Tank layout constants and row formulas.
//!
//! Rows are 0-based from the top of the tank. The last row is always the
//! floor, the row above it is the crab baseline, and fish swim between the
//! waterline and the top of the crab zone.

use crate::error::{Error, Result};

/// Smallest tank width accepted by the board
pub const MIN_TANK_WIDTH: i32 = 40;
/// Smallest tank height accepted by the board
pub const MIN_TANK_HEIGHT: i32 = 25;
/// Largest tank width accepted by the board
pub const MAX_TANK_WIDTH: i32 = 1000;
/// Largest tank height accepted by the board
pub const MAX_TANK_HEIGHT: i32 = 1000;

/// Row where the water surface is drawn. Fish never rise above it.
pub const WATERLINE_ROW: i32 = 3;
/// Rows reserved for the floor at the bottom
pub const FLOOR_ROW_OFFSET: i32 = 1;

/// Bounds every fish fits in
pub const MAX_FISH_WIDTH: i32 = 8;
pub const MAX_FISH_HEIGHT: i32 = 5;
/// Bounds every crab fits in
pub const MAX_CRAB_WIDTH: i32 = 7;
pub const MAX_CRAB_HEIGHT: i32 = 4;

pub const SCALAR_WIDTH: i32 = 8;
pub const SCALAR_HEIGHT: i32 = 5;
pub const MOLY_WIDTH: i32 = 8;
pub const MOLY_HEIGHT: i32 = 3;
pub const OCYPODE_WIDTH: i32 = 7;
pub const OCYPODE_HEIGHT: i32 = 4;
pub const SHRIMP_WIDTH: i32 = 7;
pub const SHRIMP_HEIGHT: i32 = 3;

/// Reject tanks outside the supported size range
pub fn check_dimensions(width: i32, height: i32) -> Result<()> {
    let width_ok = (MIN_TANK_WIDTH..=MAX_TANK_WIDTH).contains(&width);
    let height_ok = (MIN_TANK_HEIGHT..=MAX_TANK_HEIGHT).contains(&height);
    if width_ok && height_ok {
        return Ok(());
    }
    Err(Error::InvalidDimensions {
        width,
        height,
        min_width: MIN_TANK_WIDTH,
        min_height: MIN_TANK_HEIGHT,
        max_width: MAX_TANK_WIDTH,
        max_height: MAX_TANK_HEIGHT,
    })
}

/// Row of the floor line (`\___/`)
pub fn floor_row(tank_height: i32) -> i32 {
    tank_height - FLOOR_ROW_OFFSET
}

/// Last content row, just above the floor. Crabs stand on it.
pub fn content_bottom_row(tank_height: i32) -> i32 {
    tank_height - FLOOR_ROW_OFFSET - 1
}

/// Board row of line `row_from_top` of a crab sprite of `crab_height` rows
pub fn crab_row_index(tank_height: i32, crab_height: i32, row_from_top: i32) -> i32 {
    content_bottom_row(tank_height) - (crab_height - 1) + row_from_top
}

/// Top row of the crab zone, used by collision escape probes
pub fn crab_zone_top_row(tank_height: i32) -> i32 {
    tank_height - MAX_CRAB_HEIGHT - 1
}

/// Row a fish footprint must end above (exclusive bottom of the water column)
pub fn fish_lowest_y(tank_height: i32) -> i32 {
    tank_height - MAX_CRAB_HEIGHT - 1
}

/// Rightmost x at which a sprite of `sprite_width` still clears the right wall
pub fn max_sprite_x(tank_width: i32, sprite_width: i32) -> i32 {
    tank_width - sprite_width - 1
}
