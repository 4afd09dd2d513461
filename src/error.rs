use thiserror::Error;

use crate::config::Variant;
use crate::games::platformer::LEVEL_ONE;

/// Smallest viewport every game can lay itself out in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Border rows plus the HUD line around the platformer's level.
const PLATFORMER_CHROME_ROWS: u16 = 3;

/// Colors a terminal must offer before `shooter-strict` agrees to start.
pub const MIN_COLORS: u16 = 8;

#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("your terminal does not support color ({found} colors available, {} required)", MIN_COLORS)]
    ColorUnsupported { found: u16 },

    #[error("terminal is {width}x{height}, this game needs at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

/// The platformer has no vertical scrolling, so the whole level must fit.
pub fn min_terminal_size(variant: Variant) -> (u16, u16) {
    match variant {
        Variant::Platformer => {
            let level_rows = LEVEL_ONE.len() as u16 + PLATFORMER_CHROME_ROWS;
            (MIN_WIDTH, level_rows.max(MIN_HEIGHT))
        }
        _ => (MIN_WIDTH, MIN_HEIGHT),
    }
}

/// Rejects viewports too small for the variant's fixed layout.
pub fn check_terminal_size(variant: Variant, width: u16, height: u16) -> Result<(), ArcadeError> {
    let (min_width, min_height) = min_terminal_size(variant);
    if width < min_width || height < min_height {
        return Err(ArcadeError::TerminalTooSmall { width, height, min_width, min_height });
    }
    Ok(())
}

/// Rejects terminals with fewer than [`MIN_COLORS`] colors.
pub fn check_color_support(found: u16) -> Result<(), ArcadeError> {
    if found < MIN_COLORS {
        return Err(ArcadeError::ColorUnsupported { found });
    }
    Ok(())
}
