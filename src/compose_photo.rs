//! Photo and border frame compositor
//!
//! Fills the pixel buffer for one photo slot: first the photo's own
//! 14x16 tile body at a 16 pixel margin, then, when a ROM is available,
//! the border frame around it. The border is drawn from tile indices in
//! the frame's border map: 4 edge tiles per body tile row on the left
//! and right, and 20 columns by 4 rows across the top and bottom bands.
//!
//! This program is unlicensed and dedicated to the public domain.

use crate::draw_tile::{draw_span, HEIGHT, PixelBuffer, TILE_SIZE, WIDTH};
use crate::parse_rom::ParseRom;
use crate::parse_sav::{ParseSav, PHOTO_TILE_COLS, PHOTO_TILE_ROWS};

/// Pixel margin the border occupies around the photo body
const MARGIN: usize = 16;

/// Tile columns in the top and bottom border bands
const TOP_BOTTOM_COLS: usize = 20;

/// Distance between consecutive index rows in the border map
const TOP_BOTTOM_STRIDE: usize = 0x14;

/// Offset of the edge tile indices within the border map
const EDGE_INDEX_OFFSET: usize = 0x50;

/// Compose one photo slot into the buffer.
///
/// The buffer is reset to background first, so the same buffer can be
/// reused across slots. Without a ROM only the body is drawn and the
/// border region stays at background. ROM reads are bounds checked; a
/// border map referencing data outside the ROM is an error, not a wild
/// read.
pub fn compose_photo(
    sav: &ParseSav,
    rom: Option<&ParseRom>,
    buffer: &mut PixelBuffer,
    slot: u8,
) -> Result<(), String> {
    buffer.clear();

    // Body phase: the photo's own tiles, stored contiguously in the slot
    for tile_row in 0..PHOTO_TILE_ROWS {
        let y = MARGIN + tile_row * 8;
        for tile_col in 0..PHOTO_TILE_COLS {
            let tile = sav.body_tile(slot, tile_row, tile_col);
            draw_span(buffer, tile, MARGIN + tile_col * 8, y);
        }
    }

    let Some(rom) = rom else {
        return Ok(());
    };

    // Border phase
    let frame = rom.frame(sav.frame_index(slot));

    // Left and right edges: two tile columns per side, indexed per body
    // tile row
    for tile_row in 0..PHOTO_TILE_ROWS {
        let y = MARGIN + tile_row * 8;
        for z in 0..4 {
            let index = rom.byte(frame.border_map + EDGE_INDEX_OFFSET + tile_row * 4 + z)?;
            let tile = rom.tile(frame.tile_base + index as usize * TILE_SIZE)?;
            let x = (if z & 1 != 0 { 8 } else { 0 })
                + (if z & 2 != 0 { WIDTH - MARGIN } else { 0 });
            draw_span(buffer, tile, x, y);
        }
    }

    // Top and bottom bands: two tile rows each, spanning the full width
    for col in 0..TOP_BOTTOM_COLS {
        let x = col * 8;
        for z in 0..4 {
            let index = rom.byte(frame.border_map + col + TOP_BOTTOM_STRIDE * z)?;
            let tile = rom.tile(frame.tile_base + index as usize * TILE_SIZE)?;
            let y = (if z & 1 != 0 { 8 } else { 0 })
                + (if z & 2 != 0 { HEIGHT - MARGIN } else { 0 });
            draw_span(buffer, tile, x, y);
        }
    }

    Ok(())
}
