//! Camera cartridge ROM loader and border frame locator
//!
//! Validates a 1 MiB Game Boy Camera ROM image and resolves the byte
//! offsets of its border frames. Two cartridge layouts exist: the
//! standard Game Boy Camera keeps its 18 frames consecutively in banks
//! 0x34 and 0x35, while the Hello Kitty Pocket Camera scatters its 25
//! frames across the ROM and keeps each frame's border map separate
//! from its tile data.
//!
//! This program is unlicensed and dedicated to the public domain.

use std::fs;

use crate::draw_tile::TILE_SIZE;

/// Expected ROM image size in bytes
pub const ROM_SIZE: usize = 1024 * 1024;

/// Size of one switchable ROM bank
pub const BANK_SIZE: usize = 0x4000;

const ROM_TITLE_OFFSET: usize = 0x134;
const ROM_TITLE_LENGTH: usize = 0xF;

/// First four bytes of the boot logo at 0x104, present in every valid
/// cartridge image
const LOGO_SIGNATURE: [u8; 4] = [0xCE, 0xED, 0x66, 0x66];

/// Cartridge title identifying the Hello Kitty Pocket Camera
const HELLO_KITTY_TITLE: &[u8; ROM_TITLE_LENGTH] = b"POCKETCAMERA_SN";

const STANDARD_FRAME_COUNT: i32 = 18;
const STANDARD_FALLBACK_FRAME: i32 = 17;
const STANDARD_FRAME_BANK_LO: usize = 0x34;
const STANDARD_FRAME_BANK_HI: usize = 0x35;
const STANDARD_FRAME_STRIDE: usize = 0x688;

/// Offset of the border map within a standard frame block: 0x600 bytes
/// of tile data, then 0x50 bytes of top/bottom indices, then 0x38 bytes
/// of edge indices
const STANDARD_BORDER_MAP_OFFSET: usize = 0x600;

const HELLO_KITTY_FRAME_COUNT: i32 = 25;
const HELLO_KITTY_FALLBACK_FRAME: i32 = 24;

/// (tile data offset, border map offset) for each Hello Kitty frame
const HELLO_KITTY_FRAME_OFFSETS: [(usize, usize); 25] = [
    (0xC6C70, 0xCF5D0),
    (0xC3B80, 0xCF548),
    (0xCBEC0, 0xCF4C0),
    (0xC5F10, 0xCF658),
    (0xCF210, 0xCF7F0),
    (0xC73A0, 0xCF768),
    (0xB7420, 0xCF6E0),
    (0xBE3E0, 0xCF438),
    (0xB3CD0, 0xC7EF0),
    (0xB2B80, 0xCF3B0),
    (0x8FD50, 0xC7F78),
    (0xC3800, 0xD7800),
    (0xBDC00, 0xD3F70),
    (0xD7F70, 0xD7888),
    (0xC5C00, 0xD7998),
    (0xB7C20, 0xD7910),
    (0xC3ED0, 0xD3D50),
    (0x33F80, 0xD3CC8),
    (0xDB800, 0xD3DD8),
    (0xB2200, 0xD3EE8),
    (0xB34D0, 0xD3E60),
    (0xB3030, 0xD7A20),
    (0x93E00, 0xD7D50),
    (0x77FE0, 0xCFCB8),
    (0x77FF0, 0xCFDC4),
];

/// Check the boot logo signature that every valid cartridge image
/// carries. Also used to reject a savegame that is really a ROM.
pub fn is_gb_rom(data: &[u8]) -> bool {
    data.len() >= 0x108 && data[0x104..0x108] == LOGO_SIGNATURE
}

/// Which frame layout the cartridge uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomVariant {
    Standard,
    HelloKitty,
}

/// Resolved byte offsets for one border frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Start of the frame's tile pixel data; tile index n is the 16
    /// bytes at `tile_base + n * 16`
    pub tile_base: usize,
    /// Start of the frame's border map: 4 rows of 20 top/bottom tile
    /// indices (0x14 bytes apart), then at +0x50 the per-row edge tile
    /// indices (4 per body tile row)
    pub border_map: usize,
}

/* ======================= ROM reader ======================= */

#[derive(Debug)]
pub struct ParseRom {
    raw: Vec<u8>,
    variant: RomVariant,
}

impl ParseRom {
    /// Read and validate a ROM image from disk
    pub fn import(file_path: &str) -> Result<Self, String> {
        let raw = fs::read(file_path)
            .map_err(|e| format!("couldn't open romfile {}: {}", file_path, e))?;
        Self::from_bytes(raw)
    }

    /// Validate an in-memory ROM image and detect its frame layout
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self, String> {
        if raw.len() != ROM_SIZE {
            return Err(format!(
                "rom has unexpected size: {} bytes (expected {})",
                raw.len(),
                ROM_SIZE
            ));
        }
        if !is_gb_rom(&raw) {
            return Err("romfile doesn't look like a Game Boy rom".to_string());
        }

        let title = &raw[ROM_TITLE_OFFSET..ROM_TITLE_OFFSET + ROM_TITLE_LENGTH];
        let variant = if title == HELLO_KITTY_TITLE {
            RomVariant::HelloKitty
        } else {
            RomVariant::Standard
        };

        Ok(Self { raw, variant })
    }

    pub fn variant(&self) -> RomVariant {
        self.variant
    }

    /// Resolve a stored frame index to its byte offsets.
    ///
    /// The index byte comes straight from the savegame and is not
    /// trusted: anything negative or beyond the layout's frame count
    /// falls back to the last valid frame instead of failing.
    pub fn frame(&self, index: i8) -> Frame {
        let index = index as i32;
        match self.variant {
            RomVariant::Standard => {
                let index = if !(0..STANDARD_FRAME_COUNT).contains(&index) {
                    STANDARD_FALLBACK_FRAME
                } else {
                    index
                } as usize;

                // Frames 0-8 sit in the low bank, 9-17 in the high bank
                let tile_base = if index < 9 {
                    STANDARD_FRAME_BANK_LO * BANK_SIZE + index * STANDARD_FRAME_STRIDE
                } else {
                    STANDARD_FRAME_BANK_HI * BANK_SIZE + (index - 9) * STANDARD_FRAME_STRIDE
                };

                Frame {
                    tile_base,
                    border_map: tile_base + STANDARD_BORDER_MAP_OFFSET,
                }
            }
            RomVariant::HelloKitty => {
                let index = if !(0..HELLO_KITTY_FRAME_COUNT).contains(&index) {
                    HELLO_KITTY_FALLBACK_FRAME
                } else {
                    index
                } as usize;

                let (tile_base, border_map) = HELLO_KITTY_FRAME_OFFSETS[index];
                Frame {
                    tile_base,
                    border_map,
                }
            }
        }
    }

    /// Bounds-checked single byte read
    pub fn byte(&self, offset: usize) -> Result<u8, String> {
        self.raw
            .get(offset)
            .copied()
            .ok_or_else(|| format!("rom read out of range at offset 0x{:X}", offset))
    }

    /// Bounds-checked 16-byte tile read
    pub fn tile(&self, offset: usize) -> Result<&[u8], String> {
        self.raw
            .get(offset..offset + TILE_SIZE)
            .ok_or_else(|| format!("rom tile read out of range at offset 0x{:X}", offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rom(title: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; ROM_SIZE];
        rom[0x104..0x108].copy_from_slice(&LOGO_SIGNATURE);
        rom[ROM_TITLE_OFFSET..ROM_TITLE_OFFSET + title.len()].copy_from_slice(title);
        rom
    }

    #[test]
    fn test_rejects_wrong_size() {
        let result = ParseRom::from_bytes(vec![0u8; ROM_SIZE - 1]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unexpected size"));
    }

    #[test]
    fn test_rejects_missing_signature() {
        let result = ParseRom::from_bytes(vec![0u8; ROM_SIZE]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("look like"));
    }

    #[test]
    fn test_detects_standard_variant() {
        let rom = ParseRom::from_bytes(make_rom(b"GAMEBOYCAMERA")).unwrap();
        assert_eq!(rom.variant(), RomVariant::Standard);
    }

    #[test]
    fn test_detects_hello_kitty_variant() {
        let rom = ParseRom::from_bytes(make_rom(HELLO_KITTY_TITLE)).unwrap();
        assert_eq!(rom.variant(), RomVariant::HelloKitty);
    }

    #[test]
    fn test_standard_frame_offsets_at_bank_boundaries() {
        let rom = ParseRom::from_bytes(make_rom(b"GAMEBOYCAMERA")).unwrap();

        // Low bank: frames 0 and 8
        assert_eq!(rom.frame(0).tile_base, 0x34 * BANK_SIZE);
        assert_eq!(rom.frame(8).tile_base, 0x34 * BANK_SIZE + 8 * 0x688);
        // High bank: frames 9 and 17
        assert_eq!(rom.frame(9).tile_base, 0x35 * BANK_SIZE);
        assert_eq!(rom.frame(17).tile_base, 0x35 * BANK_SIZE + 8 * 0x688);
        // Border map follows the tile data in the same block
        assert_eq!(rom.frame(0).border_map, 0x34 * BANK_SIZE + 0x600);
    }

    #[test]
    fn test_hello_kitty_frame_offsets_from_table() {
        let rom = ParseRom::from_bytes(make_rom(HELLO_KITTY_TITLE)).unwrap();

        assert_eq!(
            rom.frame(0),
            Frame {
                tile_base: 0xC6C70,
                border_map: 0xCF5D0
            }
        );
        assert_eq!(
            rom.frame(24),
            Frame {
                tile_base: 0x77FF0,
                border_map: 0xCFDC4
            }
        );
    }

    #[test]
    fn test_standard_out_of_range_index_falls_back() {
        let rom = ParseRom::from_bytes(make_rom(b"GAMEBOYCAMERA")).unwrap();
        let fallback = rom.frame(17);

        // -1, 18 and 200 (negative as i8) all clamp to the last frame
        assert_eq!(rom.frame(-1i8), fallback);
        assert_eq!(rom.frame(18), fallback);
        assert_eq!(rom.frame(200u8 as i8), fallback);
    }

    #[test]
    fn test_hello_kitty_out_of_range_index_falls_back() {
        let rom = ParseRom::from_bytes(make_rom(HELLO_KITTY_TITLE)).unwrap();
        let fallback = rom.frame(24);

        assert_eq!(rom.frame(-1i8), fallback);
        assert_eq!(rom.frame(25), fallback);
        assert_eq!(rom.frame(255u8 as i8), fallback);
    }

    #[test]
    fn test_checked_reads() {
        let rom = ParseRom::from_bytes(make_rom(b"GAMEBOYCAMERA")).unwrap();
        assert_eq!(rom.byte(0x104).unwrap(), 0xCE);
        assert!(rom.byte(ROM_SIZE).is_err());
        assert_eq!(rom.tile(0).unwrap().len(), TILE_SIZE);
        assert!(rom.tile(ROM_SIZE - 8).is_err());
    }
}
