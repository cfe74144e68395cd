//! Savegame converter main API
//!
//! Walks all 30 photo slots of a validated savegame, composes each one
//! onto the shared pixel buffer and writes it out as a PNG named after
//! the photo number the camera shows, or with a DEL_ prefix for slots
//! whose photo was deleted.
//!
//! This program is unlicensed and dedicated to the public domain.

use std::path::PathBuf;

use crate::compose_photo::compose_photo;
use crate::config::Config;
use crate::draw_tile::PixelBuffer;
use crate::parse_rom::ParseRom;
use crate::parse_sav::{ParseSav, SLOT_COUNT};
use crate::write_png::write_image_file;

pub struct ConvertSave {
    config: Config,
}

impl ConvertSave {
    /// Create a new converter with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert every photo slot of a savegame to PNG files.
    ///
    /// # Arguments
    /// * `save_path` - Path to the 128 KiB savegame
    /// * `rom_path` - Optional path to the 1 MiB camera ROM; without it
    ///   the photos are written without their border frames
    ///
    /// # Returns
    /// * `Ok(paths)` with one written file per slot
    /// * `Err(String)` with a user-friendly error message on failure
    pub fn convert(&self, save_path: &str, rom_path: Option<&str>) -> Result<Vec<PathBuf>, String> {
        let sav = ParseSav::import(save_path)?;
        let rom = match rom_path {
            Some(path) => Some(ParseRom::import(path)?),
            None => None,
        };

        let mut buffer = PixelBuffer::new();
        let mut written = Vec::with_capacity(SLOT_COUNT as usize);

        for slot in 1..=SLOT_COUNT {
            compose_photo(&sav, rom.as_ref(), &mut buffer, slot)
                .map_err(|e| format!("Failed to compose slot {}: {}", slot, e))?;

            let filename = match sav.pic_num_for_slot(slot) {
                Some(pic_num) => format!("IMG_{:02}.png", pic_num),
                None => format!("DEL_{:02}.png", slot),
            };
            let path = self.config.output_path.join(filename);
            write_image_file(&buffer, &path)?;
            written.push(path);
        }

        Ok(written)
    }
}
