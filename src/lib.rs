//! Game Boy Camera SAV to PNG Converter Library
//!
//! This library provides the core functionality for decoding the photos
//! in a Game Boy Camera 128 KiB save-RAM image into 160x144 grayscale
//! PNG files, with each photo's border frame composited from an optional
//! camera cartridge ROM image.
//!
//! This program is unlicensed and dedicated to the public domain.

pub mod compose_photo;
pub mod config;
pub mod convert_save;
pub mod draw_tile;
pub mod parse_rom;
pub mod parse_sav;
pub mod write_png;
