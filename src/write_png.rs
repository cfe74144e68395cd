//! PNG writer for finished pixel buffers
//!
//! Serializes a packed 2-bit grayscale pixel buffer as a 160x144 PNG.
//! The buffer layout already matches PNG's packed grayscale scanlines
//! (4 pixels per byte, leftmost pixel in the high bits), so the data
//! goes to the encoder as-is.
//!
//! This program is unlicensed and dedicated to the public domain.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::draw_tile::{HEIGHT, PixelBuffer, WIDTH};

/// tEXt chunk describing where the pixels came from
const SOURCE_TEXT: &str = "Nintendo Gameboy Camera";

/// tEXt chunk naming the producing software
const SOFTWARE_TEXT: &str = "gbcam-sav-to-png-converter";

/// Write one pixel buffer to `path` as a 2-bit grayscale PNG
pub fn write_image_file(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("couldn't create {}: {}", path.display(), e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, WIDTH as u32, HEIGHT as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Two);
    encoder.set_compression(png::Compression::Best);
    encoder
        .add_text_chunk("Source".to_string(), SOURCE_TEXT.to_string())
        .map_err(|e| format!("couldn't add text chunk: {}", e))?;
    encoder
        .add_text_chunk("Software".to_string(), SOFTWARE_TEXT.to_string())
        .map_err(|e| format!("couldn't add text chunk: {}", e))?;

    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("couldn't write PNG header for {}: {}", path.display(), e))?;
    writer
        .write_image_data(buffer.data())
        .map_err(|e| format!("couldn't write PNG data for {}: {}", path.display(), e))?;
    writer
        .finish()
        .map_err(|e| format!("couldn't finish {}: {}", path.display(), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_tile::{draw_span, ROW_SIZE, TILE_SIZE};

    #[test]
    fn test_written_png_decodes_back_to_the_same_pixels() {
        let mut buffer = PixelBuffer::new();
        let tile: [u8; TILE_SIZE] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        draw_span(&mut buffer, &tile, 16, 16);
        draw_span(&mut buffer, &tile, 152, 136);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IMG_01.png");
        write_image_file(&buffer, &path).unwrap();

        let decoder = {
            let mut d = png::Decoder::new(File::open(&path).unwrap());
            d.set_transformations(png::Transformations::IDENTITY);
            d
        };
        let mut reader = decoder.read_info().unwrap();
        let mut decoded = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut decoded).unwrap();

        assert_eq!(frame.width, WIDTH as u32);
        assert_eq!(frame.height, HEIGHT as u32);
        assert_eq!(frame.color_type, png::ColorType::Grayscale);
        assert_eq!(frame.bit_depth, png::BitDepth::Two);
        assert_eq!(frame.buffer_size(), ROW_SIZE * HEIGHT);
        assert_eq!(&decoded[..frame.buffer_size()], buffer.data());
    }

    #[test]
    fn test_written_png_carries_source_text() {
        let buffer = PixelBuffer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IMG_02.png");
        write_image_file(&buffer, &path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let source = reader
            .info()
            .uncompressed_latin1_text
            .iter()
            .find(|chunk| chunk.keyword == "Source");
        assert_eq!(source.map(|c| c.text.as_str()), Some(SOURCE_TEXT));
    }

    #[test]
    fn test_write_to_missing_directory_fails_with_path() {
        let buffer = PixelBuffer::new();
        let result = write_image_file(&buffer, Path::new("/nonexistent/IMG_01.png"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("/nonexistent/IMG_01.png"));
    }
}
