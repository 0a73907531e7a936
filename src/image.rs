//! Simple RGBA8 image container used to composite spritesheets.

use std::io::{Read, Write};

use thiserror::Error;

const STRIDE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Image {
    size: (u32, u32),
    data: Vec<u8>,
}

impl Image {
    pub fn new_rgba8<D: Into<Vec<u8>>>(size: (u32, u32), data: D) -> Self {
        let data = data.into();

        assert!(data.len() == byte_len(size));

        Self { size, data }
    }

    /// Creates a fully transparent image.
    pub fn new_empty_rgba8(size: (u32, u32)) -> Self {
        Self::new_rgba8(size, vec![0; byte_len(size)])
    }

    /// Decodes a PNG image, converting it to 8-bit RGBA.
    ///
    /// Palette, grayscale and RGB images are expanded and 16-bit channels are
    /// truncated, so any PNG can end up in the same spritesheet.
    pub fn decode_png<R: Read>(input: R) -> Result<Self, ImageError> {
        let mut decoder = png::Decoder::new(input);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let (info, mut reader) = decoder.read_info()?;

        if info.bit_depth != png::BitDepth::Eight {
            return Err(ImageError::Unsupported {
                color_type: info.color_type,
                bit_depth: info.bit_depth,
            });
        }

        let mut buffer = vec![0; info.buffer_size()];
        reader.next_frame(&mut buffer)?;

        let size = (info.width, info.height);
        let pixels = byte_len(size) / STRIDE;

        let data = match info.color_type {
            png::ColorType::RGBA => buffer,
            png::ColorType::RGB => expand(&buffer, pixels, 3, |px| [px[0], px[1], px[2], 255]),
            png::ColorType::GrayscaleAlpha => {
                expand(&buffer, pixels, 2, |px| [px[0], px[0], px[0], px[1]])
            }
            png::ColorType::Grayscale => expand(&buffer, pixels, 1, |px| [px[0], px[0], px[0], 255]),
            color_type => {
                return Err(ImageError::Unsupported {
                    color_type,
                    bit_depth: info.bit_depth,
                })
            }
        };

        Ok(Self::new_rgba8(size, data))
    }

    pub fn encode_png<W: Write>(&self, output: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(output, self.size.0, self.size.1);
        encoder.set_color(png::ColorType::RGBA);
        encoder.set_depth(png::BitDepth::Eight);

        let mut output_writer = encoder.write_header()?;
        output_writer.write_image_data(&self.data)?;

        // On drop, output_writer will write the last chunk of the PNG file.
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Copies `other` into this image with its top-left corner at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `other` doesn't fit inside this image at `pos`.
    pub fn blit(&mut self, other: &Image, pos: (u32, u32)) {
        assert!(
            u64::from(pos.0) + u64::from(other.size.0) <= u64::from(self.size.0)
                && u64::from(pos.1) + u64::from(other.size.1) <= u64::from(self.size.1),
            "cannot blit a {}x{} image at {:?} into a {}x{} image",
            other.size.0,
            other.size.1,
            pos,
            self.size.0,
            self.size.1
        );

        if other.size.0 == 0 {
            return;
        }

        let self_width_bytes = self.size.0 as usize * STRIDE;
        let other_width_bytes = other.size.0 as usize * STRIDE;
        let other_rows = other.data.chunks_exact(other_width_bytes);

        for (other_y, other_row) in other_rows.enumerate() {
            let self_y = pos.1 as usize + other_y;

            let start_in_bytes = self_y * self_width_bytes + pos.0 as usize * STRIDE;
            let end_in_bytes = start_in_bytes + other_row.len();

            self.data[start_in_bytes..end_in_bytes].copy_from_slice(other_row);
        }
    }

    #[cfg(test)]
    fn pixel(&self, pos: (u32, u32)) -> [u8; 4] {
        let start = STRIDE * (pos.0 as usize + pos.1 as usize * self.size.0 as usize);
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.data[start..start + STRIDE]);
        pixel
    }
}

fn byte_len(size: (u32, u32)) -> usize {
    size.0 as usize * size.1 as usize * STRIDE
}

fn expand<F>(buffer: &[u8], pixels: usize, channels: usize, convert: F) -> Vec<u8>
where
    F: Fn(&[u8]) -> [u8; 4],
{
    let mut data = Vec::with_capacity(pixels * STRIDE);

    for px in buffer.chunks_exact(channels).take(pixels) {
        data.extend_from_slice(&convert(px));
    }

    data
}

#[derive(Debug, Error)]
pub(crate) enum ImageError {
    #[error(transparent)]
    Decode(#[from] png::DecodingError),

    #[error("unsupported PNG format: {color_type:?} with bit depth {bit_depth:?}")]
    Unsupported {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },
}
