//! RGB image buffer and plain-text PPM (`P3`) encoding.

use std::io::{self, Write};

use thiserror::Error;

/// Errors decoding PPM text.
#[derive(Error, Debug, PartialEq)]
pub enum PpmError {
    #[error("expected P3 magic, found {0:?}")]
    BadMagic(String),

    #[error("missing {0} in header")]
    MissingHeader(&'static str),

    #[error("invalid {field} {value:?}")]
    InvalidHeader { field: &'static str, value: String },

    #[error("unsupported max value {0}, expected 255")]
    UnsupportedMaxValue(u32),

    #[error("channel value {0:?} is not in 0..=255")]
    ChannelOutOfRange(String),

    #[error("expected {expected} channel values, found {found}")]
    WrongSampleCount { expected: usize, found: usize },
}

/// 8-bit RGB image in row-major order.
///
/// Channel `c` of pixel (`row`, `col`) lives at `row*width*3 + col*3 + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the raw channel bytes, e.g. to hand them to an image encoder.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * 3
    }

    fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.row_stride() + col as usize * 3
    }

    /// Get the pixel at (`row`, `col`).
    pub fn get(&self, row: u32, col: u32) -> [u8; 3] {
        let i = self.offset(row, col);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write as plain PPM: `P3`, dimensions, `255`, then one line per pixel.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for rgb in self.data.chunks_exact(3) {
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
        writer.flush()
    }

    /// Parse plain PPM text with a max value of 255. `#` comments are
    /// skipped.
    pub fn from_ppm(text: &str) -> Result<Self, PpmError> {
        let mut tokens = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);

        match tokens.next() {
            Some("P3") => {}
            Some(other) => return Err(PpmError::BadMagic(other.to_string())),
            None => return Err(PpmError::MissingHeader("magic")),
        }

        let mut header = |field: &'static str| -> Result<u32, PpmError> {
            let token = tokens.next().ok_or(PpmError::MissingHeader(field))?;
            token.parse().map_err(|_| PpmError::InvalidHeader {
                field,
                value: token.to_string(),
            })
        };
        let width = header("width")?;
        let height = header("height")?;
        let max_value = header("max value")?;
        if max_value != 255 {
            return Err(PpmError::UnsupportedMaxValue(max_value));
        }

        let data = tokens
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| PpmError::ChannelOutOfRange(token.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(PpmError::WrongSampleCount {
                expected,
                found: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }
}
