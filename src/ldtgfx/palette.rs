use std::path::Path;

use super::error::{Error, Result};

const PALETTE_MAGIC: &str = "JASC-PAL";
const PALETTE_VERSION: &str = "0100";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Colours of a JASC-PAL palette, in file order.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<Rgb>,
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(text: &str) -> Result<T> {
    text.parse::<T>().map_err(|source| Error::Number { text: text.to_string(), source })
}

impl Palette {
    pub fn new(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim);

        let header = lines.next().unwrap_or("");
        if header != PALETTE_MAGIC {
            return Err(Error::format(format!("invalid header: {}", header)));
        }

        let version = lines.next().unwrap_or("");
        if version != PALETTE_VERSION {
            return Err(Error::format(format!("invalid unknown: {}", version)));
        }

        let count = match lines.next() {
            Some(line) => parse_number::<usize>(line)?,
            None => return Err(Error::format("invalid count: missing")),
        };

        // count is read from the file, cap the preallocation
        let mut colors = Vec::with_capacity(count.min(256));
        for _ in 0..count {
            let line = lines.next().unwrap_or("");
            let pieces: Vec<&str> = line.split_whitespace().collect();
            if pieces.len() != 3 {
                return Err(Error::format(format!("invalid line: {}", line)));
            }
            colors.push(Rgb {
                r: parse_number(pieces[0])?,
                g: parse_number(pieces[1])?,
                b: parse_number(pieces[2])?,
            });
        }
        Ok(Self { colors })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::new(&text)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
