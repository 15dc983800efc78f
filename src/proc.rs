use std::{fmt, fs, io, path::Path};

use tracing::info;

use crate::error::{Error, LoadError, ValidationError};

#[rustfmt::skip]
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rect {
    w: usize, // j
    h: usize, // i
}

impl Rect {
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Rect { w: width, h: height }
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn unwrap(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    size: Rect,
    data: Vec<Vec<bool>>,
}

impl Field {
    pub fn new(data: Vec<Vec<bool>>) -> Result<Self, ValidationError> {
        let size = Self::data_size(&data);
        if size.w == 0 || size.h == 0 {
            return Err(ValidationError::ZeroDimensions {
                width: size.w,
                height: size.h,
            });
        }
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != size.w) {
            return Err(ValidationError::RaggedRow {
                row,
                expected: size.w,
                found: r.len(),
            });
        }

        Ok(Field { size, data })
    }

    /// Parses rows of space-separated cells; `1` is alive, any other token is dead.
    pub fn from_string(s: &str) -> Result<Self, ValidationError> {
        let data = s
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                l.split_whitespace()
                    .map(|t| matches!(t.parse::<i64>(), Ok(1)))
                    .collect()
            })
            .collect();

        Self::new(data)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
            _ => LoadError::Unreadable { path: path.to_path_buf(), source },
        })?;

        let field = Self::from_string(&s)?;
        info!(
            path = %path.display(),
            width = field.size.w(),
            height = field.size.h(),
            "initial state loaded"
        );
        Ok(field)
    }

    #[inline]
    pub fn size(&self) -> &Rect {
        &self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.data[i][j]
    }

    pub fn population(&self) -> usize {
        self.data.iter().flatten().filter(|c| **c).count()
    }

    pub fn neighbor_count(&self, i: usize, j: usize) -> u8 {
        NEIGHBOURS
            .iter()
            .filter_map(|&(di, dj)| self.at(i.checked_add_signed(di)?, j.checked_add_signed(dj)?))
            .filter(|c| *c)
            .count() as u8
    }

    /// Computes the next generation. `self` is only read, so every cell sees
    /// the same snapshot.
    pub fn tick(&self) -> Field {
        let (w, h) = self.size.unwrap();
        let data = (0..h)
            .map(|i| {
                (0..w)
                    .map(|j| Self::produce_value(self.get(i, j), self.neighbor_count(i, j)))
                    .collect()
            })
            .collect();

        Field { size: self.size, data }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> Option<bool> {
        if i >= self.size.h || j >= self.size.w {
            None
        } else {
            Some(self.data[i][j])
        }
    }

    fn data_size(data: &[Vec<bool>]) -> Rect {
        Rect::new(data.first().map_or(0, Vec::len), data.len())
    }

    #[inline]
    fn produce_value(current: bool, n: u8) -> bool {
        n == 3 || (current && n == 2)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if *c { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
