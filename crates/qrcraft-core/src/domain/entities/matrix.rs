use serde::{Deserialize, Serialize};

/// An encoded QR symbol: a square grid of dark (`true`) and light modules.
///
/// Immutable once built. Coordinates outside the grid read as light, which
/// is what the quiet zone looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Build from row-major modules. Returns `None` unless `modules.len() == size * size`.
    pub fn new(size: usize, modules: Vec<bool>) -> Option<Self> {
        (size > 0 && modules.len() == size * size).then_some(Self { size, modules })
    }

    /// Width and height in modules (21 for version 1, 177 for version 40).
    pub fn size(&self) -> usize {
        self.size
    }

    /// QR version implied by the size.
    pub fn version(&self) -> usize {
        (self.size.saturating_sub(17)) / 4
    }

    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return false;
        }
        self.modules[(y * size + x) as usize]
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }

    /// Rows of modules, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(size: usize) -> QrMatrix {
        let modules = (0..size * size).map(|i| (i / size + i % size) % 2 == 0).collect();
        QrMatrix::new(size, modules).unwrap()
    }

    #[test]
    fn rejects_mismatched_length() {
        assert!(QrMatrix::new(3, vec![true; 8]).is_none());
        assert!(QrMatrix::new(0, vec![]).is_none());
    }

    #[test]
    fn out_of_bounds_reads_light() {
        let m = checker(3);
        assert!(m.is_dark(0, 0));
        assert!(!m.is_dark(-1, 0));
        assert!(!m.is_dark(0, 3));
    }

    #[test]
    fn version_from_size() {
        assert_eq!(QrMatrix::new(21, vec![false; 441]).unwrap().version(), 1);
        assert_eq!(QrMatrix::new(25, vec![false; 625]).unwrap().version(), 2);
    }

    #[test]
    fn rows_cover_grid() {
        let m = checker(4);
        assert_eq!(m.rows().count(), 4);
        assert_eq!(m.dark_count(), 8);
    }
}
