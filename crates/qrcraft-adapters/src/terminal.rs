//! Text rendering of a symbol for terminal preview.
//!
//! Each character covers two vertically stacked modules:
//! `█` both dark, `▀` top dark, `▄` bottom dark, space both light.

use qrcraft_core::domain::QrMatrix;

/// Render with `margin` light modules around the symbol, one line per
/// pair of module rows.
pub fn to_unicode(matrix: &QrMatrix, margin: u32) -> String {
    let margin = i64::from(margin);
    let size = matrix.size() as i64;
    let lo = -margin;
    let hi = size + margin;

    let mut out = String::new();
    let mut y = lo;
    while y < hi {
        for x in lo..hi {
            let top = matrix.is_dark(x, y);
            let bottom = y + 1 < hi && matrix.is_dark(x, y + 1);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        y += 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_rows_into_half_blocks() {
        // ##
        // #.
        let m = QrMatrix::new(2, vec![true, true, true, false]).unwrap();
        assert_eq!(to_unicode(&m, 0), "█▀\n");
    }

    #[test]
    fn margin_pads_every_side() {
        let m = QrMatrix::new(2, vec![true, true, true, true]).unwrap();
        assert_eq!(to_unicode(&m, 1), " ▄▄ \n ▀▀ \n");
    }

    #[test]
    fn odd_row_count_keeps_last_half_light() {
        let m = QrMatrix::new(1, vec![true]).unwrap();
        assert_eq!(to_unicode(&m, 0), "▀\n");
    }
}
