/// Grid sources: the pixel boundary the scan consumes
use crate::error::GridError;

/// Two-state cell classification.
///
/// Which state counts as "wall" and which as "open" is up to the
/// consumer; connectivity only cares that equal states connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Foreground,
    Background,
}

/// Capability the connectivity scan requires from a grid source.
///
/// Coordinates passed to the per-cell methods must satisfy
/// `x < width()` and `y < height()`; implementations may panic
/// otherwise. `clear_marker` normalizes a marker cell to a definite
/// Background classification so adjacency comparisons treat it as
/// ordinary terrain afterward.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn classification(&self, x: usize, y: usize) -> Classification;
    fn is_marker(&self, x: usize, y: usize) -> bool;
    fn clear_marker(&mut self, x: usize, y: usize);
}

/// In-memory grid with row-major storage.
///
/// Until cleared, a marker cell reports Foreground classification, so
/// a scan that forgot to normalize would split the marker off into its
/// own region. Tests pin that behavior.
#[derive(Debug, Clone)]
pub struct GridBuffer {
    width: usize,
    height: usize,
    class: Vec<Classification>,
    marker: Vec<bool>,
}

impl GridBuffer {
    /// Create a grid with every cell Background and no markers
    pub fn new(width: usize, height: usize) -> Self {
        GridBuffer {
            width,
            height,
            class: vec![Classification::Background; width * height],
            marker: vec![false; width * height],
        }
    }

    /// Parse a grid from fixture text, one row per line.
    ///
    /// Alphabet: `#` foreground, `.` background, `*` marker. Rows must
    /// all have the same width; blank lines and trailing whitespace on
    /// a row are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut class = Vec::new();
        let mut marker = Vec::new();
        let mut height = 0;

        for (lineno, raw) in text.lines().enumerate() {
            let row = raw.trim_end();
            if row.is_empty() {
                continue;
            }
            let expected = *width.get_or_insert(row.chars().count());
            let got = row.chars().count();
            if got != expected {
                return Err(GridError::RaggedRow {
                    line: lineno + 1,
                    got,
                    expected,
                });
            }
            for (col, symbol) in row.chars().enumerate() {
                let (c, m) = match symbol {
                    '#' => (Classification::Foreground, false),
                    '.' => (Classification::Background, false),
                    '*' => (Classification::Foreground, true),
                    other => {
                        return Err(GridError::UnknownSymbol {
                            symbol: other,
                            line: lineno + 1,
                            column: col + 1,
                        })
                    }
                };
                class.push(c);
                marker.push(m);
            }
            height += 1;
        }

        Ok(GridBuffer {
            width: width.unwrap_or(0),
            height,
            class,
            marker,
        })
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::IndexOutOfRange {
                index: y.saturating_mul(self.width).saturating_add(x),
                len: self.class.len(),
            })
        }
    }

    /// Set a cell's classification
    pub fn set_classification(
        &mut self,
        x: usize,
        y: usize,
        c: Classification,
    ) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.class[i] = c;
        Ok(())
    }

    /// Flag a cell as a marker (entry/exit candidate)
    pub fn set_marker(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.marker[i] = true;
        self.class[i] = Classification::Foreground;
        Ok(())
    }
}

impl PixelSource for GridBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn classification(&self, x: usize, y: usize) -> Classification {
        self.class[y * self.width + x]
    }

    fn is_marker(&self, x: usize, y: usize) -> bool {
        self.marker[y * self.width + x]
    }

    fn clear_marker(&mut self, x: usize, y: usize) {
        let i = y * self.width + x;
        self.marker[i] = false;
        self.class[i] = Classification::Background;
    }
}
