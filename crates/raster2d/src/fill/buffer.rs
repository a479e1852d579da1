/// Addressable, bounds-checked 2D color buffer read back by the seed fillers.
///
/// Coordinates outside `0..width × 0..height` are never an error: `get`
/// returns `None` and `set` reports `false`.
pub trait RasterBuffer {
    type Color: Copy + PartialEq;

    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn get(&self, x: i32, y: i32) -> Option<Self::Color>;
    /// Returns whether the pixel was inside the buffer.
    fn set(&mut self, x: i32, y: i32, color: Self::Color) -> bool;

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }
}

/// Row-major in-memory buffer, row `0` first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    width: i32,
    height: i32,
    cells: Vec<C>,
}

impl<C: Copy + PartialEq> Grid<C> {
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, background: C) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![background; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        // chunks_exact panics on 0; an empty grid has no rows anyway
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Number of cells holding `color`.
    pub fn count(&self, color: C) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Coordinates of every cell holding `color`, row by row.
    pub fn positions(&self, color: C) -> Vec<(i32, i32)> {
        self.rows()
            .zip(0..)
            .flat_map(|(row, y)| {
                row.iter()
                    .zip(0..)
                    .filter(move |(c, _)| **c == color)
                    .map(move |(_, x)| (x, y))
            })
            .collect()
    }

    /// One text line per row, top row (largest y) first.
    pub fn render(&self, glyph: impl Fn(C) -> char) -> String {
        let mut lines: Vec<String> = self
            .rows()
            .map(|row| row.iter().map(|&c| glyph(c)).collect())
            .collect();
        lines.reverse();
        lines.join("\n")
    }
}

impl<C: Copy + PartialEq> RasterBuffer for Grid<C> {
    type Color = C;

    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Option<C> {
        self.index(x, y).map(|i| self.cells[i])
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }
}
