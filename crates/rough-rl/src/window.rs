//! Paging of the infinite plane into fixed-size display windows.
//!
//! Windows are anchored so their lower-left corners sit on multiples of the
//! window size. Floor division is used throughout, so `(-1, -1)` belongs to
//! the window anchored at `(-w, -h)` and not to the one at the origin.

use rough_core::Point;

use crate::error::{MapError, Result};
use crate::grid::SparseGrid;
use crate::tile::Tile;

fn check_size(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(MapError::InvalidArgument { width, height });
    }
    Ok(())
}

/// Window indices of `p` along each axis. Never overflows for a positive size.
fn window_index(width: i32, height: i32, p: Point) -> (i32, i32) {
    (p.x.div_euclid(width), p.y.div_euclid(height))
}

fn out_of_range(width: i32, height: i32, p: Point) -> MapError {
    MapError::OutOfRange {
        x: p.x,
        y: p.y,
        width,
        height,
    }
}

/// Lower-left and upper-right corners of the window containing `p`.
fn window_corners(width: i32, height: i32, p: Point) -> Result<(Point, Point)> {
    let origin = window_of(width, height, p)?;
    match (origin.x.checked_add(width - 1), origin.y.checked_add(height - 1)) {
        (Some(x2), Some(y2)) => Ok((origin, Point::new(x2, y2))),
        _ => Err(out_of_range(width, height, p)),
    }
}

/// Lower-left corner of the `width × height` window containing `p`.
///
/// Windows at the very edge of the `i32` plane whose corner cannot be
/// represented yield [`MapError::OutOfRange`].
pub fn window_of(width: i32, height: i32, p: Point) -> Result<Point> {
    check_size(width, height)?;
    let (ix, iy) = window_index(width, height, p);
    let x = i64::from(ix) * i64::from(width);
    let y = i64::from(iy) * i64::from(height);
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
        _ => Err(out_of_range(width, height, p)),
    }
}

/// Whether `a` and `b` fall into the same `width × height` window.
///
/// Compares window indices, so it holds for every point of the plane.
pub fn same_window(width: i32, height: i32, a: Point, b: Point) -> Result<bool> {
    check_size(width, height)?;
    Ok(window_index(width, height, a) == window_index(width, height, b))
}

/// Where `p` lands in a top-left-origin display buffer showing its window.
///
/// Columns map directly; rows are flipped because world Y grows upward.
pub fn screen_position(width: i32, height: i32, p: Point) -> Result<Point> {
    check_size(width, height)?;
    Ok(Point::new(
        p.x.rem_euclid(width),
        (-1 - p.y).rem_euclid(height),
    ))
}

/// A snapshot of one window's cells, laid out for a top-left-origin buffer.
///
/// Storage is row-major; row 0 holds the highest world Y of the window.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    origin: Point,
    width: i32,
    height: i32,
    cells: Vec<(Point, &'a Tile)>,
}

impl<'a> Window<'a> {
    /// World coordinate of the window's lower-left cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The world point and tile shown at display position `(col, row)`.
    pub fn cell(&self, col: i32, row: i32) -> Option<(Point, &'a Tile)> {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[(row * self.width + col) as usize])
    }

    /// Display rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[(Point, &'a Tile)]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Every cell as `(col, row, world point, tile)`, top row first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Point, &'a Tile)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &(p, t))| {
            let i = i as i32;
            (i % self.width, i / self.width, p, t)
        })
    }
}

impl SparseGrid {
    /// The window of size `width × height` that contains `anchor`.
    pub fn window_contents(&self, width: i32, height: i32, anchor: Point) -> Result<Window<'_>> {
        let (origin, top_right) = window_corners(width, height, anchor)?;
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for row in 0..height {
            let y = top_right.y - row;
            for col in 0..width {
                let p = Point::new(origin.x + col, y);
                cells.push((p, self.get(p)));
            }
        }
        Ok(Window {
            origin,
            width,
            height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rough_core::{Color, Rect};

    #[test]
    fn same_window_positive() {
        assert!(same_window(10, 10, Point::new(3, 3), Point::new(9, 9)).unwrap());
        assert!(!same_window(10, 10, Point::new(3, 3), Point::new(10, 10)).unwrap());
        assert!(!same_window(10, 10, Point::new(3, 3), Point::new(3, 10)).unwrap());
    }

    #[test]
    fn negative_coordinates_use_floor() {
        assert_eq!(window_of(10, 10, Point::new(-1, -1)).unwrap(), Point::new(-10, -10));
        assert_eq!(window_of(10, 10, Point::new(0, 0)).unwrap(), Point::new(0, 0));
        assert_eq!(window_of(10, 10, Point::new(-10, -11)).unwrap(), Point::new(-10, -20));
        assert!(!same_window(10, 10, Point::new(-1, -1), Point::new(0, 0)).unwrap());
        assert!(same_window(10, 10, Point::new(-1, -1), Point::new(-10, -10)).unwrap());
    }

    #[test]
    fn non_square_windows() {
        assert_eq!(window_of(100, 56, Point::new(50, 28)).unwrap(), Point::new(0, 0));
        assert_eq!(window_of(100, 56, Point::new(150, -1)).unwrap(), Point::new(100, -56));
    }

    #[test]
    fn zero_size_is_invalid() {
        let err = window_of(0, 10, Point::ZERO).unwrap_err();
        assert_eq!(err, MapError::InvalidArgument { width: 0, height: 10 });
        assert!(same_window(10, 0, Point::ZERO, Point::ZERO).is_err());
        assert!(screen_position(0, 0, Point::ZERO).is_err());
        let g = SparseGrid::new(Tile::new(Color::BLACK, true));
        assert!(g.window_contents(0, 5, Point::ZERO).is_err());
    }

    #[test]
    fn contents_put_highest_y_on_top() {
        let wall = Tile::new(Color::from_rgb(0, 0, 30), true);
        let floor = Tile::new(Color::from_rgb(20, 20, 80), false);
        let mut g = SparseGrid::new(wall.clone());
        // Bottom row of the window anchored at the origin.
        g.set_rect(Rect::new(0, 0, 4, 1), &floor, false);

        let w = g.window_contents(4, 3, Point::new(2, 1)).unwrap();
        assert_eq!(w.origin(), Point::new(0, 0));
        assert_eq!(w.rows().count(), 3);

        let (top, top_tile) = w.cell(0, 0).unwrap();
        assert_eq!(top, Point::new(0, 2));
        assert_eq!(top_tile, &wall);

        let (bottom, bottom_tile) = w.cell(3, 2).unwrap();
        assert_eq!(bottom, Point::new(3, 0));
        assert_eq!(bottom_tile, &floor);

        assert!(w.cell(4, 0).is_none());
        assert!(w.cell(0, -1).is_none());
    }

    #[test]
    fn iter_agrees_with_screen_position() {
        let g = SparseGrid::new(Tile::new(Color::BLACK, false));
        let w = g.window_contents(5, 4, Point::new(-7, -2)).unwrap();
        assert_eq!(w.origin(), Point::new(-10, -4));
        let mut n = 0;
        for (col, row, p, _) in w.iter() {
            assert_eq!(screen_position(5, 4, p).unwrap(), Point::new(col, row));
            n += 1;
        }
        assert_eq!(n, 20);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        // -2^31 is not a multiple of 10, so its window starts below i32::MIN.
        let low = Point::new(i32::MIN, 0);
        assert_eq!(
            window_of(10, 10, low).unwrap_err(),
            MapError::OutOfRange { x: i32::MIN, y: 0, width: 10, height: 10 }
        );
        // Powers of two page cleanly.
        assert_eq!(window_of(16, 16, low).unwrap(), Point::new(i32::MIN, 0));

        assert!(same_window(10, 10, low, low.shift(1, 0)).unwrap());
        assert!(!same_window(10, 10, low, Point::new(i32::MAX, 0)).unwrap());

        assert_eq!(screen_position(10, 10, Point::new(0, i32::MIN)).unwrap(), Point::new(0, 7));
        assert_eq!(screen_position(10, 10, Point::new(0, i32::MAX)).unwrap(), Point::new(0, 2));

        let g = SparseGrid::new(Tile::new(Color::BLACK, true));
        // The window around i32::MAX would reach 2147483649.
        assert!(matches!(
            g.window_contents(10, 10, Point::new(0, i32::MAX)),
            Err(MapError::OutOfRange { .. })
        ));
        let top = g.window_contents(16, 16, Point::new(i32::MAX, i32::MAX)).unwrap();
        assert_eq!(top.cell(15, 0).unwrap().0, Point::new(i32::MAX, i32::MAX));
        assert_eq!(top.origin(), Point::new(i32::MAX - 15, i32::MAX - 15));
    }
}
