//! Rectangle - rectangular image regions
//!
//! Bounds are inclusive pixel indices. A `Rectangle` is a plain Copy
//! value; operations that take one validate it against the image they
//! run on.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// A rectangular region given by inclusive `top/left/bottom/right` pixel
/// indices.
///
/// [`height`](Rectangle::height) and [`width`](Rectangle::width) report
/// the spans `bottom - top` and `right - left`; the covered area is one
/// pixel larger on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Topmost row
    pub top: usize,
    /// Leftmost column
    pub left: usize,
    /// Bottommost row (inclusive)
    pub bottom: usize,
    /// Rightmost column (inclusive)
    pub right: usize,
}

impl Rectangle {
    /// Create a rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are out of order.
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Result<Self> {
        if top > bottom || left > right {
            return Err(Error::InvalidParameter(format!(
                "rectangle bounds out of order: {top},{left},{bottom},{right}"
            )));
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Create a rectangle without validation.
    pub const fn new_unchecked(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Row span, `bottom - top`.
    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    /// Column span, `right - left`.
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    /// Rows covered, inclusive.
    #[inline]
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.top..=self.bottom
    }

    /// Columns covered, inclusive.
    #[inline]
    pub fn cols(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.top, self.left, self.bottom, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bound_order() {
        let r = Rectangle::new(1, 2, 4, 7).unwrap();
        assert_eq!((r.top, r.left, r.bottom, r.right), (1, 2, 4, 7));
        assert!(Rectangle::new(5, 0, 4, 9).is_err());
        assert!(Rectangle::new(0, 9, 4, 8).is_err());
    }

    #[test]
    fn test_spans() {
        let r = Rectangle::new(1, 2, 4, 7).unwrap();
        assert_eq!(r.height(), 3);
        assert_eq!(r.width(), 5);
        assert_eq!(r.rows().count(), 4);
        assert_eq!(r.cols().count(), 6);
    }

    #[test]
    fn test_display() {
        let r = Rectangle::new_unchecked(0, 1, 2, 3);
        assert_eq!(r.to_string(), "0,1,2,3");
    }
}
