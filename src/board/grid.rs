//! Fixed-size square container.
//!
//! `Grid<T>` is a `width × height` array of squares stored row-major with
//! `(0, 0)` at the visual top-left. Each square holds at most one occupant.
//! Traversal always visits `x` fastest, then `y`, which is the order the
//! state string relies on.

use crate::errors::{BoardErrors, BoardResult};

/// One board cell and its optional occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square<T> {
    x: usize,
    y: usize,
    occupant: Option<T>,
}

impl<T> Square<T> {
    fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            occupant: None,
        }
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[inline]
    pub fn occupant(&self) -> Option<&T> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Places `occupant`, returning whatever it replaced.
    #[inline]
    pub fn set_occupant(&mut self, occupant: T) -> Option<T> {
        self.occupant.replace(occupant)
    }

    #[inline]
    pub fn clear(&mut self) -> Option<T> {
        self.occupant.take()
    }
}

impl<T: Copy> Square<T> {
    #[inline]
    pub fn piece(&self) -> Option<T> {
        self.occupant
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    squares: Vec<Square<T>>,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize) -> BoardResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoardErrors::InvalidBoardDimensions { width, height });
        }

        let squares = (0..height)
            .flat_map(|y| (0..width).map(move |x| Square::new(x, y)))
            .collect();

        Ok(Self {
            width,
            height,
            squares,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// True when `(x, y)` addresses a square. Accepts signed input so callers
    /// can probe neighbours without underflow.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    pub fn square(&self, x: i32, y: i32) -> Option<&Square<T>> {
        self.index_of(x, y).map(|index| &self.squares[index])
    }

    pub fn square_mut(&mut self, x: i32, y: i32) -> Option<&mut Square<T>> {
        self.index_of(x, y).map(|index| &mut self.squares[index])
    }

    /// Like `square_mut`, but reports the coordinate on failure.
    pub fn checked_square_mut(&mut self, x: i32, y: i32) -> BoardResult<&mut Square<T>> {
        self.square_mut(x, y)
            .ok_or(BoardErrors::OutOfBounds { x, y })
    }

    pub fn for_each_square<F>(&self, mut f: F)
    where
        F: FnMut(&Square<T>, usize, usize),
    {
        for square in &self.squares {
            f(square, square.x, square.y);
        }
    }

    pub fn for_each_square_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Square<T>, usize, usize),
    {
        for square in &mut self.squares {
            let (x, y) = square.position();
            f(square, x, y);
        }
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square<T>> {
        self.squares.iter()
    }

    /// Removes every occupant.
    pub fn clear(&mut self) {
        self.for_each_square_mut(|square, _, _| {
            square.clear();
        });
    }
}
