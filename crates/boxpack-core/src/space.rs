//! Free-space bookkeeping for the greedy packer.
//!
//! The list starts with a single space of the start width whose height is unbounded.
//! Placing a box consumes at most one space, which is removed, shrunk, or split in two.

use crate::dimension::Dimension;

/// Height of a free space. Only the initial space is `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceHeight<T> {
    Bounded(T),
    Unbounded,
}

impl<T: Dimension> SpaceHeight<T> {
    #[inline]
    pub fn fits(&self, h: T) -> bool {
        match *self {
            SpaceHeight::Bounded(sh) => h <= sh,
            SpaceHeight::Unbounded => true,
        }
    }

    /// Exact equality; an unbounded height never equals a box height.
    #[inline]
    pub fn equals(&self, h: T) -> bool {
        matches!(*self, SpaceHeight::Bounded(sh) if sh == h)
    }

    #[inline]
    fn shrink(&mut self, h: T) {
        if let SpaceHeight::Bounded(sh) = self {
            *sh = *sh - h;
        }
    }
}

/// A free rectangular region; `x,y` is top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: SpaceHeight<T>,
}

impl<T: Dimension> Space<T> {
    #[inline]
    pub fn fits(&self, w: T, h: T) -> bool {
        w <= self.width && self.height.fits(h)
    }
}

/// How a space was reconciled after a box was put in its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Box matched the space exactly; the space was swap-removed.
    Exact,
    /// Same height; the space shrank from the left.
    Height,
    /// Same width; the space shrank from the top.
    Width,
    /// The space shrank from the top and a new space was pushed to the right of the box.
    Split,
}

/// Ordered list of free spaces. Order matters: lookups scan from the end.
#[derive(Debug, Clone)]
pub struct FreeSpaces<T> {
    spaces: Vec<Space<T>>,
}

impl<T: Dimension> FreeSpaces<T> {
    pub fn new(start_width: T) -> Self {
        Self {
            spaces: vec![Space {
                x: T::zero(),
                y: T::zero(),
                width: start_width,
                height: SpaceHeight::Unbounded,
            }],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn as_slice(&self) -> &[Space<T>] {
        &self.spaces
    }

    /// Index of the most recently added space that can take a `w x h` box.
    pub fn find(&self, w: T, h: T) -> Option<usize> {
        self.spaces.iter().rposition(|s| s.fits(w, h))
    }

    /// Puts a `w x h` box at the top-left of space `idx` and reconciles the list.
    /// Returns the box position and which case applied, or `None` without touching
    /// the list if the box's right or bottom edge is not representable in `T`.
    ///
    /// The caller must have checked that the box fits (see [`FreeSpaces::find`]).
    pub fn occupy(&mut self, idx: usize, w: T, h: T) -> Option<((T, T), Fit)> {
        let space = self.spaces[idx];
        let pos = (space.x, space.y);
        let right = space.x.checked_add(w)?;
        let bottom = space.y.checked_add(h)?;

        let fit = if w == space.width && space.height.equals(h) {
            self.spaces.swap_remove(idx);
            Fit::Exact
        } else if space.height.equals(h) {
            let s = &mut self.spaces[idx];
            s.x = right;
            s.width = s.width - w;
            Fit::Height
        } else if w == space.width {
            let s = &mut self.spaces[idx];
            s.y = bottom;
            s.height.shrink(h);
            Fit::Width
        } else {
            self.spaces.push(Space {
                x: right,
                y: space.y,
                width: space.width - w,
                height: SpaceHeight::Bounded(h),
            });
            let s = &mut self.spaces[idx];
            s.y = bottom;
            s.height.shrink(h);
            Fit::Split
        };
        Some((pos, fit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_unbounded_space() {
        let fs = FreeSpaces::new(100u32);
        assert_eq!(fs.len(), 1);
        assert_eq!(fs.as_slice()[0].height, SpaceHeight::Unbounded);
        assert_eq!(fs.find(100, 1_000_000), Some(0));
        assert_eq!(fs.find(101, 1), None);
    }

    #[test]
    fn split_pushes_right_space_and_shrinks_from_top() {
        let mut fs = FreeSpaces::new(100u32);
        let (pos, fit) = fs.occupy(0, 30, 20).unwrap();
        assert_eq!(pos, (0, 0));
        assert_eq!(fit, Fit::Split);
        assert_eq!(
            fs.as_slice(),
            &[
                Space { x: 0, y: 20, width: 100, height: SpaceHeight::Unbounded },
                Space { x: 30, y: 0, width: 70, height: SpaceHeight::Bounded(20) },
            ]
        );
    }

    #[test]
    fn find_prefers_newest_space() {
        let mut fs = FreeSpaces::new(100u32);
        fs.occupy(0, 30, 20).unwrap();
        // both spaces can take 10x10; the pushed one wins
        assert_eq!(fs.find(10, 10), Some(1));
        // too tall for the pushed space
        assert_eq!(fs.find(10, 21), Some(0));
    }

    #[test]
    fn height_match_shrinks_from_left() {
        let mut fs = FreeSpaces::new(100u32);
        fs.occupy(0, 30, 20).unwrap();
        let (pos, fit) = fs.occupy(1, 50, 20).unwrap();
        assert_eq!(pos, (30, 0));
        assert_eq!(fit, Fit::Height);
        assert_eq!(
            fs.as_slice()[1],
            Space { x: 80, y: 0, width: 20, height: SpaceHeight::Bounded(20) }
        );
    }

    #[test]
    fn width_match_shrinks_from_top() {
        let mut fs = FreeSpaces::new(100u32);
        let (pos, fit) = fs.occupy(0, 100, 40).unwrap();
        assert_eq!(pos, (0, 0));
        assert_eq!(fit, Fit::Width);
        assert_eq!(
            fs.as_slice(),
            &[Space { x: 0, y: 40, width: 100, height: SpaceHeight::Unbounded }]
        );
    }

    #[test]
    fn exact_match_swap_removes() {
        let mut fs = FreeSpaces::new(100u32);
        fs.occupy(0, 30, 20).unwrap(); // [unbounded, (30,0,70x20)]
        fs.occupy(0, 40, 10).unwrap(); // [unbounded, (30,0,70x20), (40,20,60x10)]
        assert_eq!(fs.len(), 3);
        // fill (30,0,70x20) exactly: last element moves into slot 1
        let (pos, fit) = fs.occupy(1, 70, 20).unwrap();
        assert_eq!(pos, (30, 0));
        assert_eq!(fit, Fit::Exact);
        assert_eq!(
            fs.as_slice(),
            &[
                Space { x: 0, y: 30, width: 100, height: SpaceHeight::Unbounded },
                Space { x: 40, y: 20, width: 60, height: SpaceHeight::Bounded(10) },
            ]
        );
    }

    #[test]
    fn overflowing_edge_leaves_list_untouched() {
        let mut fs = FreeSpaces::new(10u32);
        fs.occupy(0, 10, u32::MAX - 5).unwrap();
        let before = fs.as_slice().to_vec();
        // the unbounded column now starts at y = u32::MAX - 5
        assert_eq!(fs.find(10, 10), Some(0));
        assert_eq!(fs.occupy(0, 10, 10), None);
        assert_eq!(fs.as_slice(), before.as_slice());
    }

    #[test]
    fn unbounded_height_never_matches() {
        let h: SpaceHeight<f64> = SpaceHeight::Unbounded;
        assert!(h.fits(f64::MAX));
        assert!(!h.equals(f64::MAX));
    }
}
