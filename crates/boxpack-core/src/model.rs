use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// A rectangle to pack, with an opaque caller payload.
///
/// `width`/`height` are read-only to the packer; only the placement is written.
/// The placement is `None` until a successful [`crate::pack`] assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackBox<T, P = ()> {
    pub width: T,
    pub height: T,
    /// Carried through unchanged (key, color, sprite handle, ...).
    pub payload: P,
    #[serde(default)]
    pub(crate) position: Option<(T, T)>,
}

impl<T: Dimension> PackBox<T, ()> {
    pub fn new(width: T, height: T) -> Self {
        Self::with_payload(width, height, ())
    }
}

impl<T: Dimension, P> PackBox<T, P> {
    pub fn with_payload(width: T, height: T, payload: P) -> Self {
        Self {
            width,
            height,
            payload,
            position: None,
        }
    }

    /// Top-left corner, if placed.
    #[inline]
    pub fn position(&self) -> Option<(T, T)> {
        self.position
    }
    #[inline]
    pub fn x(&self) -> Option<T> {
        self.position.map(|p| p.0)
    }
    #[inline]
    pub fn y(&self) -> Option<T> {
        self.position.map(|p| p.1)
    }
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// The placed rectangle, if placed.
    pub fn placement(&self) -> Option<Placement<T>> {
        self.position.map(|(x, y)| Placement {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn area(&self) -> f64 {
        self.width.to_f64() * self.height.to_f64()
    }
}

/// A placed rectangle. `x,y` is top-left; edges are exclusive.
///
/// Placements produced by the packer always have representable edges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Dimension> Placement<T> {
    /// Exclusive right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }
    /// Exclusive bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
    /// True if the interiors intersect; touching edges do not overlap.
    pub fn overlaps(&self, other: &Placement<T>) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
}

/// Bounding rectangle of a packing run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Container<T> {
    pub width: T,
    pub height: T,
    /// Total box area / container area; 0.0 when the container area is 0.
    pub fill: f64,
}

impl<T: Dimension> Container<T> {
    pub fn empty() -> Self {
        Self {
            width: T::zero(),
            height: T::zero(),
            fill: 0.0,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.to_f64() * self.height.to_f64()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0.0
    }

    /// Container area not covered by boxes.
    pub fn wasted_area(&self) -> f64 {
        self.area() * (1.0 - self.fill)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            (1.0 - self.fill) * 100.0
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Container: {:?}x{:?}, Fill: {:.2}%, Wasted: {:.1}",
            self.width,
            self.height,
            self.fill * 100.0,
            self.wasted_area(),
        )
    }
}

/// Result of [`crate::pack_sizes`]: container plus one placement per input, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout<T> {
    pub container: Container<T>,
    pub placements: Vec<Placement<T>>,
}
