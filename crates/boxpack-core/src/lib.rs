//! Deterministic greedy packing of rectangles into a near-square container.
//!
//! - Boxes are sorted by height (descending, stable) and placed one by one into the
//!   most recently created free space that fits; no rotation, no backtracking.
//! - The container starts `ceil(sqrt(area / 0.95))` wide (at least the widest box) and
//!   grows downward; the result is the bounding box of everything placed.
//! - Every call repacks from scratch; identical input gives identical output.
//!
//! Quick example:
//! ```
//! use boxpack_core::{PackBox, pack};
//! # fn main() -> boxpack_core::Result<()> {
//! let mut boxes = vec![
//!     PackBox::with_payload(100u32, 100u32, "a"),
//!     PackBox::with_payload(100u32, 100u32, "b"),
//! ];
//! let container = pack(&mut boxes)?;
//! assert_eq!((container.width, container.height), (100, 200));
//! assert_eq!(container.fill, 1.0);
//! assert_eq!(boxes[1].position(), Some((0, 100)));
//! # Ok(()) }
//! ```

pub mod config;
pub mod dimension;
pub mod error;
pub mod model;
pub mod packer;
pub mod space;

pub use config::*;
pub use dimension::*;
pub use error::*;
pub use model::*;
pub use packer::*;

/// Convenience prelude for common types and functions.
/// Importing `boxpack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::dimension::Dimension;
    pub use crate::error::{PackError, Result};
    pub use crate::model::{Container, Layout, PackBox, Placement};
    pub use crate::{pack, pack_sizes, pack_sizes_with, pack_with};
}
