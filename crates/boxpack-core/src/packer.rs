use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::config::PackerConfig;
use crate::dimension::Dimension;
use crate::error::{PackError, Result};
use crate::model::{Container, Layout, PackBox, Placement};
use crate::space::FreeSpaces;

/// Packs `boxes` with the default configuration. See [`pack_with`].
pub fn pack<T: Dimension, P>(boxes: &mut [PackBox<T, P>]) -> Result<Container<T>> {
    pack_with(boxes, &PackerConfig::default())
}

#[instrument(skip_all, fields(boxes = boxes.len()))]
/// Packs `boxes` into a near-square container and writes each box's top-left position.
///
/// Notes:
/// - `boxes` is left sorted by height, descending; equal heights keep their input order.
/// - On error nothing is mutated: order and previous placements are untouched.
/// - Empty input is not an error and yields a `0x0` container with `fill == 0.0`.
pub fn pack_with<T: Dimension, P>(
    boxes: &mut [PackBox<T, P>],
    cfg: &PackerConfig,
) -> Result<Container<T>> {
    cfg.validate()?;
    let sizes: Vec<(T, T)> = boxes.iter().map(|b| (b.width, b.height)).collect();
    let plan = plan(&sizes, cfg)?;

    // Same stable sort as the plan, so boxes[k] is the original boxes[plan.order[k]].
    boxes.sort_by(|a, b| height_desc(a.height, b.height));
    for (b, pos) in boxes.iter_mut().zip(plan.positions) {
        b.position = Some(pos);
    }
    Ok(plan.container)
}

/// Packs `(width, height)` sizes with the default configuration. See [`pack_sizes_with`].
pub fn pack_sizes<T: Dimension>(sizes: &[(T, T)]) -> Result<Layout<T>> {
    pack_sizes_with(sizes, &PackerConfig::default())
}

#[instrument(skip_all, fields(boxes = sizes.len()))]
/// Packs `(width, height)` sizes without reordering them.
/// `placements[i]` is the placement of `sizes[i]`.
pub fn pack_sizes_with<T: Dimension>(sizes: &[(T, T)], cfg: &PackerConfig) -> Result<Layout<T>> {
    cfg.validate()?;
    let plan = plan(sizes, cfg)?;

    let zero = T::zero();
    let mut placements = vec![
        Placement {
            x: zero,
            y: zero,
            width: zero,
            height: zero,
        };
        sizes.len()
    ];
    for (&i, (x, y)) in plan.order.iter().zip(plan.positions) {
        let (width, height) = sizes[i];
        placements[i] = Placement {
            x,
            y,
            width,
            height,
        };
    }
    Ok(Layout {
        container: plan.container,
        placements,
    })
}

/// Width of the initial free space: `max(ceil(sqrt(total_area / target_fill)), max_width)`.
pub fn start_width<T: Dimension>(total_area: f64, max_width: T, target_fill: f64) -> T {
    T::from_f64_ceil((total_area / target_fill).sqrt()).max_of(max_width)
}

struct Plan<T> {
    container: Container<T>,
    /// Processing order as indices into the input.
    order: Vec<usize>,
    /// `positions[k]` belongs to input `order[k]`.
    positions: Vec<(T, T)>,
}

fn height_desc<T: Dimension>(a: T, b: T) -> Ordering {
    // validated sides are never NaN
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn validate<T: Dimension>(sizes: &[(T, T)]) -> Result<()> {
    for (index, &(w, h)) in sizes.iter().enumerate() {
        if !w.is_valid_extent() || !h.is_valid_extent() {
            return Err(PackError::InvalidDimension {
                index,
                width: format!("{:?}", w),
                height: format!("{:?}", h),
            });
        }
    }
    Ok(())
}

fn plan<T: Dimension>(sizes: &[(T, T)], cfg: &PackerConfig) -> Result<Plan<T>> {
    validate(sizes)?;

    let mut total_area = 0.0f64;
    let mut max_width = T::zero();
    for &(w, h) in sizes {
        total_area += w.to_f64() * h.to_f64();
        max_width = max_width.max_of(w);
    }

    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| height_desc(sizes[a].1, sizes[b].1));

    if sizes.is_empty() {
        debug!("nothing to pack");
        return Ok(Plan {
            container: Container::empty(),
            order,
            positions: Vec::new(),
        });
    }

    let start = start_width(total_area, max_width, cfg.target_fill);
    debug!(
        total_area,
        max_width = ?max_width,
        start_width = ?start,
        "packing"
    );

    let ordered: Vec<(T, T)> = order.iter().map(|&i| sizes[i]).collect();
    let (container, positions) = place_ordered(&ordered, start, total_area)?;
    Ok(Plan {
        container,
        order,
        positions,
    })
}

/// Places already-sorted sizes into spaces carved out of a `start_width`-wide, unbounded column.
fn place_ordered<T: Dimension>(
    sizes: &[(T, T)],
    start_width: T,
    total_area: f64,
) -> Result<(Container<T>, Vec<(T, T)>)> {
    let mut spaces = FreeSpaces::new(start_width);
    let mut positions = Vec::with_capacity(sizes.len());
    let mut width = T::zero();
    let mut height = T::zero();

    for &(w, h) in sizes {
        let Some(idx) = spaces.find(w, h) else {
            return Err(PackError::Unplaceable {
                width: format!("{:?}", w),
                height: format!("{:?}", h),
            });
        };
        let overflow = || PackError::Overflow {
            width: format!("{:?}", w),
            height: format!("{:?}", h),
        };
        let ((x, y), fit) = spaces.occupy(idx, w, h).ok_or_else(overflow)?;
        trace!(?x, ?y, ?w, ?h, space = idx, ?fit, "placed");

        width = width.max_of(x.checked_add(w).ok_or_else(overflow)?);
        height = height.max_of(y.checked_add(h).ok_or_else(overflow)?);
        positions.push((x, y));
    }

    // areas past f64::MAX give inf / inf
    let denom = width.to_f64() * height.to_f64();
    let fill = if denom > 0.0 { total_area / denom } else { 0.0 };
    let fill = if fill.is_finite() { fill } else { 0.0 };
    let container = Container {
        width,
        height,
        fill,
    };
    debug!(
        width = ?container.width,
        height = ?container.height,
        fill = container.fill,
        free_spaces = spaces.len(),
        "packed"
    );
    Ok((container, positions))
}
