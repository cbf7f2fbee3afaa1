use boxpack_core::{Container, PackBox, Placement, pack, pack_sizes};
use rand::{Rng, SeedableRng};

fn disjoint(placements: &[Placement<u32>]) -> bool {
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            if placements[i].overlaps(&placements[j]) {
                return false;
            }
        }
    }
    true
}

/// Sizes drawn the way the demo harness does: sides from {8,16,32,64}, 75% squares.
fn demo_sizes(seed: u64, n: usize) -> Vec<(u32, u32)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let sides = [8u32, 16, 32, 64];
    (0..n)
        .map(|_| {
            let w = sides[rng.gen_range(0..sides.len())];
            let h = if rng.gen_bool(0.25) {
                1u32 << rng.gen_range(3u32..7)
            } else {
                w
            };
            (w, h)
        })
        .collect()
}

fn uniform_sizes(seed: u64, n: usize) -> Vec<(u32, u32)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(1..=97), rng.gen_range(1..=97)))
        .collect()
}

fn check(sizes: &[(u32, u32)]) {
    let layout = pack_sizes(sizes).unwrap();
    let c = layout.container;
    assert_eq!(layout.placements.len(), sizes.len());
    assert!(disjoint(&layout.placements), "overlap for {} boxes", sizes.len());

    let mut area = 0.0f64;
    for (p, &(w, h)) in layout.placements.iter().zip(sizes) {
        assert_eq!((p.width, p.height), (w, h));
        assert!(p.right() <= c.width);
        assert!(p.bottom() <= c.height);
        area += (w as f64) * (h as f64);
    }
    // container is the tight bounding box
    assert_eq!(layout.placements.iter().map(|p| p.right()).max(), Some(c.width));
    assert_eq!(layout.placements.iter().map(|p| p.bottom()).max(), Some(c.height));

    let expected = area / ((c.width as f64) * (c.height as f64));
    assert_eq!(c.fill, expected);
    assert!(c.fill > 0.0 && c.fill <= 1.0);
}

#[test]
fn demo_distribution_no_overlap_and_contained() {
    for seed in 0..8 {
        for n in [1, 2, 7, 64, 256] {
            check(&demo_sizes(seed, n));
        }
    }
}

#[test]
fn uniform_sizes_no_overlap_and_contained() {
    for seed in 100..108 {
        check(&uniform_sizes(seed, 150));
    }
}

#[test]
fn repeatable_on_fresh_copies() {
    let sizes = uniform_sizes(42, 200);
    let a = pack_sizes(&sizes).unwrap();
    let b = pack_sizes(&sizes).unwrap();
    assert_eq!(a, b);

    let fresh = || -> Vec<PackBox<u32, usize>> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| PackBox::with_payload(w, h, i))
            .collect()
    };
    let mut b1 = fresh();
    let mut b2 = fresh();
    let c1 = pack(&mut b1).unwrap();
    let c2 = pack(&mut b2).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(b1, b2);
    assert_eq!(c1, a.container);
}

#[test]
fn boxes_and_sizes_entry_points_agree() {
    let sizes = demo_sizes(7, 128);
    let layout = pack_sizes(&sizes).unwrap();

    let mut boxes: Vec<PackBox<u32, usize>> = sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| PackBox::with_payload(w, h, i))
        .collect();
    let c = pack(&mut boxes).unwrap();
    assert_eq!(c, layout.container);
    for b in &boxes {
        assert_eq!(b.placement(), Some(layout.placements[b.payload]));
    }
}

#[test]
fn repacking_overwrites_previous_placement() {
    let mut boxes = vec![PackBox::new(10u32, 10u32)];
    pack(&mut boxes).unwrap();
    boxes.push(PackBox::new(30u32, 40u32));
    let c: Container<u32> = pack(&mut boxes).unwrap();
    assert!(boxes.iter().all(|b| b.is_placed()));
    // the taller box moves to the front and takes the origin; the 7-wide strip
    // beside it is too narrow, so the small box drops below
    assert_eq!((boxes[0].width, boxes[0].height), (30, 40));
    assert_eq!(boxes[0].position(), Some((0, 0)));
    assert_eq!(boxes[1].position(), Some((0, 40)));
    assert_eq!((c.width, c.height), (30, 50));
}
