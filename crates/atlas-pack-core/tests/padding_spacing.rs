use atlas_pack_core::{AtlasPage, PackItem, pack};

/// Disjointness after growing every footprint by `padding` on its trailing
/// edges; adjacent items must never touch once padding is in play.
fn padded_disjoint(page: &AtlasPage, padding: u32) -> bool {
    let ps = &page.placements;
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            let (a, b) = (&ps[i], &ps[j]);
            let a_x2 = a.x as u64 + a.width as u64 + padding as u64;
            let a_y2 = a.y as u64 + a.height as u64 + padding as u64;
            let b_x2 = b.x as u64 + b.width as u64 + padding as u64;
            let b_y2 = b.y as u64 + b.height as u64 + padding as u64;
            let overlap = !((a.x as u64) >= b_x2
                || (b.x as u64) >= a_x2
                || (a.y as u64) >= b_y2
                || (b.y as u64) >= a_y2);
            if overlap {
                return false;
            }
        }
    }
    true
}

#[test]
fn adjacent_items_never_touch() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let items: Vec<PackItem> = (0..80)
        .map(|i| PackItem::new(i, rng.gen_range(4..=48), rng.gen_range(4..=48)))
        .collect();

    for padding in [1u32, 2, 5, 9] {
        let out = pack(&items, 256, padding).unwrap();
        assert!(out.dropped.is_empty());
        for page in &out.pages {
            assert!(
                padded_disjoint(page, padding),
                "padding {} violated on page {}",
                padding,
                page.index
            );
        }
    }
}

/// With zero padding, exact tiling is allowed: edges may touch.
#[test]
fn zero_padding_permits_touching_edges() {
    let items: Vec<PackItem> = (0..4).map(|i| PackItem::new(i, 50, 50)).collect();
    let out = pack(&items, 100, 0).unwrap();
    assert_eq!(out.pages.len(), 1);
    assert_eq!(out.pages[0].placements.len(), 4);
}

/// Recorded placements keep the item's original dimensions; padding never
/// leaks into the stored footprint.
#[test]
fn placements_record_original_dimensions() {
    let out = pack(&[PackItem::new(1, 33, 21)], 100, 7).unwrap();
    let p = out.pages[0].placements[0];
    assert_eq!((p.x, p.y), (0, 0));
    assert_eq!((p.width, p.height), (33, 21));
}

/// Padding shrinks per-page capacity: the same set needs more pages once
/// footprints grow.
#[test]
fn padding_reduces_capacity() {
    let items: Vec<PackItem> = (0..16).map(|i| PackItem::new(i, 50, 50)).collect();
    let tight = pack(&items, 200, 0).unwrap();
    let spaced = pack(&items, 200, 8).unwrap();
    assert_eq!(tight.pages.len(), 1);
    assert!(spaced.pages.len() > 1);
    assert!(spaced.dropped.is_empty());
}
