use rect_packer_core::{ItemType, Placement, Rect, fits, pack_multiple};

fn assert_disjoint(placements: &[Placement]) {
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            assert!(
                !placements[i].rect.overlaps(&placements[j].rect),
                "placements {i} and {j} overlap: {:?} / {:?}",
                placements[i],
                placements[j]
            );
        }
    }
}

fn assert_contained(box_w: f64, box_h: f64, placements: &[Placement]) {
    for (i, p) in placements.iter().enumerate() {
        assert!(p.rect.within(box_w, box_h), "placement {i} escapes the box: {p:?}");
    }
}

#[test]
fn seats_mixed_catalog_without_overlap() {
    let types = [ItemType::new(30.0, 20.0, 10), ItemType::new(60.0, 30.0, 4)];
    let placements = pack_multiple(200.0, 100.0, &types).unwrap();
    assert!(!placements.is_empty());
    assert_disjoint(&placements);
    assert_contained(200.0, 100.0, &placements);
    for (type_id, item) in types.iter().enumerate() {
        let count = placements.iter().filter(|p| p.type_id == type_id).count();
        assert!(count <= item.capacity, "type {type_id} over capacity");
    }
}

#[test]
fn largest_instances_are_seated_first() {
    let types = [ItemType::new(30.0, 20.0, 10), ItemType::new(60.0, 30.0, 4)];
    let placements = pack_multiple(200.0, 100.0, &types).unwrap();
    assert_eq!(placements[0].type_id, 1);
    assert_eq!(placements[0].rect, Rect::new(0.0, 0.0, 60.0, 30.0));
}

#[test]
fn results_are_deterministic() {
    let types = [
        ItemType::new(13.0, 7.0, 6),
        ItemType::new(9.0, 9.0, 6),
        ItemType::new(25.0, 4.0, 3),
    ];
    let a = pack_multiple(64.0, 48.0, &types).unwrap();
    let b = pack_multiple(64.0, 48.0, &types).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rotates_when_only_rotated_fits() {
    let types = [ItemType::new(30.0, 10.0, 1)];
    let placements = pack_multiple(10.0, 30.0, &types).unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].rect, Rect::new(0.0, 0.0, 10.0, 30.0));
}

#[test]
fn unrotated_anywhere_is_preferred_over_rotated() {
    // The 6x8 blocker fills the top-left; an 8x3 strip fits unrotated only
    // beneath it (y=8) but would fit rotated beside it (x=6, y=0). The
    // whole grid is scanned unrotated before rotation is tried.
    let types = [ItemType::new(6.0, 8.0, 1), ItemType::new(8.0, 3.0, 1)];
    let placements = pack_multiple(10.0, 12.0, &types).unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].rect, Rect::new(0.0, 0.0, 6.0, 8.0));
    assert_eq!(placements[1].rect, Rect::new(0.0, 8.0, 8.0, 3.0));
}

#[test]
fn overfull_catalog_drops_silently() {
    let types = [ItemType::new(8.0, 8.0, 5)];
    let placements = pack_multiple(10.0, 10.0, &types).unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].rect, Rect::new(0.0, 0.0, 8.0, 8.0));
}

#[test]
fn zero_capacity_type_contributes_nothing() {
    let types = [ItemType::new(10.0, 10.0, 0), ItemType::new(5.0, 5.0, 2)];
    let placements = pack_multiple(20.0, 20.0, &types).unwrap();
    assert_eq!(placements.len(), 2);
    assert!(placements.iter().all(|p| p.type_id == 1));
}

#[test]
fn fits_rejects_overlap_and_escape_but_allows_shared_edges() {
    let placed = [Placement {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        type_id: 0,
    }];
    assert!(!fits(&Rect::new(5.0, 5.0, 10.0, 10.0), 40.0, 40.0, &placed));
    assert!(!fits(&Rect::new(35.0, 0.0, 10.0, 10.0), 40.0, 40.0, &placed));
    assert!(fits(&Rect::new(10.0, 0.0, 10.0, 10.0), 40.0, 40.0, &placed));
}

#[test]
fn randomized_catalog_upholds_invariants() {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..10 {
        let types: Vec<ItemType> = (0..6)
            .map(|_| {
                ItemType::new(
                    rng.gen_range(2.0..20.0),
                    rng.gen_range(2.0..20.0),
                    rng.gen_range(0..4),
                )
            })
            .collect();
        let placements = pack_multiple(50.0, 35.0, &types).unwrap();
        assert_disjoint(&placements);
        assert_contained(50.0, 35.0, &placements);
        for (type_id, item) in types.iter().enumerate() {
            let count = placements.iter().filter(|p| p.type_id == type_id).count();
            assert!(count <= item.capacity);
        }
    }
}
