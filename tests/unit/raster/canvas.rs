use super::*;

#[test]
fn new_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(4, 6).unwrap();
    assert_eq!((c.width(), c.height()), (4, 6));
    assert_eq!(c.occupied_count(), 0);
}

#[test]
fn plot_offsets_from_center() {
    let mut c = Canvas::new(10, 10).unwrap();
    c.plot(Coordinate::new(0, 0)).unwrap();
    c.plot(Coordinate::new(1, 1)).unwrap();
    c.plot(Coordinate::new(-1, -1)).unwrap();
    assert!(c.is_occupied(5, 5));
    assert!(c.is_occupied(6, 6));
    assert!(c.is_occupied(4, 4));
    assert_eq!(c.occupied_count(), 3);
}

#[test]
fn odd_dimensions_use_integer_half() {
    let c = Canvas::new(7, 5).unwrap();
    assert_eq!(c.cell_for(Coordinate::new(0, 0)), Some((3, 2)));
    assert_eq!(c.cell_for(Coordinate::new(-3, -2)), Some((0, 0)));
    assert_eq!(c.cell_for(Coordinate::new(3, 2)), Some((6, 4)));
    assert_eq!(c.cell_for(Coordinate::new(4, 0)), None);
}

#[test]
fn replotting_same_cell_is_idempotent() {
    let mut c = Canvas::new(4, 4).unwrap();
    c.plot(Coordinate::new(1, 0)).unwrap();
    c.plot(Coordinate::new(1, 0)).unwrap();
    assert_eq!(c.occupied_count(), 1);
}

#[test]
fn out_of_bounds_is_an_error_not_a_clamp() {
    let mut c = Canvas::new(10, 10).unwrap();
    let err = c.plot(Coordinate::new(10, 10)).unwrap_err();
    assert!(matches!(
        err,
        DlavidError::OutOfBounds {
            x: 10,
            y: 10,
            width: 10,
            height: 10
        }
    ));
    assert!(c.plot(Coordinate::new(-6, 0)).is_err());
    assert!(c.plot(Coordinate::new(0, 5)).is_err());
    assert!(c.plot(Coordinate::new(i64::MAX, 0)).is_err());
    assert_eq!(c.occupied_count(), 0);
}

#[test]
fn snapshot_native_resolution_matches_cells() {
    let mut c = Canvas::new(10, 10).unwrap();
    c.plot(Coordinate::new(0, 0)).unwrap();
    for scale in [0, 1] {
        let f = c.snapshot(scale).unwrap();
        assert_eq!((f.width(), f.height()), (10, 10));
        assert_eq!(f.occupied_pixels(), vec![(5, 5)]);
    }
}

#[test]
fn snapshot_upscales_with_nearest_neighbor_blocks() {
    let mut c = Canvas::new(4, 3).unwrap();
    c.plot(Coordinate::new(-2, -1)).unwrap();
    let f = c.snapshot(3).unwrap();
    assert_eq!((f.width(), f.height()), (12, 9));

    let mut expected = Vec::new();
    for y in 0..3 {
        for x in 0..3 {
            expected.push((x, y));
        }
    }
    assert_eq!(f.occupied_pixels(), expected);
}

#[test]
fn snapshot_does_not_mutate_and_later_plots_do_not_leak_back() {
    let mut c = Canvas::new(6, 6).unwrap();
    c.plot(Coordinate::new(0, 0)).unwrap();
    let before = c.snapshot(1).unwrap();
    c.plot(Coordinate::new(1, 0)).unwrap();
    assert_eq!(before.occupied_pixels(), vec![(3, 3)]);
    assert_eq!(c.snapshot(1).unwrap().occupied_pixels(), vec![(3, 3), (4, 3)]);
}

#[test]
fn scaled_dims_detects_overflow() {
    assert_eq!(scaled_dims(300, 300, 2).unwrap(), (600, 600));
    assert_eq!(scaled_dims(300, 300, 0).unwrap(), (300, 300));
    assert!(scaled_dims(u32::MAX, 2, 2).is_err());
}
