use super::*;

#[test]
fn inset_shrinks_and_saturates() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 3));
    assert_eq!(r.inset(Insets::xy(2, 0)), Rect::new(2, 0, 6, 5));
    assert!(Rect::new(0, 0, 2, 2).inset(Insets::all(3)).is_empty());
}

#[test]
fn intersect_of_disjoint_rects_is_empty() {
    let a = Rect::new(0, 0, 4, 4);
    assert_eq!(a.intersect(Rect::new(2, 2, 4, 4)), Rect::new(2, 2, 2, 2));
    assert!(a.intersect(Rect::new(9, 9, 1, 1)).is_empty());
}

#[test]
fn splits_clamp_to_available_rows() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(
        r.split_top(3),
        (Rect::new(0, 0, 10, 3), Rect::new(0, 3, 10, 2))
    );
    assert_eq!(
        r.split_bottom(9),
        (Rect::new(0, 0, 10, 0), Rect::new(0, 0, 10, 5))
    );
}

#[test]
fn centered_stays_inside() {
    let r = Rect::new(2, 2, 10, 5);
    assert_eq!(r.centered(4, 1), Rect::new(5, 4, 4, 1));
    assert_eq!(r.centered(100, 100), r);
}
