use shape_paint::{BoundingBox, Shape, ShapeColor, ShapeKind};

fn create_test_rectangle() -> Shape {
    Shape::new(ShapeColor::Red, ShapeKind::Rectangle, 10, 10)
}

#[test]
fn test_shape_creation() {
    let shape = create_test_rectangle();
    assert_eq!(shape.color(), ShapeColor::Red);
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.anchor(), (10, 10));
    assert_eq!(shape.drag(), (10, 10));
}

#[test]
fn test_only_final_drag_matters() {
    let mut forward = create_test_rectangle();
    forward.update_drag(-30, 7);
    forward.update_drag(200, 200);
    forward.update_drag(50, 40);

    let mut direct = create_test_rectangle();
    direct.update_drag(50, 40);

    assert_eq!(forward, direct);
    assert_eq!(forward.bounding_box(), BoundingBox::new(10, 10, 40, 30));
}

#[test]
fn test_bounding_box_matches_absolute_differences() {
    let drags = [(0, 0), (-15, 3), (10, 10), (1000, -1000), (10, -5)];
    for (x, y) in drags {
        let mut shape = create_test_rectangle();
        shape.update_drag(x, y);
        let bbox = shape.bounding_box();

        assert_eq!(bbox.width, 10i32.abs_diff(x));
        assert_eq!(bbox.height, 10i32.abs_diff(y));
        assert_eq!(bbox.x, 10i32.min(x));
        assert_eq!(bbox.y, 10i32.min(y));
    }
}

#[test]
fn test_repeated_drag_is_idempotent() {
    let mut shape = Shape::new(ShapeColor::Blue, ShapeKind::Ellipse, 0, 0);
    shape.update_drag(12, 34);
    let once = shape.clone();
    shape.update_drag(12, 34);
    assert_eq!(shape, once);
}

#[test]
fn test_anchor_never_moves() {
    let mut shape = Shape::new(ShapeColor::Green, ShapeKind::Point, 5, 6);
    shape.update_drag(-100, 900);
    assert_eq!(shape.anchor(), (5, 6));
}
