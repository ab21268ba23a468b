use super::*;

#[test]
fn oval_points_lie_on_the_oval() {
    let c = Point::new(250.0, 250.0);
    let pts = oval_points(c, 200.0, 100.0, 1000);
    assert_eq!(pts.len(), 1000);
    assert_eq!(pts[0], Point::new(450.0, 250.0));

    for p in &pts {
        let dx = (p.x - c.x) / 200.0;
        let dy = (p.y - c.y) / 100.0;
        assert!((dx * dx + dy * dy - 1.0).abs() < 1e-9);
    }
}

#[test]
fn rect_points_close_the_loop() {
    let pts = rect_points(Point::ZERO, 25.0, 25.0);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[0], *pts.last().unwrap());
    assert_eq!(pts[2], Point::new(25.0, 25.0));
}
