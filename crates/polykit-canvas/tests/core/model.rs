use polykit_canvas::{Plot, PlotKind, PlotPoint, Polygon, Polyline};
use polykit_core::CanvasError;

fn polygon_with(n: usize) -> Polygon {
    let mut polygon = Polygon::new("poly");
    for i in 0..n {
        let angle = i as f64;
        polygon.add_point(PlotPoint::new(format!("v{}", i), angle.cos(), angle.sin()));
    }
    polygon
}

#[test]
fn test_point_distance() {
    let point = PlotPoint::new("p", 3.0, 4.0);
    assert_eq!(point.distance_to(0.0, 0.0), 5.0);
    assert_eq!(point.distance_to(3.0, 4.0), 0.0);
}

#[test]
fn test_point_mutation_marks_dirty() {
    let mut point = PlotPoint::new("p", 0.0, 0.0);
    point.set_dirty(false);
    point.set_color("k");
    assert!(point.is_dirty());
}

#[test]
fn test_polyline_remove_unknown_point() {
    let mut line = Polyline::new("line");
    line.add_point(PlotPoint::new("a", 0.0, 0.0));
    line.set_dirty(false);

    assert!(!line.remove_point("missing"));
    assert!(!line.is_dirty());
    assert_eq!(
        line.take_point("missing"),
        Err(CanvasError::PointNotFound {
            plot_id: "line".to_string(),
            point_id: "missing".to_string(),
        })
    );
}

#[test]
fn test_polyline_keeps_single_point() {
    // Scenario C: a polyline is not removed for dropping below two points.
    let mut line = Polyline::new("line");
    line.add_point(PlotPoint::new("a", 0.0, 0.0));
    line.add_point(PlotPoint::new("b", 1.0, 1.0));

    assert!(line.remove_point("a"));
    assert_eq!(line.len(), 1);
    assert_eq!(line.points()[0].id(), "b");
    assert!(line.point("a").is_none());
}

#[test]
fn test_polygon_inserts_before_closer() {
    let mut polygon = polygon_with(3);
    polygon.add_point(PlotPoint::new("extra", 9.0, 9.0));

    let ids: Vec<_> = polygon.points().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["v0", "v1", "v2", "extra", "v0_close"]);
}

#[test]
fn test_polygon_rejects_closer_removal() {
    let mut polygon = polygon_with(4);
    let before = polygon.clone();

    assert!(!polygon.remove_point("v0_close"));
    assert_eq!(polygon, before);
    assert!(matches!(
        polygon.take_point("v0_close"),
        Err(CanvasError::NonDeletablePoint { .. })
    ));
}

#[test]
fn test_polygon_reopens_below_three_points() {
    // [v0, v1, v2, close]: removing v1 keeps three entries and stays closed.
    let mut polygon = polygon_with(3);
    assert!(polygon.remove_point("v1"));
    assert_eq!(polygon.len(), 3);
    assert!(polygon.is_closed());

    // Down to two real entries: the closer is discarded.
    assert!(polygon.remove_point("v2"));
    assert!(!polygon.is_closed());
    assert_eq!(polygon.len(), 1);
    assert!(polygon.closing_point().is_none());
}

#[test]
fn test_plot_serialization() {
    let plot = Plot::from(polygon_with(3));
    let json = serde_json::to_string(&plot).unwrap();
    assert!(json.contains("\"kind\":\"polygon\""));

    let back: Plot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plot);
    assert_eq!(back.kind(), PlotKind::Polygon);
}

#[test]
fn test_point_coordinates_survive_json_exactly() {
    let point = PlotPoint::new("p", 1f64.sin(), 2f64.sin());
    let json = serde_json::to_string(&point).unwrap();

    let back: PlotPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back.x().to_bits(), 1f64.sin().to_bits());
    assert_eq!(back.y().to_bits(), 2f64.sin().to_bits());
}
