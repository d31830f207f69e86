use polykit_canvas::{Editor, PlotKind, PointHit};

fn polygon_editor(points: &[(f64, f64)]) -> (Editor, String) {
    let mut editor = Editor::new();
    editor.set_plot_type(PlotKind::Polygon);
    let mut id = String::new();
    for &(x, y) in points {
        id = editor.add_point(x, y);
    }
    (editor, id)
}

#[test]
fn test_scenario_polygon_closes_and_undoes() {
    let (mut editor, id) = polygon_editor(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

    let polygon = editor.store().get_plot(&id).unwrap().as_polygon().unwrap();
    assert_eq!(polygon.len(), 4);
    assert!(polygon.is_closed());
    assert_eq!(polygon.points().last().unwrap().position(), (0.0, 0.0));

    assert!(editor.undo());
    let polygon = editor.store().get_plot(&id).unwrap().as_polygon().unwrap();
    assert_eq!(polygon.len(), 2);
    assert!(!polygon.is_closed());
}

#[test]
fn test_scenario_point_mode_never_accumulates() {
    let mut editor = Editor::new();
    let first = editor.add_point(5.0, 5.0);
    let second = editor.add_point(5.0, 5.0);

    assert_ne!(first, second);
    assert_eq!(editor.store().len(), 2);
    assert!(editor.current_plot_id().is_none());
}

#[test]
fn test_polyline_extends_current_shape() {
    let mut editor = Editor::new();
    editor.set_plot_type(PlotKind::Polyline);
    let a = editor.add_point(0.0, 0.0);
    let b = editor.add_point(1.0, 1.0);
    assert_eq!(a, b);
    assert_eq!(editor.store().get_plot(&a).unwrap().points().len(), 2);

    editor.clear_current_plot();
    let c = editor.add_point(2.0, 2.0);
    assert_ne!(a, c);
    assert_eq!(editor.store().len(), 2);
}

#[test]
fn test_first_shape_point_creates_two_history_steps() {
    let mut editor = Editor::new();
    editor.set_plot_type(PlotKind::Polyline);
    editor.add_point(0.0, 0.0);
    assert_eq!(editor.store().undo_depth(), 2);

    editor.add_point(1.0, 0.0);
    assert_eq!(editor.store().undo_depth(), 3);
}

#[test]
fn test_hit_test_threshold_is_inclusive() {
    let mut editor = Editor::new();
    editor.add_point(0.0, 0.0);

    assert!(!editor.delete_point_near(3.0, 4.0, 4.99));
    assert_eq!(editor.store().len(), 1);

    assert!(editor.delete_point_near(3.0, 4.0, 5.0));
    assert!(editor.store().is_empty());
}

#[test]
fn test_miss_mutates_nothing() {
    let (mut editor, _) = polygon_editor(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let depth = editor.store().undo_depth();
    let before = editor.store().plots().to_vec();

    assert!(!editor.delete_point_near(50.0, 50.0, 10.0));
    assert_eq!(editor.store().undo_depth(), depth);
    assert_eq!(editor.store().plots(), before.as_slice());
}

#[test]
fn test_first_match_wins_not_nearest() {
    let mut editor = Editor::new();
    let far = editor.add_point(8.0, 0.0);
    let near = editor.add_point(1.0, 0.0);

    assert_eq!(
        editor.find_point_near(0.0, 0.0, 10.0),
        Some(PointHit::Plot {
            plot_id: far.clone()
        })
    );
    assert!(editor.delete_point_near(0.0, 0.0, 10.0));
    assert!(editor.store().contains(&near));
    assert!(!editor.store().contains(&far));
}

#[test]
fn test_delete_vertex_is_undoable() {
    let mut editor = Editor::new();
    editor.set_plot_type(PlotKind::Polyline);
    let id = editor.add_point(0.0, 0.0);
    editor.add_point(20.0, 0.0);

    assert!(editor.delete_point_near(20.0, 1.0, 2.0));
    assert_eq!(editor.store().get_plot(&id).unwrap().points().len(), 1);

    assert!(editor.undo());
    assert_eq!(editor.store().get_plot(&id).unwrap().points().len(), 2);
}

#[test]
fn test_non_finite_coordinates_are_accepted() {
    let mut editor = Editor::new();
    let id = editor.add_point(f64::NAN, f64::INFINITY);
    let point = editor.store().get_plot(&id).unwrap().points()[0].clone();
    assert!(point.x().is_nan());
    assert!(point.y().is_infinite());

    // NaN never falls within any threshold.
    assert!(!editor.delete_point_near(0.0, 0.0, f64::MAX));
}

#[test]
fn test_clear_ends_shape() {
    let (mut editor, id) = polygon_editor(&[(0.0, 0.0), (1.0, 0.0)]);
    editor.clear();
    assert!(editor.store().is_empty());
    assert!(editor.current_plot_id().is_none());

    let new_id = editor.add_point(0.0, 0.0);
    assert_ne!(new_id, id);
}
