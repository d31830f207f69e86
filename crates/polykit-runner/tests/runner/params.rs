use polykit_canvas::{Editor, PlotKind, PlotPoint, PlotStore};
use polykit_runner::{AlgorithmInput, AlgorithmParams, RunnerError};
use polykit_settings::AlgorithmDefaults;

fn draw_polygon(editor: &mut Editor, corners: &[(f64, f64)]) {
    editor.set_plot_type(PlotKind::Polygon);
    for &(x, y) in corners {
        editor.add_point(x, y);
    }
    editor.clear_current_plot();
}

#[test]
fn test_no_polygon_means_missing_boundary() {
    let mut store = PlotStore::new();
    store.add_plot(PlotPoint::new("p", 1.0, 1.0));

    let input = AlgorithmInput::from_store(&store);
    let result = AlgorithmParams::new(input, &AlgorithmDefaults::default());
    assert!(matches!(result, Err(RunnerError::MissingBoundary)));
}

#[test]
fn test_params_from_drawn_polygons() {
    let mut editor = Editor::new();
    draw_polygon(&mut editor, &[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)]);
    draw_polygon(&mut editor, &[(10.0, 10.0), (20.0, 10.0), (15.0, 20.0)]);
    draw_polygon(&mut editor, &[(30.0, 30.0), (40.0, 30.0), (35.0, 40.0)]);

    let input = AlgorithmInput::from_store(editor.store());
    let params = AlgorithmParams::new(input, &AlgorithmDefaults::default()).unwrap();

    assert_eq!(params.boundary_list.len(), 4);
    assert_eq!(params.boundary_list[2], [50.0, 50.0]);
    assert_eq!(params.obstacle_count(), 2);
    assert_eq!(params.obstacle_margin, vec![2.0, 2.0]);
    assert_eq!(params.swath, 4.0);
}

#[test]
fn test_single_polygon_serializes_null_obstacles() {
    let mut editor = Editor::new();
    draw_polygon(&mut editor, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);

    let input = AlgorithmInput::from_store(editor.store());
    let params = AlgorithmParams::new(input, &AlgorithmDefaults::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&params.to_json().unwrap()).unwrap();

    assert!(value["obstacle_list"].is_null());
    assert_eq!(value["obstacle_margin"], serde_json::json!([]));
    assert_eq!(value["perimter_scaled_no"], 1);
    assert_eq!(value["boundary_list"][1], serde_json::json!([1.0, 0.0]));
}
