use polykit_canvas::{Plot, PlotPoint, PlotStore, Polygon};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum PolygonOp {
    Add(f64, f64),
    Remove(usize),
}

fn polygon_op() -> impl Strategy<Value = PolygonOp> {
    prop_oneof![
        (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| PolygonOp::Add(x, y)),
        (0usize..16).prop_map(PolygonOp::Remove),
    ]
}

#[derive(Debug, Clone)]
enum StoreOp {
    AddPoint(f64, f64),
    AddPolygon,
    AddVertex(usize, f64, f64),
    Remove(usize),
    Clear,
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => (-50.0f64..50.0, -50.0f64..50.0).prop_map(|(x, y)| StoreOp::AddPoint(x, y)),
        2 => Just(StoreOp::AddPolygon),
        4 => (0usize..8, -50.0f64..50.0, -50.0f64..50.0)
            .prop_map(|(i, x, y)| StoreOp::AddVertex(i, x, y)),
        2 => (0usize..8).prop_map(StoreOp::Remove),
        1 => Just(StoreOp::Clear),
    ]
}

fn assert_closure(polygon: &Polygon) -> Result<(), TestCaseError> {
    let points = polygon.points();
    prop_assert_eq!(polygon.is_closed(), points.len() >= 3);
    if polygon.is_closed() {
        let first = &points[0];
        let last = &points[points.len() - 1];
        prop_assert_eq!(first.position(), last.position());
        prop_assert!(!last.is_deletable());
    }
    Ok(())
}

/// Plots with dirty flags cleared, for comparing store contents.
fn contents(store: &PlotStore) -> Vec<Plot> {
    store
        .iter()
        .cloned()
        .map(|mut plot| {
            plot.set_dirty(false);
            plot
        })
        .collect()
}

/// Applies one operation. Returns false when it had nothing to act on.
fn apply(store: &mut PlotStore, op: &StoreOp, counter: &mut usize) -> bool {
    *counter += 1;
    let fresh = format!("id{}", counter);
    match *op {
        StoreOp::AddPoint(x, y) => {
            store.add_plot(PlotPoint::new(fresh, x, y));
            true
        }
        StoreOp::AddPolygon => {
            store.add_plot(Polygon::new(fresh));
            true
        }
        StoreOp::AddVertex(i, x, y) => {
            let polygons: Vec<String> = store
                .iter()
                .filter_map(Plot::as_polygon)
                .map(|p| p.id().to_string())
                .collect();
            if polygons.is_empty() {
                return false;
            }
            let target = &polygons[i % polygons.len()];
            store
                .edit_plot(target, |plot| plot.add_vertex(PlotPoint::new(fresh, x, y)))
                .is_some()
        }
        StoreOp::Remove(i) => {
            if store.is_empty() {
                return false;
            }
            let id = store.plots()[i % store.len()].id().to_string();
            store.remove_plot(&id)
        }
        StoreOp::Clear => {
            store.clear();
            true
        }
    }
}

proptest! {
    #[test]
    fn polygon_closure_holds_after_any_edit(ops in prop::collection::vec(polygon_op(), 0..40)) {
        let mut polygon = Polygon::new("poly");
        for (n, op) in ops.into_iter().enumerate() {
            match op {
                PolygonOp::Add(x, y) => polygon.add_point(PlotPoint::new(format!("v{}", n), x, y)),
                PolygonOp::Remove(i) => {
                    if !polygon.is_empty() {
                        let id = polygon.points()[i % polygon.len()].id().to_string();
                        polygon.remove_point(&id);
                    }
                }
            }
            assert_closure(&polygon)?;
        }
    }

    #[test]
    fn closing_point_cannot_be_removed(n in 3usize..12) {
        let mut polygon = Polygon::new("poly");
        for i in 0..n {
            let angle = i as f64;
            polygon.add_point(PlotPoint::new(format!("v{}", i), angle.cos(), angle.sin()));
        }
        let closer = polygon.closing_point().map(|p| p.id().to_string());
        prop_assert!(closer.is_some());

        let before = polygon.clone();
        let closer = closer.unwrap_or_default();
        prop_assert!(!polygon.remove_point(&closer));
        prop_assert_eq!(polygon, before);
    }

    #[test]
    fn undo_redo_round_trip(ops in prop::collection::vec(store_op(), 1..30)) {
        let mut store = PlotStore::new();
        let mut counter = 0;
        let mut applied = 0;
        for op in &ops {
            if apply(&mut store, op, &mut counter) {
                applied += 1;
            }
        }
        let final_state = contents(&store);

        for _ in 0..applied {
            prop_assert!(store.undo());
        }
        prop_assert!(store.is_empty());
        prop_assert!(!store.undo());

        for _ in 0..applied {
            prop_assert!(store.redo());
        }
        prop_assert_eq!(contents(&store), final_state);
        prop_assert!(!store.redo());
    }
}
