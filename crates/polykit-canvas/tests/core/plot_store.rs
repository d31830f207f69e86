use std::sync::{Arc, Mutex};

use polykit_canvas::{Plot, PlotPoint, PlotStore, Polyline};
use polykit_core::{CanvasEvent, EventCategory, EventFilter, HistoryDirection};

#[test]
fn test_undo_on_empty_store() {
    // Scenario D
    let mut store = PlotStore::new();
    assert!(!store.undo());
    assert!(!store.redo());
    assert!(store.is_empty());
}

#[test]
fn test_history_bound() {
    let mut store = PlotStore::new();
    for i in 0..150 {
        store.add_plot(PlotPoint::new(format!("p{}", i), i as f64, 0.0));
    }
    assert_eq!(store.undo_depth(), 100);

    let mut undone = 0;
    while store.undo() {
        undone += 1;
    }
    assert_eq!(undone, 100);
    // The oldest 50 additions were evicted and cannot be undone.
    assert_eq!(store.len(), 50);
}

#[test]
fn test_custom_history_limit() {
    let mut store = PlotStore::with_history_limit(3);
    for i in 0..5 {
        store.add_plot(PlotPoint::new(format!("p{}", i), 0.0, 0.0));
    }
    assert_eq!(store.undo_depth(), 3);
}

#[test]
fn test_redo_invalidation() {
    let mut store = PlotStore::new();
    store.add_plot(PlotPoint::new("a", 0.0, 0.0));
    store.add_plot(PlotPoint::new("b", 0.0, 0.0));

    assert!(store.undo());
    assert!(store.can_redo());

    store.add_plot(PlotPoint::new("c", 0.0, 0.0));
    assert!(!store.can_redo());
    assert!(!store.redo());

    assert!(store.undo());
    assert!(store.redo());
}

#[test]
fn test_undo_restores_removed_plot() {
    let mut store = PlotStore::new();
    store.add_plot(PlotPoint::new("a", 1.0, 2.0));
    assert!(store.remove_plot("a"));
    assert!(store.is_empty());

    assert!(store.undo());
    let plot = store.get_plot("a").unwrap();
    assert_eq!(plot.points()[0].position(), (1.0, 2.0));
    assert!(plot.is_dirty());
}

#[test]
fn test_clear_is_undoable() {
    let mut store = PlotStore::new();
    store.add_plot(PlotPoint::new("a", 0.0, 0.0));
    store.add_plot(Polyline::new("line"));
    store.clear();
    assert!(store.is_empty());

    assert!(store.undo());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_restore_marks_everything_dirty() {
    let mut store = PlotStore::new();
    store.add_plot(PlotPoint::new("a", 0.0, 0.0));
    store.add_plot(PlotPoint::new("b", 0.0, 0.0));
    store.add_plot(PlotPoint::new("c", 0.0, 0.0));
    store.mark_all_updated();

    assert!(store.undo());
    let dirty: Vec<_> = store.plots_to_update().iter().map(|p| p.id().to_string()).collect();
    assert_eq!(dirty, vec!["a", "b"]);
}

#[test]
fn test_one_event_per_mutation() {
    let mut store = PlotStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |event| sink.lock().unwrap().push(event));

    store.add_plot(Polyline::new("line"));
    store.edit_plot("line", |plot: &mut Plot| {
        plot.add_vertex(PlotPoint::new("v", 0.0, 0.0))
    });
    store.undo();
    store.redo();
    store.remove_plot("line");
    store.remove_plot("line");
    store.clear();

    let events = seen.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            CanvasEvent::PlotAdded {
                id: "line".to_string()
            },
            CanvasEvent::PlotModified {
                id: "line".to_string()
            },
            CanvasEvent::HistoryRestored {
                direction: HistoryDirection::Undo
            },
            CanvasEvent::HistoryRestored {
                direction: HistoryDirection::Redo
            },
            CanvasEvent::PlotRemoved {
                id: "line".to_string()
            },
            CanvasEvent::Cleared,
        ]
    );
}

#[test]
fn test_filtered_subscription() {
    let mut store = PlotStore::new();
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    store.events().subscribe(
        EventFilter::Categories(vec![EventCategory::History]),
        move |_| *counter.lock().unwrap() += 1,
    );

    store.add_plot(PlotPoint::new("a", 0.0, 0.0));
    store.undo();
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_observer_sees_committed_state() {
    let mut store = PlotStore::new();
    let mut receiver = store.events().receiver();

    store.add_plot(PlotPoint::new("a", 0.0, 0.0));
    assert_eq!(
        receiver.try_recv().unwrap(),
        CanvasEvent::PlotAdded {
            id: "a".to_string()
        }
    );
    assert!(store.contains("a"));
}
