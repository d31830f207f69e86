use polykit_canvas::{
    Editor, InputEvent, InteractionHandler, InteractionOptions, Key, KeyEvent, Modifiers,
    PlotKind, PointerEvent, ViewNavigator, ViewRange, Viewport, WheelEvent,
};

/// Navigator double that maps pixels 1:1 onto world units and records calls.
#[derive(Default)]
struct RecordingView {
    range: Option<ViewRange>,
    pans: Vec<(f64, f64)>,
}

impl ViewNavigator for RecordingView {
    fn view_range(&self) -> ViewRange {
        self.range.unwrap_or_default()
    }

    fn set_view_range(&mut self, range: ViewRange) {
        self.range = Some(range);
    }

    fn widget_size(&self) -> (f64, f64) {
        (100.0, 100.0)
    }

    fn map_to_world(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        (pixel_x, pixel_y)
    }

    fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.pans.push((dx, dy));
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn press(x: f64, y: f64) -> InputEvent {
    InputEvent::Press(PointerEvent::left(x, y))
}

fn ctrl_press(x: f64, y: f64) -> InputEvent {
    InputEvent::Press(PointerEvent::left(x, y).with_modifiers(Modifiers::CTRL))
}

fn drag(x: f64, y: f64) -> InputEvent {
    InputEvent::Move(PointerEvent::left(x, y))
}

fn key_z(modifiers: Modifiers) -> InputEvent {
    InputEvent::KeyPress(KeyEvent {
        key: Key::Char('z'),
        modifiers,
    })
}

#[test]
fn test_drag_beyond_threshold_pans() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = RecordingView::default();

    assert!(handler.handle(press(10.0, 10.0), &mut editor, &mut view));
    assert!(!handler.handle(drag(14.0, 10.0), &mut editor, &mut view));
    assert!(handler.handle(drag(16.0, 10.0), &mut editor, &mut view));
    assert!(handler.is_dragging());
    assert_eq!(handler.drag_start(), Some((16.0, 10.0)));

    // Subsequent movement is measured from the last pan position.
    assert!(handler.handle(drag(22.0, 10.0), &mut editor, &mut view));
    assert_eq!(view.pans, vec![(6.0, 0.0), (6.0, 0.0)]);

    assert!(handler.handle(
        InputEvent::Release(PointerEvent::left(22.0, 10.0)),
        &mut editor,
        &mut view
    ));
    assert!(!handler.is_dragging());
    assert!(handler.drag_start().is_none());

    // The press still placed exactly one point.
    assert_eq!(editor.store().len(), 1);
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = RecordingView::default();

    assert!(!handler.handle(drag(50.0, 50.0), &mut editor, &mut view));
    assert!(view.pans.is_empty());
}

#[test]
fn test_drag_pans_viewport_range() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = Viewport::new(ViewRange::new((0.0, 100.0), (0.0, 100.0)), 200.0, 200.0);

    handler.handle(press(100.0, 100.0), &mut editor, &mut view);
    handler.handle(drag(120.0, 100.0), &mut editor, &mut view);

    let range = view.range();
    assert!(approx(range.x_min, -10.0));
    assert!(approx(range.x_max, 90.0));
    assert!(approx(range.y_min, 0.0));
}

#[test]
fn test_ctrl_click_deletes() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = RecordingView::default();

    handler.handle(press(10.0, 10.0), &mut editor, &mut view);
    handler.handle(
        InputEvent::Release(PointerEvent::left(10.0, 10.0)),
        &mut editor,
        &mut view,
    );
    assert_eq!(editor.store().len(), 1);

    // Nothing within range: not consumed, nothing deleted.
    assert!(!handler.handle(ctrl_press(40.0, 40.0), &mut editor, &mut view));
    assert_eq!(editor.store().len(), 1);

    assert!(handler.handle(ctrl_press(15.0, 15.0), &mut editor, &mut view));
    assert!(editor.store().is_empty());
    assert!(handler.drag_start().is_none());
}

#[test]
fn test_custom_delete_threshold() {
    let options = InteractionOptions {
        delete_threshold: 1.0,
        ..InteractionOptions::default()
    };
    let mut handler = InteractionHandler::with_options(options);
    let mut editor = Editor::new();
    let mut view = RecordingView::default();

    editor.add_point(0.0, 0.0);
    assert!(!handler.handle(ctrl_press(2.0, 0.0), &mut editor, &mut view));
    assert!(handler.handle(ctrl_press(1.0, 0.0), &mut editor, &mut view));
}

#[test]
fn test_ctrl_wheel_zooms_about_cursor() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = Viewport::new(ViewRange::new((0.0, 100.0), (0.0, 100.0)), 100.0, 100.0);

    // Pixel (25, 75) is world (25, 25).
    let wheel = |delta: f64| {
        InputEvent::Wheel(WheelEvent {
            x: 25.0,
            y: 75.0,
            delta,
            modifiers: Modifiers::CTRL,
        })
    };

    assert!(handler.handle(wheel(120.0), &mut editor, &mut view));
    let range = view.range();
    assert!(approx(range.width(), 110.0));
    assert!(approx(range.height(), 110.0));
    let (wx, wy) = view.pixel_to_world(25.0, 75.0);
    assert!(approx(wx, 25.0));
    assert!(approx(wy, 25.0));

    assert!(handler.handle(wheel(-120.0), &mut editor, &mut view));
    assert!(approx(view.range().width(), 99.0));
    let (wx, wy) = view.pixel_to_world(25.0, 75.0);
    assert!(approx(wx, 25.0));
    assert!(approx(wy, 25.0));
}

#[test]
fn test_undo_redo_keys() {
    let mut handler = InteractionHandler::new();
    let mut editor = Editor::new();
    let mut view = RecordingView::default();
    editor.set_plot_type(PlotKind::Polyline);

    handler.handle(press(0.0, 0.0), &mut editor, &mut view);
    handler.handle(press(10.0, 0.0), &mut editor, &mut view);
    let id = editor.current_plot_id().unwrap().to_string();

    assert!(handler.handle(key_z(Modifiers::CTRL), &mut editor, &mut view));
    assert_eq!(editor.store().get_plot(&id).unwrap().points().len(), 1);

    assert!(handler.handle(key_z(Modifiers::CTRL_SHIFT), &mut editor, &mut view));
    assert_eq!(editor.store().get_plot(&id).unwrap().points().len(), 2);

    // Consumed even when there is nothing left to redo.
    assert!(handler.handle(key_z(Modifiers::CTRL_SHIFT), &mut editor, &mut view));
}
