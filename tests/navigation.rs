use mandelbrot_viewer::{
    Colour, CursorPosition, FrameData, FrameSink, InputEvent, Point, Resolution, ScrollDirection,
    ViewState, ViewStateController, ViewerConfig, ViewerController, evaluate_pixel,
};

#[derive(Default)]
struct LastFrame {
    frame: Option<FrameData>,
}

impl FrameSink for LastFrame {
    fn present(&mut self, frame: FrameData) {
        self.frame = Some(frame);
    }
}

fn default_resolution() -> Resolution {
    ViewerConfig::default().resolution
}

#[test]
fn startup_view_centre_is_bounded() {
    let controller = ViewStateController::new(ViewState::default());
    let params = controller.snapshot(default_resolution()).unwrap();

    let centre = evaluate_pixel(Point { x: 400, y: 400 }, &params).unwrap();

    assert_eq!(centre.c.real, -0.5);
    assert_eq!(centre.c.imag, 0.0);
    assert_eq!(centre.iterations, 1500);
    assert_eq!(centre.colour, Colour::opaque(1.0, 1.0, 0.5));
}

#[test]
fn startup_view_corner_escapes_immediately() {
    let controller = ViewStateController::new(ViewState::default());
    let params = controller.snapshot(default_resolution()).unwrap();

    let corner = evaluate_pixel(Point { x: 0, y: 0 }, &params).unwrap();

    assert!((corner.c.real - -2.5).abs() < 1e-6);
    assert!((corner.c.imag - 2.0).abs() < 1e-6);
    assert!(corner.iterations <= 5);
    assert!(corner.colour.r < 0.01);
}

#[test]
fn zoom_in_and_out_round_trips_closely() {
    let mut controller = ViewStateController::new(ViewState::default());

    for _ in 0..10 {
        controller.handle(InputEvent::Scroll(ScrollDirection::Forward));
    }
    for _ in 0..10 {
        controller.handle(InputEvent::Scroll(ScrollDirection::Backward));
    }

    assert!((controller.view().zoom() - 200.0).abs() < 1e-9);
}

#[test]
fn drag_moves_a_feature_under_the_cursor() {
    let mut controller = ViewStateController::new(ViewState::default());
    let resolution = default_resolution();
    let grab = Point { x: 300, y: 350 };
    let drop = Point { x: 420, y: 500 };
    let before = controller.snapshot(resolution).unwrap();
    let grabbed = evaluate_pixel(grab, &before).unwrap().c;

    controller.handle(InputEvent::ButtonPress(CursorPosition {
        x: f64::from(grab.x),
        y: f64::from(grab.y),
    }));
    controller.handle(InputEvent::CursorMove(CursorPosition {
        x: f64::from(drop.x),
        y: f64::from(drop.y),
    }));
    controller.handle(InputEvent::ButtonRelease);

    let after = controller.snapshot(resolution).unwrap();
    let dropped = evaluate_pixel(drop, &after).unwrap().c;

    assert!((dropped.real - grabbed.real).abs() < 1e-5);
    assert!((dropped.imag - grabbed.imag).abs() < 1e-5);
}

#[test]
fn viewer_renders_full_resolution_frames() {
    let config = ViewerConfig::default();
    let resolution = Resolution::new(160, 160).unwrap();
    let view = ViewState::new(40.0, config.initial_view.offset(), 200).unwrap();
    let mut viewer = ViewerController::new(view, resolution);
    let mut sink = LastFrame::default();

    viewer.handle_input(InputEvent::Scroll(ScrollDirection::Forward));
    viewer.render_frame(&mut sink).unwrap();

    let frame = sink.frame.expect("a frame was presented");
    assert_eq!(frame.sequence, 1);
    assert_eq!(frame.pixel_buffer.resolution(), resolution);
    assert_eq!(
        frame.pixel_buffer.pixel(Point { x: 80, y: 80 }).unwrap(),
        [255, 255, 128, 255]
    );
}
