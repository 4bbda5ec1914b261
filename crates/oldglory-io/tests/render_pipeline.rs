use oldglory_core::{derive_layout, FlagParameters};
use oldglory_io::{render_svg, FlagConfig, IoError, SvgCanvas};
use oldglory_renderer::{CommandStream, FlagRenderer, RecordingCanvas};

#[test]
fn test_config_to_svg() {
    let config = FlagConfig::from_json(
        r##"{
            "flagSize": 1,
            "proportion": 1.5,
            "stripeCount": 7,
            "starRows": 3,
            "starCols": 4,
            "evenStripeColor": "#eeeeee",
            "jasperize": 2
        }"##,
    )
    .unwrap();
    let params = config.into_parameters();
    let svg = render_svg(&params).unwrap();

    assert!(svg.contains("width=\"108\" height=\"72\""));
    // 7 stripes + canton + 2 shadow rects, per copy.
    assert_eq!(svg.matches("<rect ").count(), 2 * 10);
    // A 3x4 checkerboard holds 2 + 2 + 2 stars.
    assert_eq!(svg.matches("<path ").count(), 2 * 6 * 2);
    assert!(svg.contains("fill=\"#eeeeee\""));
}

#[test]
fn test_recorded_stream_replays_to_same_svg() {
    let params = FlagParameters::default().with_size(2.0).with_repeat(3.0);
    let renderer = FlagRenderer::new(params.clone()).unwrap();

    let json = renderer.command_stream().to_json().unwrap();
    let stream = CommandStream::from_json(&json).unwrap();
    let mut replayed = SvgCanvas::new();
    stream.replay(&mut replayed);

    assert_eq!(replayed.finish(), render_svg(&params).unwrap());
}

#[test]
fn test_invalid_config_surfaces_flag_error() {
    let params = FlagConfig::from_json(r#"{ "starCols": 0 }"#)
        .unwrap()
        .into_parameters();
    match render_svg(&params) {
        Err(IoError::Flag(err)) => assert_eq!(err.parameter(), "starCols"),
        other => panic!("expected a parameter error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_layout_shared_across_copies() {
    let params = FlagParameters::default().with_repeat(4.0);
    let layout = derive_layout(&params).unwrap();
    let mut canvas = RecordingCanvas::new();
    let summary = oldglory_renderer::render(&params, &mut canvas).unwrap();
    assert_eq!(summary.passes, 4);
    assert_eq!(summary.stars_per_pass, layout.star_count());
    assert!((canvas.state().scale - 0.78f64.powi(4)).abs() < 1e-12);
}
