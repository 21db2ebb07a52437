use seismic_rt::*;

fn triples(layers: &[(f64, f64, f64)], angle: f64, depth: f64) -> Result<TraceResult, ModelError> {
    run(&RawModel::from_triples(layers, angle, depth))
}

#[test]
fn single_layer_vertical_ray() {
    let result = triples(&[(0.0, 100.0, 2000.0)], 0.0, 50.0).unwrap();
    assert_eq!(result.vertices, vec![Vec2::new(0.0, 50.0), Vec2::new(0.0, 100.0)]);
    assert_eq!(result.labels, vec![RayLabel::new(0.0, 0.025)]);
}

#[test]
fn source_below_model() {
    let err = triples(&[(0.0, 100.0, 2000.0)], 0.0, 150.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceOutOfBounds);
}

#[test]
fn zero_velocity_layer() {
    let err = triples(&[(0.0, 100.0, 0.0)], 0.0, 50.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVelocity);
}

#[test]
fn sharp_velocity_increase_stops_the_ray() {
    let result = triples(&[(0.0, 100.0, 1000.0), (100.0, 200.0, 5000.0)], 30.0, 0.0).unwrap();
    assert_eq!(result.vertices.len(), 2);
    assert_eq!(result.termination, Termination::Critical { layer: 1 });
}

#[test]
fn zero_angle_goes_straight_down_everywhere() {
    let layers = [
	(0.0, 100.0, 1500.0),
	(100.0, 300.0, 6000.0),
	(300.0, 350.0, 300.0),
	(350.0, 1000.0, 9000.0),
    ];
    let result = triples(&layers, 0.0, 20.0).unwrap();
    assert_eq!(result.vertices.len(), 5);
    assert!(result.vertices.iter().all(|vertex| vertex.x == 0.0));
    assert!(result.labels.iter().all(|label| label.incidence_angle == 0.0));
    assert_eq!(result.endpoint(), Some(Vec2::new(0.0, 1000.0)));
}

#[test]
fn malformed_layer_wins_over_everything() {
    let raw = RawModel::new(
	vec![vec![Field::from(0), Field::from(100)], vec![Field::from("x"), Field::from(0), Field::from(-1)]],
	Field::from("nope"),
	Field::from(1e6),
    );
    assert_eq!(run(&raw).unwrap_err().kind(), ErrorKind::MalformedLayer);
}

#[test]
fn built_in_model_reaches_the_surface() {
    let result = run(&Config::default().to_raw()).unwrap();
    // velocities only decrease downward, so the ray never hits a critical angle
    assert_eq!(result.termination, Termination::Exhausted);
    assert_eq!(result.vertices.len(), 7);
    assert_eq!(result.labels[0].incidence_angle, 39.85);
    assert_eq!(result.endpoint().map(|vertex| vertex.y), Some(500.0));
    for pair in result.labels.windows(2) {
	assert!(pair[1].incidence_angle < pair[0].incidence_angle);
    }
}

#[test]
fn config_file_to_svg() {
    let config = Config::parse(r#"{
	"layers": [[0, 100, 1000], [100, 250, 1400]],
	"incidence_angle": 12.5,
	"source_depth": 10,
	"render": {"format": "svg", "width": 320, "height": 240}
    }"#).unwrap();
    let result = run(&config.to_raw()).unwrap();

    let mut out = Vec::new();
    Renderer::new(config.render.format, config.render.width, config.render.height)
	.render(&result, &mut out)
	.unwrap();
    let svg = String::from_utf8(out).unwrap();
    assert!(svg.contains(r#"width="320""#));
    assert_eq!(svg.matches("<circle").count(), 3);
}
