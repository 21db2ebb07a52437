use log::{debug, info};
use crate::layer::*;
use crate::ray::*;
use crate::vec2::*;

// one pass over the layers, shallow to deep
#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    // source layer not reached yet
    Searching,
    // angle the ray enters the current layer with
    Tracing { angle: f64 },
    Critical { layer: usize },
    Exhausted,
}

// what one layer contributes to the ray
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    offset: Vec2,
    time: f64,
}

impl Segment {
    fn through(thickness: f64, angle: f64, velocity: f64) -> Self {
	let offset = Vec2::new(thickness * angle.to_radians().tan(), thickness);
	Segment {
	    offset,
	    time: offset.length() / velocity,
	}
    }
}

// trace a ray from the source down through the model until it leaves the last layer
// or reaches a boundary it cannot cross
// source must come from validating this model (its depth lies in one of the layers)
pub fn trace(model: &SeismicModel, source: &SourceSpec) -> TraceResult {
    debug_assert!(model.source_layer(source.depth()).is_some(),
		  "source depth {} is outside the traced model", source.depth());
    let layers = model.layers();

    let mut position = Vec2::new(0.0, source.depth());
    let mut vertices = vec![position];
    let mut labels = Vec::new();
    let mut state = State::Searching;

    for (index, layer) in layers.iter().enumerate() {
	let (angle, thickness) = match state {
	    State::Searching if layer.contains(source.depth()) => {
		debug!("source at depth {} is in layer {}", source.depth(), index);
		(source.incidence_angle(), layer.thickness_below(source.depth()))
	    },
	    State::Searching => continue,
	    State::Tracing { angle } => (angle, layer.thickness()),
	    State::Critical { .. } | State::Exhausted => break,
	};

	let segment = Segment::through(thickness, angle, layer.velocity);
	position += segment.offset;
	vertices.push(position);
	labels.push(RayLabel::new(angle, segment.time));
	debug!("layer {}: angle {:.4} deg, thickness {}, dx {:.4}, time {:.6} s",
	       index, angle, thickness, segment.offset.x, segment.time);

	state = match layers.get(index + 1) {
	    None => State::Exhausted,
	    Some(next) => match refract(angle, layer.velocity, next.velocity) {
		Some(angle) => State::Tracing { angle },
		None => State::Critical { layer: index + 1 },
	    },
	};
    }

    let termination = match state {
	State::Critical { layer } => {
	    info!("ray stopped at critical angle before layer {} after {} segments", layer, labels.len());
	    Termination::Critical { layer }
	},
	_ => {
	    info!("ray left the model after {} segments", labels.len());
	    Termination::Exhausted
	},
    };

    TraceResult {
	vertices,
	labels,
	termination,
    }
}
