use serde::Serialize;
use crate::vec2::*;

// one corner of the ray's polyline: x is offset from the source, y is depth
pub type RayVertex = Vec2;

// angle (degrees) the ray enters a segment with, and the time spent in it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RayLabel {
    pub incidence_angle: f64,
    pub time: f64,
}

impl RayLabel {
    pub fn new(incidence_angle: f64, time: f64) -> Self {
	RayLabel {
	    incidence_angle,
	    time,
	}
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    // passed through the last layer
    Exhausted,
    // could not enter this layer, past the critical angle
    Critical { layer: usize },
}

// vertices has one more element than labels; the last vertex only ends a segment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceResult {
    pub vertices: Vec<RayVertex>,
    pub labels: Vec<RayLabel>,
    pub termination: Termination,
}

impl TraceResult {
    pub fn layers_traversed(&self) -> usize {
	self.labels.len()
    }

    pub fn total_time(&self) -> f64 {
	self.labels.iter().map(|label| label.time).sum()
    }

    pub fn endpoint(&self) -> Option<RayVertex> {
	self.vertices.last().copied()
    }

    pub fn is_critical(&self) -> bool {
	matches!(self.termination, Termination::Critical { .. })
    }

    // each vertex with the label of the segment it starts, if any
    pub fn annotated(&self) -> impl Iterator<Item = (RayVertex, Option<RayLabel>)> + '_ {
	self.vertices.iter()
	    .enumerate()
	    .map(|(i, vertex)| (*vertex, self.labels.get(i).copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segments() -> TraceResult {
	TraceResult {
	    vertices: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 10.0), Vec2::new(3.0, 30.0)],
	    labels: vec![RayLabel::new(5.0, 0.5), RayLabel::new(6.0, 0.25)],
	    termination: Termination::Exhausted,
	}
    }

    #[test]
    fn summary_values() {
	let result = two_segments();
	assert_eq!(result.layers_traversed(), 2);
	assert_eq!(result.total_time(), 0.75);
	assert_eq!(result.endpoint(), Some(Vec2::new(3.0, 30.0)));
	assert!(!result.is_critical());
    }

    #[test]
    fn final_vertex_has_no_label() {
	let annotated: Vec<_> = two_segments().annotated().collect();
	assert_eq!(annotated.len(), 3);
	assert_eq!(annotated[0].1, Some(RayLabel::new(5.0, 0.5)));
	assert_eq!(annotated[2].1, None);
    }

    #[test]
    fn termination_serializes_tagged() {
	let json = serde_json::to_value(Termination::Critical { layer: 3 }).unwrap();
	assert_eq!(json, serde_json::json!({"kind": "critical", "layer": 3}));
    }
}
