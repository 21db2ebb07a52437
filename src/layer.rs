// a horizontal slab of constant velocity
// top and bottom are signed vertical coordinates, velocity is always > 0 once validated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub top: f64,
    pub bottom: f64,
    pub velocity: f64,
}

impl Layer {
    pub fn new(top: f64, bottom: f64, velocity: f64) -> Self {
	Layer {
	    top,
	    bottom,
	    velocity,
	}
    }

    pub fn thickness(&self) -> f64 {
	(self.bottom - self.top).abs()
    }

    // thickness left to travel when starting inside the layer
    pub fn thickness_below(&self, depth: f64) -> f64 {
	(self.bottom - depth).abs()
    }

    // half open: the top belongs to the layer, the bottom to the next one
    pub fn contains(&self, depth: f64) -> bool {
	if self.top <= self.bottom {
	    self.top <= depth && depth < self.bottom
	} else {
	    self.bottom < depth && depth <= self.top
	}
    }
}

// ordered shallow to deep, immutable while tracing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeismicModel {
    layers: Vec<Layer>,
}

impl SeismicModel {
    // does not validate, see validate::validate for checked construction
    pub(crate) fn new(layers: Vec<Layer>) -> Self {
	SeismicModel {
	    layers,
	}
    }

    pub fn layers(&self) -> &[Layer] {
	&self.layers
    }

    pub fn len(&self) -> usize {
	self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
	self.layers.is_empty()
    }

    // first layer by index that contains depth
    pub fn source_layer(&self, depth: f64) -> Option<usize> {
	self.layers.iter().position(|layer| layer.contains(depth))
    }
}

// incidence angle in degrees from the vertical
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceSpec {
    depth: f64,
    incidence_angle: f64,
}

impl SourceSpec {
    pub(crate) fn new(depth: f64, incidence_angle: f64) -> Self {
	SourceSpec {
	    depth,
	    incidence_angle,
	}
    }

    pub fn depth(&self) -> f64 {
	self.depth
    }

    pub fn incidence_angle(&self) -> f64 {
	self.incidence_angle
    }

    // same source fired at another angle, depth stays validated
    pub fn with_angle(self, incidence_angle: f64) -> Self {
	SourceSpec {
	    incidence_angle,
	    ..self
	}
    }
}

// Snell's law across a horizontal boundary, angles in degrees
// None past the critical angle (the ray cannot enter the next layer)
pub fn refract(angle: f64, velocity: f64, next_velocity: f64) -> Option<f64> {
    let sin_beta = angle.to_radians().sin() * (next_velocity / velocity);
    if sin_beta.abs() > 1.0 {
	return None;
    }
    Some(sin_beta.asin().to_degrees())
}
