use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use crate::error::*;
use crate::field::*;
use crate::layer::*;

// the model exactly as supplied by the caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawModel {
    pub layers: Vec<RawLayer>,
    pub incidence_angle: Field,
    pub source_depth: Field,
}

impl RawModel {
    pub fn new(layers: Vec<Vec<Field>>, incidence_angle: Field, source_depth: Field) -> Self {
	RawModel {
	    layers: layers.into_iter().map(RawLayer::from).collect(),
	    incidence_angle,
	    source_depth,
	}
    }

    // convenience for already numeric input, one (top, bottom, velocity) per layer
    pub fn from_triples(layers: &[(f64, f64, f64)], incidence_angle: f64, source_depth: f64) -> Self {
	let layers: Vec<Vec<Field>> = layers.iter()
	    .map(|&(top, bottom, velocity)| vec![top.into(), bottom.into(), velocity.into()])
	    .collect();
	RawModel::new(layers, incidence_angle.into(), source_depth.into())
    }
}

// checks run in order and the first failure is returned
pub fn validate(raw: &RawModel) -> Result<(SeismicModel, SourceSpec), ModelError> {
    check_layer_count(raw)?;
    let (layers, incidence_angle, depth) = check_numeric(raw)?;
    check_velocity(&layers)?;

    let model = SeismicModel::new(layers);
    if model.source_layer(depth).is_none() {
	return Err(ModelError::SourceOutOfBounds { depth });
    }

    Ok((model, SourceSpec::new(depth, incidence_angle)))
}

fn check_layer_count(raw: &RawModel) -> Result<(), ModelError> {
    for (index, layer) in raw.layers.iter().enumerate() {
	if layer.len() != 3 {
	    return Err(ModelError::MalformedLayer { index, found: layer.len() });
	}
    }
    Ok(())
}

fn numeric(field: &Field, name: impl FnOnce() -> String) -> Result<f64, ModelError> {
    field.as_f64().ok_or_else(|| ModelError::NonNumericInput {
	field: format!("{} = {}", name(), field),
    })
}

// layer fields first, then angle, then depth
fn check_numeric(raw: &RawModel) -> Result<(Vec<Layer>, f64, f64), ModelError> {
    const NAMES: [&str; 3] = ["top", "bottom", "velocity"];

    let mut layers = Vec::with_capacity(raw.layers.len());
    for (index, layer) in raw.layers.iter().enumerate() {
	let mut values = [0.0; 3];
	for (slot, (field, name)) in layer.fields().iter().zip(NAMES).enumerate() {
	    values[slot] = numeric(field, || format!("layer {} {}", index, name))?;
	}
	layers.push(Layer::new(values[0], values[1], values[2]));
    }

    let incidence_angle = numeric(&raw.incidence_angle, || "incidence angle".to_owned())?;
    let depth = numeric(&raw.source_depth, || "source depth".to_owned())?;
    Ok((layers, incidence_angle, depth))
}

fn check_velocity(layers: &[Layer]) -> Result<(), ModelError> {
    for (index, layer) in layers.iter().enumerate() {
	if layer.velocity <= 0.0 {
	    return Err(ModelError::InvalidVelocity { index, velocity: layer.velocity });
	}
    }
    Ok(())
}

impl SeismicModel {
    // one row per layer; anything other than three columns is a malformed layer
    pub fn from_array(model: ArrayView2<f64>, incidence_angle: f64, source_depth: f64) -> Result<(SeismicModel, SourceSpec), ModelError> {
	let layers: Vec<Vec<Field>> = model.rows()
	    .into_iter()
	    .map(|row| row.iter().map(|&value| Field::Real(value)).collect())
	    .collect();
	validate(&RawModel::new(layers, incidence_angle.into(), source_depth.into()))
    }
}
