// seismic ray tracing through horizontal layers
//
// validate turns caller input into a SeismicModel and SourceSpec,
// trace follows one ray down through the layers with Snell's law,
// and the renderers present the resulting polyline

pub mod vec2;
pub use vec2::*;

pub mod field;
pub use field::*;

pub mod error;
pub use error::*;

pub mod layer;
pub use layer::*;

pub mod validate;
pub use validate::*;

pub mod ray;
pub use ray::*;

pub mod tracer;
pub use tracer::*;

pub mod sweep;
pub use sweep::*;

pub mod bounds;
pub use bounds::*;

pub mod render;
pub use render::*;

pub mod svg;
pub use svg::*;

pub mod canvas;
pub use canvas::*;

pub mod config;
pub use config::*;

// validate and trace in one call; nothing is traced when validation fails
pub fn run(raw: &RawModel) -> Result<TraceResult, ModelError> {
    let (model, source) = validate(raw)?;
    Ok(trace(&model, &source))
}
