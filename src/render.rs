use std::io::{self, Write};
use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use crate::canvas::*;
use crate::ray::*;
use crate::svg::*;

// anything that can present a finished trace; never changes the trace itself
#[enum_dispatch]
pub trait Render {
    fn render(&self, result: &TraceResult, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
    Svg,
    Ppm,
}

#[derive(Clone, Debug)]
#[enum_dispatch(Render)]
pub enum Renderer {
    Text(TextRenderer),
    Json(JsonRenderer),
    Svg(SvgRenderer),
    Ppm(PpmRenderer),
}

impl Renderer {
    pub fn new(format: Format, width: usize, height: usize) -> Self {
	match format {
	    Format::Text => Renderer::from(TextRenderer),
	    Format::Json => Renderer::from(JsonRenderer),
	    Format::Svg => Renderer::from(SvgRenderer::new(width, height)),
	    Format::Ppm => Renderer::from(PpmRenderer::new(width, height)),
	}
    }
}

// the annotation shown next to each vertex
pub fn vertex_annotation(vertex: RayVertex, label: Option<RayLabel>) -> Vec<String> {
    let mut lines = vec![format!("x:{}", vertex.x), format!("y:{}", vertex.y)];
    if let Some(label) = label {
	lines.push(format!("incidence angle:{}", label.incidence_angle));
	lines.push(format!("time:{}", label.time));
    }
    lines
}

// one annotation block per vertex, blank line between blocks
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(&self, result: &TraceResult, out: &mut dyn Write) -> io::Result<()> {
	for (i, (vertex, label)) in result.annotated().enumerate() {
	    if i > 0 {
		writeln!(out)?;
	    }
	    for line in vertex_annotation(vertex, label) {
		writeln!(out, "{}", line)?;
	    }
	}
	match result.termination {
	    Termination::Exhausted => writeln!(out, "\nray left the model, total time:{}", result.total_time()),
	    Termination::Critical { layer } => writeln!(out, "\ncritical angle before layer {}, total time:{}", layer, result.total_time()),
	}
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, result: &TraceResult, out: &mut dyn Write) -> io::Result<()> {
	serde_json::to_writer_pretty(&mut *out, result)?;
	writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::*;

    fn sample() -> TraceResult {
	TraceResult {
	    vertices: vec![Vec2::new(0.0, 50.0), Vec2::new(0.0, 100.0)],
	    labels: vec![RayLabel::new(0.0, 0.025)],
	    termination: Termination::Exhausted,
	}
    }

    fn rendered(format: Format) -> Vec<u8> {
	let mut out = Vec::new();
	Renderer::new(format, 200, 100).render(&sample(), &mut out).unwrap();
	out
    }

    #[test]
    fn text_blocks() {
	let text = String::from_utf8(rendered(Format::Text)).unwrap();
	assert!(text.starts_with("x:0\ny:50\nincidence angle:0\ntime:0.025\n\nx:0\ny:100\n"));
	assert!(text.contains("ray left the model"));
    }

    #[test]
    fn last_vertex_annotation_is_coordinates_only() {
	assert_eq!(vertex_annotation(Vec2::new(1.5, 2.0), None), vec!["x:1.5", "y:2"]);
    }

    #[test]
    fn json_round_trips_through_value() {
	let json: serde_json::Value = serde_json::from_slice(&rendered(Format::Json)).unwrap();
	assert_eq!(json["vertices"][1]["y"], 100.0);
	assert_eq!(json["labels"][0]["time"], 0.025);
	assert_eq!(json["termination"]["kind"], "exhausted");
    }

    #[test]
    fn format_names() {
	let format: Format = serde_json::from_str("\"svg\"").unwrap();
	assert_eq!(format, Format::Svg);
	assert_eq!(Format::default(), Format::Text);
    }
}
