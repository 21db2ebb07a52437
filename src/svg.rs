use std::io::{self, Write};
use crate::bounds::*;
use crate::ray::*;
use crate::render::*;
use crate::vec2::*;

const MARGIN: f64 = 0.1;

// vector picture: dashed depth line per vertex, the ray, a marker and annotation per vertex
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    width: usize,
    height: usize,
}

impl SvgRenderer {
    pub fn new(width: usize, height: usize) -> Self {
	SvgRenderer {
	    width,
	    height,
	}
    }

    fn project(&self, bounds: Bounds, point: Vec2) -> Vec2 {
	let unit = bounds.normalize(point);
	Vec2::new(unit.x * self.width as f64, unit.y * self.height as f64)
    }
}

impl Render for SvgRenderer {
    fn render(&self, result: &TraceResult, out: &mut dyn Write) -> io::Result<()> {
	let bounds = Bounds::from_points(&result.vertices).padded(MARGIN);

	writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
		 w = self.width, h = self.height)?;
	writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

	for vertex in result.vertices.iter().filter(|vertex| vertex.is_finite()) {
	    let y = self.project(bounds, *vertex).y;
	    writeln!(out, r#"<line x1="0" y1="{y:.2}" x2="{w}" y2="{y:.2}" stroke="red" stroke-dasharray="6 4"/>"#,
		     y = y, w = self.width)?;
	}

	let points: Vec<String> = result.vertices.iter()
	    .filter(|vertex| vertex.is_finite())
	    .map(|vertex| {
		let point = self.project(bounds, *vertex);
		format!("{:.2},{:.2}", point.x, point.y)
	    })
	    .collect();
	writeln!(out, r#"<polyline points="{}" fill="none" stroke="steelblue" stroke-width="2"/>"#, points.join(" "))?;

	for (vertex, label) in result.annotated().filter(|(vertex, _)| vertex.is_finite()) {
	    let point = self.project(bounds, vertex);
	    writeln!(out, r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="steelblue"/>"#, point.x, point.y)?;
	    writeln!(out, r#"<text x="{:.2}" y="{:.2}" font-size="10" font-family="monospace">"#, point.x + 5.0, point.y)?;
	    for (i, line) in vertex_annotation(vertex, label).iter().enumerate() {
		let dy = if i == 0 {0} else {12};
		writeln!(out, r#"<tspan x="{:.2}" dy="{}">{}</tspan>"#, point.x + 5.0, dy, line)?;
	    }
	    writeln!(out, "</text>")?;
	}

	writeln!(out, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_depth_line_and_marker_per_vertex() {
	let result = TraceResult {
	    vertices: vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 100.0), Vec2::new(30.0, 300.0)],
	    labels: vec![RayLabel::new(5.7, 0.1), RayLabel::new(6.1, 0.2)],
	    termination: Termination::Critical { layer: 2 },
	};
	let mut out = Vec::new();
	SvgRenderer::new(400, 300).render(&result, &mut out).unwrap();
	let svg = String::from_utf8(out).unwrap();

	assert!(svg.starts_with("<svg"));
	assert!(svg.trim_end().ends_with("</svg>"));
	assert_eq!(svg.matches("stroke-dasharray").count(), 3);
	assert_eq!(svg.matches("<circle").count(), 3);
	assert_eq!(svg.matches("<polyline").count(), 1);
	assert_eq!(svg.matches("incidence angle:").count(), 2);
    }
}
