use std::io::{self, Write};
use ndarray::{Array2, Axis};
use crate::bounds::*;
use crate::ray::*;
use crate::render::*;
use crate::vec2::*;

const XAXIS: Axis = Axis(1);
const YAXIS: Axis = Axis(0);

const WHITE: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [220, 40, 40];
const BLUE: [u8; 3] = [40, 90, 180];

const MARGIN: f64 = 0.1;
const DASH: usize = 6;

// row major pixel grid, row 0 is the shallowest depth
pub struct Canvas(Array2<[u8; 3]>);

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
	Canvas(Array2::from_elem((height, width), WHITE))
    }

    pub fn width(&self) -> usize {
	self.0.len_of(XAXIS)
    }

    pub fn height(&self) -> usize {
	self.0.len_of(YAXIS)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
	self.0.get((y, x)).copied()
    }

    // silently clipped
    fn plot(&mut self, x: f64, y: f64, colour: [u8; 3]) {
	if x < 0.0 || y < 0.0 {
	    return;
	}
	if let Some(pixel) = self.0.get_mut((y as usize, x as usize)) {
	    *pixel = colour;
	}
    }

    pub fn dashed_row(&mut self, y: f64, colour: [u8; 3]) {
	for x in 0..self.width() {
	    if (x / DASH) % 2 == 0 {
		self.plot(x as f64, y, colour);
	    }
	}
    }

    // simple DDA, one sample per pixel along the longer axis
    pub fn line(&mut self, from: Vec2, to: Vec2, colour: [u8; 3]) {
	let delta = to - from;
	let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
	for step in 0..=steps {
	    let point = from + delta * (step as f64 / steps as f64);
	    self.plot(point.x, point.y, colour);
	}
    }

    pub fn marker(&mut self, center: Vec2, radius: i64, colour: [u8; 3]) {
	for dy in -radius..=radius {
	    for dx in -radius..=radius {
		if dx*dx + dy*dy <= radius*radius {
		    self.plot(center.x + dx as f64, center.y + dy as f64, colour);
		}
	    }
	}
    }

    // binary portable pixmap
    pub fn write_ppm(&self, out: &mut dyn Write) -> io::Result<()> {
	let mut result = vec![b'P', b'6', b'\n'];
	result.extend_from_slice(self.width().to_string().as_bytes());
	result.push(b' ');
	result.extend_from_slice(self.height().to_string().as_bytes());
	result.extend_from_slice(b"\n255\n");

	for pixel in self.0.iter() {
	    result.extend_from_slice(pixel);
	}
	out.write_all(&result)
    }
}

// raster version of the svg picture without the text
#[derive(Clone, Debug)]
pub struct PpmRenderer {
    width: usize,
    height: usize,
}

impl PpmRenderer {
    pub fn new(width: usize, height: usize) -> Self {
	PpmRenderer {
	    width,
	    height,
	}
    }

    pub fn draw(&self, result: &TraceResult) -> Canvas {
	let mut canvas = Canvas::new(self.width, self.height);
	let bounds = Bounds::from_points(&result.vertices).padded(MARGIN);
	let scale = Vec2::new((self.width.max(1) - 1) as f64, (self.height.max(1) - 1) as f64);

	let points: Vec<Vec2> = result.vertices.iter()
	    .filter(|vertex| vertex.is_finite())
	    .map(|vertex| {
		let unit = bounds.normalize(*vertex);
		Vec2::new(unit.x * scale.x, unit.y * scale.y)
	    })
	    .collect();

	for point in &points {
	    canvas.dashed_row(point.y.round(), RED);
	}
	for pair in points.windows(2) {
	    canvas.line(pair[0], pair[1], BLUE);
	}
	for point in &points {
	    canvas.marker(*point, 2, BLUE);
	}
	canvas
    }
}

impl Render for PpmRenderer {
    fn render(&self, result: &TraceResult, out: &mut dyn Write) -> io::Result<()> {
	self.draw(result).write_ppm(out)
    }
}
