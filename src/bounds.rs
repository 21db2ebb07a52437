use std::ops::*;
use crate::vec2::*;

// axis aligned box around a set of points, used to fit a trace into a picture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

// the empty box, adding any point to it gives that point
impl Default for Bounds {
    fn default() -> Self {
	Bounds {
	    min: Vec2::new(f64::INFINITY, f64::INFINITY),
	    max: Vec2::new(-f64::INFINITY, -f64::INFINITY),
	}
    }
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
	Bounds {
	    min,
	    max,
	}
    }

    pub fn from_point(point: Vec2) -> Self {
	Self::new(point, point)
    }

    // non finite points (rays at 90 degrees) are skipped
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
	let mut result = Bounds::default();
	for point in points {
	    if point.is_finite() {
		result += Bounds::from_point(*point);
	    }
	}
	result
    }

    pub fn is_empty(self) -> bool {
	self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn extent(self) -> Vec2 {
	self.max - self.min
    }

    // grow by margin on every side, and never leave an axis with zero width
    pub fn padded(self, margin: f64) -> Self {
	if self.is_empty() {
	    return Bounds::new(Vec2::new(-margin, -margin), Vec2::new(margin, margin));
	}
	let extent = self.extent();
	let pad = Vec2::new(
	    (extent.x * margin).max(margin),
	    (extent.y * margin).max(margin),
	);
	Bounds::new(self.min - pad, self.max + pad)
    }

    // map a point to [0, 1] on both axes, y growing with depth
    pub fn normalize(self, point: Vec2) -> Vec2 {
	let extent = self.extent();
	Vec2::new(
	    (point.x - self.min.x) / extent.x,
	    (point.y - self.min.y) / extent.y,
	)
    }
}

impl Add for Bounds {
    type Output = Self;

    fn add(self, other: Self) -> Self {
	Bounds::new(self.min.min(other.min), self.max.max(other.max))
    }
}

impl AddAssign<Bounds> for Bounds {
    fn add_assign(&mut self, other: Self) {
	*self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_points() {
	let points = [Vec2::new(0.0, -2300.0), Vec2::new(80.0, -2200.0), Vec2::new(200.0, -1800.0)];
	let bounds = Bounds::from_points(&points);
	assert_eq!(bounds.min, Vec2::new(0.0, -2300.0));
	assert_eq!(bounds.max, Vec2::new(200.0, -1800.0));
	assert_eq!(bounds.normalize(Vec2::new(100.0, -2050.0)), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn vertical_ray_gets_width() {
	let points = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0)];
	let bounds = Bounds::from_points(&points).padded(0.1);
	assert!(bounds.extent().x > 0.0);
	assert_eq!(bounds.min.y, -10.0);
	assert_eq!(bounds.max.y, 110.0);
    }

    #[test]
    fn skips_non_finite() {
	let points = [Vec2::new(0.0, 0.0), Vec2::new(f64::INFINITY, 10.0)];
	let bounds = Bounds::from_points(&points);
	assert_eq!(bounds.max, Vec2::new(0.0, 0.0));
	assert!(Bounds::default().is_empty());
    }
}
