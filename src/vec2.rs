use std::ops::*;
use serde::Serialize;

// x is horizontal offset, y is depth; both in model units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
	Vec2 {x, y}
    }

    pub fn length_squared(self) -> f64 {
	self.dot(self)
    }

    pub fn length(self) -> f64 {
	self.length_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
	self.x*other.x + self.y*other.y
    }

    pub fn is_finite(self) -> bool {
	self.x.is_finite() && self.y.is_finite()
    }

    // componentwise, used by bounds
    pub fn min(self, other: Self) -> Self {
	Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
	Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
	Vec2::new(-self.x, -self.y)
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
	Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, other: Self) {
	*self = *self + other;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
	self + -other
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
	Vec2::new(self.x * other, self.y * other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slant_length_is_hypotenuse() {
	let offset = Vec2::new(30.0, 40.0);
	assert_eq!(offset.length(), 50.0);
    }

    #[test]
    fn accumulates_in_place() {
	let mut point = Vec2::new(0.0, -2300.0);
	point += Vec2::new(10.0, 100.0);
	point += Vec2::new(5.0, 400.0);
	assert_eq!(point, Vec2::new(15.0, -1800.0));
    }

    #[test]
    fn componentwise_extremes() {
	let a = Vec2::new(1.0, 5.0);
	let b = Vec2::new(3.0, -2.0);
	assert_eq!(a.min(b), Vec2::new(1.0, -2.0));
	assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
    }
}
