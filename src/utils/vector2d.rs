use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn from_polar(magnitude: f64, heading_degrees: f64) -> Self {
        let heading = heading_degrees.to_radians();
        Vector2D::new(magnitude * heading.cos(), magnitude * heading.sin())
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_polar_crosswind() {
        let wind = Vector2D::from_polar(10.0, 90.0);
        assert_abs_diff_eq!(wind.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wind.y, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wind.magnitude(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_of_headwind_sum() {
        let relative = Vector2D::new(30.0, 0.0) + Vector2D::from_polar(5.0, 180.0);
        assert_abs_diff_eq!(relative.x, 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(relative.angle(), 0.0, epsilon = 1e-12);
    }
}
