use crate::Point;
use approx::{assert_relative_eq, AbsDiffEq, RelativeEq};

pub fn assert_relative_eq_point(left: Point, right: Point) {
    assert_relative_eq!(AssertablePoint(left), AssertablePoint(right),)
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertablePoint(pub Point);

impl AbsDiffEq for AssertablePoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0.x(), &other.0.x(), epsilon)
            && f64::abs_diff_eq(&self.0.y(), &other.0.y(), epsilon)
    }
}

impl RelativeEq for AssertablePoint {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.0.x(), &other.0.x(), epsilon, max_relative)
            && f64::relative_eq(&self.0.y(), &other.0.y(), epsilon, max_relative)
    }
}
