use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 2D point in logical extent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtentError {
    #[error("extent bounds must be finite: {0:?}")]
    NonFinite(Extent),

    #[error("extent has xmin {xmin} >= xmax {xmax}")]
    EmptyWidth { xmin: f64, xmax: f64 },

    #[error("extent has ymin {ymin} >= ymax {ymax}")]
    EmptyHeight { ymin: f64, ymax: f64 },
}

/// Logical rectangle mapped onto the visible canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            xmax: 640.0,
            ymin: 0.0,
            ymax: 480.0,
        }
    }
}

impl Extent {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Check that the extent spans a non-empty, finite rectangle.
    pub fn validate(&self) -> Result<(), ExtentError> {
        let bounds = [self.xmin, self.xmax, self.ymin, self.ymax];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(ExtentError::NonFinite(*self));
        }
        if self.xmin >= self.xmax {
            return Err(ExtentError::EmptyWidth {
                xmin: self.xmin,
                xmax: self.xmax,
            });
        }
        if self.ymin >= self.ymax {
            return Err(ExtentError::EmptyHeight {
                ymin: self.ymin,
                ymax: self.ymax,
            });
        }
        Ok(())
    }

    /// Orthographic projection of a logical point into normalized device
    /// coordinates, `[-1, 1]` on both axes for points inside the extent.
    pub fn to_ndc(&self, p: &Point) -> Point {
        Point::new(
            2.0 * (p.x - self.xmin) / self.width() - 1.0,
            2.0 * (p.y - self.ymin) / self.height() - 1.0,
        )
    }

    /// Column-major `ortho(xmin, xmax, ymin, ymax, -1, 1)` matrix.
    #[rustfmt::skip]
    pub fn ortho_matrix(&self) -> [f32; 16] {
        let (near, far) = (-1.0_f64, 1.0_f64);
        let w = self.width();
        let h = self.height();
        let d = far - near;
        [
            (2.0 / w) as f32, 0.0, 0.0, 0.0,
            0.0, (2.0 / h) as f32, 0.0, 0.0,
            0.0, 0.0, (-2.0 / d) as f32, 0.0,
            (-(self.xmax + self.xmin) / w) as f32,
            (-(self.ymax + self.ymin) / h) as f32,
            (-(far + near) / d) as f32,
            1.0,
        ]
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("polyline has no points")]
pub struct EmptyPolylineError;

/// An ordered, non-empty run of points drawn as connected segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolylineRepr")]
pub struct Polyline {
    points: Vec<Point>,
}

/// Unchecked wire form of [`Polyline`].
#[derive(Deserialize)]
struct PolylineRepr {
    points: Vec<Point>,
}

impl TryFrom<PolylineRepr> for Polyline {
    type Error = EmptyPolylineError;

    fn try_from(repr: PolylineRepr) -> Result<Self, Self::Error> {
        Polyline::new(repr.points).ok_or(EmptyPolylineError)
    }
}

impl Polyline {
    /// Returns `None` for an empty point list.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn from_point(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extent() {
        let e = Extent::default();
        assert_eq!(e, Extent::new(0.0, 640.0, 0.0, 480.0));
        assert_eq!((e.width(), e.height()), (640.0, 480.0));
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_extent_validate_rejects_degenerate() {
        assert!(matches!(
            Extent::new(5.0, 5.0, 0.0, 1.0).validate(),
            Err(ExtentError::EmptyWidth { .. })
        ));
        assert!(matches!(
            Extent::new(0.0, 1.0, 2.0, 1.0).validate(),
            Err(ExtentError::EmptyHeight { .. })
        ));
        assert!(matches!(
            Extent::new(f64::NAN, 1.0, 0.0, 1.0).validate(),
            Err(ExtentError::NonFinite(_))
        ));
    }

    #[test]
    fn test_ndc_corners() {
        let e = Extent::new(-10.0, 10.0, 100.0, 200.0);
        assert_eq!(e.to_ndc(&Point::new(-10.0, 100.0)), Point::new(-1.0, -1.0));
        assert_eq!(e.to_ndc(&Point::new(10.0, 200.0)), Point::new(1.0, 1.0));
        assert_eq!(e.to_ndc(&Point::new(0.0, 150.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_ortho_matrix_matches_ndc() {
        let e = Extent::new(0.0, 640.0, 0.0, 480.0);
        let m = e.ortho_matrix();
        let p = Point::new(160.0, 360.0);
        let x = m[0] as f64 * p.x + m[12] as f64;
        let y = m[5] as f64 * p.y + m[13] as f64;
        let ndc = e.to_ndc(&p);
        assert!((x - ndc.x).abs() < 1e-6);
        assert!((y - ndc.y).abs() < 1e-6);
    }

    #[test]
    fn test_polyline_requires_points() {
        assert!(Polyline::new(Vec::new()).is_none());
        let mut line = Polyline::from_point(Point::new(1.0, 1.0));
        line.push(Point::new(4.0, 5.0));
        assert_eq!(line.len(), 2);
        assert_eq!(line.points()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_polyline_json_rejects_empty() {
        let err = serde_json::from_str::<Polyline>(r#"{"points":[]}"#).unwrap_err();
        assert!(err.to_string().contains("polyline has no points"));

        let line: Polyline = serde_json::from_str(r#"{"points":[{"x":1.0,"y":2.0}]}"#).unwrap();
        assert_eq!(line.points(), &[Point::new(1.0, 2.0)]);
        assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"points":[{"x":1.0,"y":2.0}]}"#);
    }
}
