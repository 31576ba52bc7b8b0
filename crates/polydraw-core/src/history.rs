use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Point, Polyline};

/// Which color a stored polyline is painted with on repaint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Every polyline takes the currently active color.
    #[default]
    Uniform,
    /// Each polyline keeps the color active when it was appended.
    PerPolyline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    polyline: Polyline,
    color: Color,
}

/// Ordered polylines drawn since the last reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawingHistory {
    entries: Vec<Entry>,
}

impl DrawingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, polyline: Polyline, color: Color) {
        self.entries.push(Entry { polyline, color });
    }

    /// Add a point to the most recent polyline. Returns `false` when the
    /// history is empty.
    pub fn extend_last(&mut self, point: Point) -> bool {
        match self.entries.last_mut() {
            Some(entry) => {
                entry.polyline.push(point);
                true
            }
            None => false,
        }
    }

    pub fn last(&self) -> Option<&Polyline> {
        self.entries.last().map(|e| &e.polyline)
    }

    pub fn reset(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Clearing {} polylines", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All polylines in draw order with the color each should be painted in.
    pub fn all(
        &self,
        policy: ColorPolicy,
        current: Color,
    ) -> impl Iterator<Item = (&Polyline, Color)> + '_ {
        self.entries.iter().map(move |e| {
            let color = match policy {
                ColorPolicy::Uniform => current,
                ColorPolicy::PerPolyline => e.color,
            };
            (&e.polyline, color)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_append_and_reset() {
        let mut history = DrawingHistory::new();
        assert!(history.is_empty());
        history.append(line(&[(0.0, 0.0), (1.0, 1.0)]), Color::BLACK);
        history.append(line(&[(2.0, 2.0)]), Color::RED);
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().len(), 1);

        history.reset();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn test_extend_last() {
        let mut history = DrawingHistory::new();
        assert!(!history.extend_last(Point::new(0.0, 0.0)));

        history.append(line(&[(0.0, 0.0)]), Color::BLACK);
        assert!(history.extend_last(Point::new(5.0, 5.0)));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().len(), 2);
    }

    #[test]
    fn test_uniform_policy_uses_current_color() {
        let mut history = DrawingHistory::new();
        history.append(line(&[(0.0, 0.0)]), Color::BLACK);
        history.append(line(&[(1.0, 1.0)]), Color::RED);

        let colors: Vec<Color> = history
            .all(ColorPolicy::Uniform, Color::GREEN)
            .map(|(_, c)| c)
            .collect();
        assert_eq!(colors, vec![Color::GREEN, Color::GREEN]);
    }

    #[test]
    fn test_per_polyline_policy_keeps_append_color() {
        let mut history = DrawingHistory::new();
        history.append(line(&[(0.0, 0.0)]), Color::BLACK);
        history.append(line(&[(1.0, 1.0)]), Color::RED);

        let colors: Vec<Color> = history
            .all(ColorPolicy::PerPolyline, Color::GREEN)
            .map(|(_, c)| c)
            .collect();
        assert_eq!(colors, vec![Color::BLACK, Color::RED]);
    }
}
