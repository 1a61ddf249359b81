use std::collections::VecDeque;

use crate::point::Point;

pub const DEFAULT_CAPACITY: usize = 500;

/// Bounded trail of past bob positions, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRecorder {
    points: VecDeque<Point>,
    capacity: usize,
}

impl Default for TrajectoryRecorder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl TrajectoryRecorder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn record(&mut self, point: Point) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Adjacent pairs, oldest first.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Point {
        Point::new(i as f64, -(i as f64))
    }

    #[test]
    fn default_capacity() {
        assert_eq!(TrajectoryRecorder::default().capacity(), 500);
    }

    #[test]
    fn evicts_first_point_after_overflow() {
        let mut trail = TrajectoryRecorder::default();
        for i in 0..501 {
            trail.record(p(i));
        }

        assert_eq!(trail.len(), 500);
        assert!(!trail.iter().any(|point| *point == p(0)));
        assert_eq!(trail.iter().next(), Some(&p(1)));
        assert_eq!(trail.iter().last(), Some(&p(500)));
    }

    #[test]
    fn keeps_newest_in_order() {
        let capacity = 10;
        let k = 7;
        let mut trail = TrajectoryRecorder::with_capacity(capacity);
        for i in 0..capacity + k {
            trail.record(p(i));
            assert!(trail.len() <= capacity);
        }

        let kept: Vec<Point> = trail.iter().copied().collect();
        let expected: Vec<Point> = (k..capacity + k).map(p).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn segments_join_neighbours() {
        let mut trail = TrajectoryRecorder::with_capacity(4);
        assert_eq!(trail.segments().count(), 0);

        trail.record(p(0));
        assert_eq!(trail.segments().count(), 0);

        trail.record(p(1));
        trail.record(p(2));
        let segments: Vec<_> = trail.segments().collect();
        assert_eq!(segments, vec![(p(0), p(1)), (p(1), p(2))]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut trail = TrajectoryRecorder::with_capacity(3);
        trail.record(p(1));
        trail.record(p(1));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut trail = TrajectoryRecorder::with_capacity(0);
        trail.record(p(1));
        assert!(trail.is_empty());
    }
}
