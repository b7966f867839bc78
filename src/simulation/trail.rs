//! Bounded position history per body, used for trails and glow

use std::collections::VecDeque;

use super::states::{Body, NVec2};

#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub position: NVec2,
    pub velocity: NVec2,
}

impl TrailPoint {
    /// Segment of length `width` centred on the point, perpendicular to
    /// the velocity. `None` while the body is (nearly) at rest
    pub fn glow_segment(&self, width: f64) -> Option<(NVec2, NVec2)> {
        let v = self.velocity;
        if v.x.abs() < 1e-6 && v.y.abs() < 1e-6 {
            return None;
        }

        let dir = v / v.norm();
        let perp = NVec2::new(-dir.y, dir.x);
        let half = 0.5 * width * perp;

        Some((self.position + half, self.position - half))
    }
}

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    max_length: usize,
}

impl Trail {
    pub fn new(max_length: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_length),
            max_length,
        }
    }

    /// Append the body's current state, dropping the oldest point past `max_length`
    pub fn record(&mut self, body: &Body) {
        if self.max_length == 0 {
            return;
        }
        self.points.push_back(TrailPoint {
            position: body.position.to_vector(),
            velocity: body.velocity.to_vector(),
        });
        while self.points.len() > self.max_length {
            self.points.pop_front();
        }
    }

    /// Oldest point first
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
