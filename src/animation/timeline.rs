use crate::animation::tween::TweenSpec;

/// Ordered group of tweens positioned relative to one another.
///
/// Each [`Timeline::to`] places the tween at the current end of the timeline plus the tween's
/// own delay, so a negative delay overlaps it with what came before.
#[derive(Debug, Default)]
pub struct Timeline {
    children: Vec<(f64, TweenSpec)>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(mut self, spec: TweenSpec) -> Self {
        let start = self.end + spec.delay;
        self.end = self.end.max(start + spec.duration);
        self.children.push((start, spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child start offsets relative to the timeline origin, in insertion order.
    ///
    /// A child that lands before zero keeps its negative offset and starts already in
    /// progress.
    pub fn offsets(&self) -> Vec<f64> {
        self.children.iter().map(|(s, _)| *s).collect()
    }

    /// Time from the origin until the last child ends.
    pub fn duration(&self) -> f64 {
        self.end
    }

    pub(crate) fn into_children(self) -> Vec<(f64, TweenSpec)> {
        self.children
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
