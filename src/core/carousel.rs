/// Cycles through `count` slides, one step every `period_sec`.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    count: usize,
    period_sec: f32,
    elapsed: f32,
}

impl Carousel {
    pub fn new(count: usize, period_sec: f32) -> Self {
        Self {
            index: 0,
            count,
            period_sec: period_sec.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the new index when the slide changed.
    pub fn tick(&mut self, dt_sec: f32) -> Option<usize> {
        if self.count < 2 {
            return None;
        }
        self.elapsed += dt_sec.max(0.0);
        if self.elapsed < self.period_sec {
            return None;
        }
        let steps = (self.elapsed / self.period_sec) as usize;
        self.elapsed -= steps as f32 * self.period_sec;
        self.index = (self.index + steps) % self.count;
        Some(self.index)
    }
}
