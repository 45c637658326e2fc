use crate::{render::render, surface::Surface};

/// Owns the count shown by one counter widget.
#[derive(Debug)]
pub struct Counter<S> {
    count: i64,
    surface: Option<S>,
}

impl<S: Surface> Counter<S> {
    /// Starts at 0 without rendering anything.
    pub fn new(surface: Option<S>) -> Self {
        Self { count: 0, surface }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Stores `count` and redraws the bound surface.
    pub fn set_counter(&mut self, count: i64) {
        self.count = count;
        render(self.surface.as_ref(), &format!("count is {}", self.count));
    }
}
