/// Vertical scroll position of the mounted page.
///
/// Keys move `target`; `offset` eases toward it on every tick so long jumps
/// animate instead of snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub offset: u16,
    pub target: u16,
    pub step: u16,
    max: u16,
    viewport: u16,
}

impl ScrollState {
    #[must_use]
    pub fn new(step: u16) -> Self {
        Self {
            offset: 0,
            target: 0,
            step: step.max(1),
            max: 0,
            viewport: 0,
        }
    }

    /// Called on every draw with the page's content height and the visible height.
    pub fn set_bounds(&mut self, content_height: u16, viewport: u16) {
        self.viewport = viewport;
        self.max = content_height.saturating_sub(viewport);
        self.target = self.target.min(self.max);
        self.offset = self.offset.min(self.max);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.target = self.target.saturating_add(rows).min(self.max);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.target = self.target.saturating_sub(rows);
    }

    /// Moves the target just enough for rows `top..top + height` to be visible.
    pub fn reveal(&mut self, top: u16, height: u16) {
        if top < self.target {
            self.target = top;
        } else if self.viewport > 0 {
            let bottom = top.saturating_add(height);
            if bottom > self.target.saturating_add(self.viewport) {
                self.target = (bottom - self.viewport).min(self.max);
            }
        }
    }

    /// One easing step: cover half the remaining distance, at least one row.
    pub fn animate(&mut self) {
        let distance = self.offset.abs_diff(self.target);
        if distance == 0 {
            return;
        }
        let delta = distance.div_ceil(2);
        if self.offset < self.target {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.target = 0;
    }
}
