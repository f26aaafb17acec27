#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Clips a rectangle given in signed coordinates to `bounds`.
    ///
    /// Grid geometry goes negative when a cell is partially scrolled out of
    /// the viewport; everything that reaches a backend is unsigned.
    pub fn clip_signed(x: i32, y: i32, w: i32, h: i32, bounds: Rect) -> Option<Rect> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x1 = x.max(bounds.x as i32);
        let y1 = y.max(bounds.y as i32);
        let x2 = (x + w).min(bounds.right() as i32);
        let y2 = (y + h).min(bounds.bottom() as i32);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Rect::new(
            x1 as u16,
            y1 as u16,
            (x2 - x1) as u16,
            (y2 - y1) as u16,
        ))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
