use super::geom::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self::xy(v, v)
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        Rect::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.w
                .saturating_sub(insets.left.saturating_add(insets.right)),
            self.h
                .saturating_sub(insets.top.saturating_add(insets.bottom)),
        )
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Cuts `h` rows off the top, returning `(top, rest)`.
    pub fn split_top(self, h: u16) -> (Rect, Rect) {
        let top_h = h.min(self.h);
        let top = Rect::new(self.x, self.y, self.w, top_h);
        let rest = Rect::new(
            self.x,
            self.y.saturating_add(top_h),
            self.w,
            self.h - top_h,
        );
        (top, rest)
    }

    /// Cuts `h` rows off the bottom, returning `(rest, bottom)`.
    pub fn split_bottom(self, h: u16) -> (Rect, Rect) {
        let bottom_h = h.min(self.h);
        let rest_h = self.h - bottom_h;
        let rest = Rect::new(self.x, self.y, self.w, rest_h);
        let bottom = Rect::new(self.x, self.y.saturating_add(rest_h), self.w, bottom_h);
        (rest, bottom)
    }

    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Rect::new(
            self.x.saturating_add((self.w - w) / 2),
            self.y.saturating_add((self.h - h) / 2),
            w,
            h,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
