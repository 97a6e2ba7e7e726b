use super::{Error, Expanse, Point, Result};

/// A rectangle with a top-left corner, width and height.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a new rectangle.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// The intersection of two rectangles, if they overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x0 = self.tl.x.max(other.tl.x);
        let y0 = self.tl.y.max(other.tl.y);
        let x1 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y1 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x0 < x1 && y0 < y1 {
            Some(Self::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    /// Does this rectangle completely enclose `other`?
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.tl.x + other.w <= self.tl.x + self.w
            && other.tl.y + other.h <= self.tl.y + self.h
    }

    /// Re-express `other` relative to the top-left corner of this rectangle.
    /// `other` must be fully contained.
    pub fn rebase_rect(&self, other: &Self) -> Result<Self> {
        if !self.contains_rect(other) {
            return Err(Error::Geometry(format!(
                "rect {other:?} not contained in {self:?}"
            )));
        }
        Ok(Self::new(
            other.tl.x - self.tl.x,
            other.tl.y - self.tl.y,
            other.w,
            other.h,
        ))
    }
}

impl From<Expanse> for Rect {
    fn from(e: Expanse) -> Self {
        e.rect()
    }
}

impl From<(u32, u32, u32, u32)> for Rect {
    fn from(v: (u32, u32, u32, u32)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 2, 2)), None);
        assert_eq!(a.intersect(&Rect::new(2, 3, 1, 1)), Some(Rect::new(2, 3, 1, 1)));
    }

    #[test]
    fn rebase_rect() -> Result<()> {
        let outer = Rect::new(10, 10, 20, 20);
        assert_eq!(
            outer.rebase_rect(&Rect::new(12, 15, 3, 3))?,
            Rect::new(2, 5, 3, 3)
        );
        assert!(outer.rebase_rect(&Rect::new(25, 25, 10, 10)).is_err());
        Ok(())
    }
}
