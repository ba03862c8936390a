//! Carousel index arithmetic for the testimonial block.

/// Position within a fixed-length testimonial list. Advancing past the last
/// entry wraps to the first; retreating past the first wraps to the last.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: self.index.checked_sub(1).unwrap_or(self.len - 1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps_at_the_end() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.index(), 0);
        rotation = rotation.next();
        assert_eq!(rotation.index(), 1);
        rotation = rotation.next();
        assert_eq!(rotation.index(), 2);
        rotation = rotation.next();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn retreats_and_wraps_at_the_start() {
        let mut rotation = Rotation::new(3);
        rotation = rotation.prev();
        assert_eq!(rotation.index(), 2);
        rotation = rotation.prev();
        assert_eq!(rotation.index(), 1);
        rotation = rotation.prev();
        assert_eq!(rotation.index(), 0);
        rotation = rotation.prev();
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn empty_list_stays_put() {
        let rotation = Rotation::new(0);
        assert_eq!(rotation.next().index(), 0);
        assert_eq!(rotation.prev().index(), 0);
    }

    #[test]
    fn single_entry_always_wraps_to_itself() {
        let rotation = Rotation::new(1);
        assert_eq!(rotation.next().index(), 0);
        assert_eq!(rotation.prev().index(), 0);
    }
}
