//! Progressive reveal of the latest narrative.

use std::time::Duration;

/// Reveals a fixed number of characters one at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    total: usize,
    shown: usize,
    char_delay: Duration,
    carry: Duration,
}

impl Typewriter {
    /// Start revealing `total` characters, one every `char_delay`.
    pub fn new(total: usize, char_delay: Duration) -> Self {
        let mut t = Self {
            total,
            shown: 0,
            char_delay,
            carry: Duration::ZERO,
        };
        if char_delay.is_zero() {
            t.finish();
        }
        t
    }

    /// Characters revealed so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether every character is visible.
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Let `elapsed` time pass. Returns `true` once everything is shown.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_done() {
            return true;
        }
        self.carry += elapsed;
        let steps = self.carry.as_nanos() / self.char_delay.as_nanos();
        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        self.shown = self.shown.saturating_add(steps).min(self.total);
        if self.is_done() {
            self.carry = Duration::ZERO;
        } else {
            // steps < total here, so it fits in a u32.
            self.carry -= self.char_delay * steps as u32;
        }
        self.is_done()
    }

    /// Reveal everything immediately.
    pub fn finish(&mut self) {
        self.shown = self.total;
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn reveals_one_char_per_delay() {
        let mut t = Typewriter::new(10, 15 * MS);
        assert_eq!(t.shown(), 0);
        assert!(!t.advance(14 * MS));
        assert_eq!(t.shown(), 0);
        assert!(!t.advance(MS));
        assert_eq!(t.shown(), 1);
        assert!(!t.advance(30 * MS));
        assert_eq!(t.shown(), 3);
    }

    #[test]
    fn completes_and_stays_done() {
        let mut t = Typewriter::new(3, 15 * MS);
        assert!(t.advance(Duration::from_secs(5)));
        assert_eq!(t.shown(), 3);
        assert!(t.advance(MS));
        assert_eq!(t.shown(), 3);
    }

    #[test]
    fn finish_reveals_everything() {
        let mut t = Typewriter::new(100, 15 * MS);
        t.advance(20 * MS);
        t.finish();
        assert!(t.is_done());
        assert_eq!(t.shown(), 100);
    }

    #[test]
    fn zero_delay_is_instant() {
        let t = Typewriter::new(50, Duration::ZERO);
        assert!(t.is_done());
    }

    #[test]
    fn empty_text_is_done() {
        let mut t = Typewriter::new(0, 15 * MS);
        assert!(t.is_done());
        assert!(t.advance(Duration::ZERO));
    }
}
