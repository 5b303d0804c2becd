use std::time::{Duration, Instant};

/// Rotates through a list of tips, one per interval
pub struct TipDisplayer {
    tips: Vec<String>,
    interval: Duration,
    current: usize,
    shown_since: Option<Instant>,
}

impl TipDisplayer {
    pub fn new(tips: Vec<String>, interval: Duration) -> Self {
        Self {
            tips,
            interval,
            current: 0,
            shown_since: None,
        }
    }

    /// Tip to show at `now`, advancing once the interval has passed
    pub fn current_tip(&mut self, now: Instant) -> &str {
        if self.tips.is_empty() {
            return "";
        }

        match self.shown_since {
            None => self.shown_since = Some(now),
            Some(since) if now.saturating_duration_since(since) >= self.interval => {
                self.current = (self.current + 1) % self.tips.len();
                self.shown_since = Some(now);
            }
            Some(_) => {}
        }
        &self.tips[self.current]
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_and_wraps() {
        let mut tips = TipDisplayer::new(vec!["a".into(), "b".into()], Duration::from_secs(10));
        let start = Instant::now();

        assert_eq!(tips.current_tip(start), "a");
        assert_eq!(tips.current_tip(start + Duration::from_secs(9)), "a");
        assert_eq!(tips.current_tip(start + Duration::from_secs(10)), "b");
        assert_eq!(tips.current_tip(start + Duration::from_secs(15)), "b");
        assert_eq!(tips.current_tip(start + Duration::from_secs(20)), "a");
    }

    #[test]
    fn test_no_tips() {
        let mut tips = TipDisplayer::new(Vec::new(), Duration::from_secs(1));
        assert_eq!(tips.current_tip(Instant::now()), "");
        assert!(tips.is_empty());
    }
}
