/// Daily message counter of the free plan. Purely local; the ceiling is a
/// constant from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuota {
    used: u32,
    limit: u32,
}

impl DailyQuota {
    /// Above this share of the limit the sidebar shows a warning.
    const WARN_PERCENT: u32 = 80;

    pub const fn new(used: u32, limit: u32) -> Self {
        Self { used, limit }
    }

    pub const fn used(&self) -> u32 {
        self.used
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    pub const fn is_approaching(&self) -> bool {
        self.used as u64 * 100 > self.limit as u64 * Self::WARN_PERCENT as u64
    }

    pub fn fraction(&self) -> f32 {
        if self.limit == 0 {
            return 1.0;
        }
        (self.used as f32 / self.limit as f32).min(1.0)
    }

    pub fn record(&mut self) {
        self.used = self.used.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_above_eighty_percent() {
        assert!(!DailyQuota::new(80, 100).is_approaching());
        assert!(DailyQuota::new(81, 100).is_approaching());
        assert!(DailyQuota::new(87, 100).is_approaching());
    }

    #[test]
    fn exhausts_at_the_limit() {
        let mut quota = DailyQuota::new(98, 100);
        quota.record();
        assert!(!quota.is_exhausted());
        quota.record();
        assert!(quota.is_exhausted());
        assert_eq!(quota.fraction(), 1.0);
    }

    #[test]
    fn zero_limit_is_always_exhausted() {
        let quota = DailyQuota::new(0, 0);
        assert!(quota.is_exhausted());
        assert_eq!(quota.fraction(), 1.0);
    }
}
