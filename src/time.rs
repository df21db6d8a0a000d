//! Duration abstraction for the elapsed-time facts.

/// Trait abstraction for duration types.
///
/// Every "time since" fact handed to the handler is expressed in the host's
/// duration type. Only millisecond resolution is ever inspected.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_millis(&self) -> u64 {
        // Saturate instead of truncating the u128.
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        core::time::Duration::saturating_sub(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn core_duration_reports_whole_millis() {
        let d = <Duration as TimeDuration>::from_millis(1500);
        assert_eq!(TimeDuration::as_millis(&d), 1500);
        assert_eq!(TimeDuration::as_millis(&Duration::from_micros(2999)), 2);
    }

    #[test]
    fn core_duration_saturates() {
        let short = Duration::from_millis(10);
        let long = Duration::from_millis(20);
        assert_eq!(TimeDuration::saturating_sub(short, long), Duration::ZERO);
        assert_eq!(TimeDuration::as_millis(&Duration::MAX), u64::MAX);
    }
}
