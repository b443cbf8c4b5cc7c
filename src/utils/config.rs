//! Bounds for client settings.

//------------ DefMinMax -----------------------------------------------------

/// The default of a setting together with the range it is clamped to.
#[derive(Clone, Copy, Debug)]
pub struct DefMinMax<T> {
    def: T,
    min: T,
    max: T,
}

impl<T: Copy + Ord> DefMinMax<T> {
    pub const fn new(def: T, min: T, max: T) -> Self {
        DefMinMax { def, min, max }
    }

    pub fn default(self) -> T {
        self.def
    }

    /// Clamps `value` into the allowed range.
    pub fn limit(self, value: T) -> T {
        value.clamp(self.min, self.max)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn limit() {
        const RETRIES: DefMinMax<u8> = DefMinMax::new(3, 0, 10);
        assert_eq!(RETRIES.default(), 3);
        assert_eq!(RETRIES.limit(0), 0);
        assert_eq!(RETRIES.limit(7), 7);
        assert_eq!(RETRIES.limit(200), 10);

        const TIMEOUT: DefMinMax<Duration> = DefMinMax::new(
            Duration::from_secs(5),
            Duration::from_millis(1),
            Duration::from_secs(60),
        );
        assert_eq!(TIMEOUT.limit(Duration::ZERO), Duration::from_millis(1));
        assert_eq!(
            TIMEOUT.limit(Duration::from_secs(3600)),
            Duration::from_secs(60)
        );
    }
}
