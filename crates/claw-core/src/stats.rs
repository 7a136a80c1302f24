/// Attempt/success bookkeeping for sessions with a win rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStats {
    pub attempts: u32,
    pub successes: u32,
    pub threshold: u32,
}

impl SessionStats {
    pub fn new(threshold: u32) -> Self {
        Self {
            attempts: 0,
            successes: 0,
            threshold,
        }
    }

    /// Record one reported grab. Returns true if this grab completed the
    /// session.
    pub fn record(&mut self, success: bool) -> bool {
        let was_complete = self.is_complete();
        self.attempts = self.attempts.saturating_add(1);
        if success {
            self.successes = self.successes.saturating_add(1);
        }
        !was_complete && self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.successes >= self.threshold
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }
}
