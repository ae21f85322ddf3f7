/// Quiet period before a changing input is propagated.
pub const DEBOUNCE_MS: u32 = 500;

/// Token identifying one scheduled propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Latest-value-wins debouncer state. The timer itself lives with the caller; this
/// decides which timer is still allowed to publish.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<(DebounceToken, T)>,
    next_token: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            next_token: 0,
        }
    }

    /// Record a new input, superseding any pending one. The returned token must be
    /// passed to [`Debouncer::fire`] once the delay elapses.
    pub fn push(&mut self, value: T) -> DebounceToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = DebounceToken(self.next_token);
        self.pending = Some((token, value));
        token
    }

    /// Timer for `token` elapsed. Returns the new settled value when the token is still
    /// current and the value actually changed.
    pub fn fire(&mut self, token: DebounceToken) -> Option<T> {
        match self.pending.take() {
            Some((pending, value)) if pending == token => {
                if value == self.settled {
                    return None;
                }
                self.settled = value.clone();
                Some(value)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending input without publishing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<T: Clone + PartialEq> Debouncer<T> {
        fn settled(&self) -> &T {
            &self.settled
        }

        fn is_pending(&self) -> bool {
            self.pending.is_some()
        }
    }

    #[test]
    fn only_last_input_survives_a_burst() {
        let mut debouncer = Debouncer::new(String::new());
        let t1 = debouncer.push("N".into());
        let t2 = debouncer.push("Na".into());
        let t3 = debouncer.push("Nar".into());

        assert_eq!(debouncer.fire(t1), None);
        assert_eq!(debouncer.fire(t2), None);
        assert_eq!(debouncer.settled(), "");
        assert_eq!(debouncer.fire(t3).as_deref(), Some("Nar"));
        assert_eq!(debouncer.settled(), "Nar");
    }

    #[test]
    fn stale_timer_does_not_consume_pending_value() {
        let mut debouncer = Debouncer::new(0);
        let old = debouncer.push(1);
        let current = debouncer.push(2);
        assert_eq!(debouncer.fire(old), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(current), Some(2));
    }

    #[test]
    fn unchanged_value_is_not_republished() {
        let mut debouncer = Debouncer::new("Uchiha");
        let token = debouncer.push("Uchiha");
        assert_eq!(debouncer.fire(token), None);
    }

    #[test]
    fn cancel_discards_pending_input() {
        let mut debouncer = Debouncer::new(0);
        let token = debouncer.push(5);
        debouncer.cancel();
        assert_eq!(debouncer.fire(token), None);
        assert_eq!(*debouncer.settled(), 0);
    }
}
