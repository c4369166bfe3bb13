//! Event handler that detaches itself once a condition is met.

use tracing::trace;

/// Forwards events to a callback until `checker` accepts one.
///
/// The accepting event is still delivered; every later event is ignored.
pub struct Until<C, K> {
    callback: C,
    checker: K,
    attached: bool,
}

pub fn until<C, K>(callback: C, checker: K) -> Until<C, K> {
    Until { callback, checker, attached: true }
}

impl<C, K> Until<C, K> {
    /// Deliver `event`. Returns whether the handler is still attached.
    pub fn handle<E>(&mut self, event: &E) -> bool
    where
        C: FnMut(&E),
        K: FnMut(&E) -> bool,
    {
        if !self.attached {
            return false;
        }
        if (self.checker)(event) {
            self.attached = false;
            trace!("until: condition met, detaching");
        }
        (self.callback)(event);
        self.attached
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_attached_while_checker_rejects() {
        let mut clicks = 0;
        let mut handler = until(|_: &()| clicks += 1, |_: &()| false);
        for _ in 0..3 {
            assert!(handler.handle(&()));
        }
        assert!(handler.is_attached());
        drop(handler);
        assert_eq!(clicks, 3);
    }

    #[test]
    fn detaches_after_accepting_event() {
        let mut seen = Vec::new();
        let mut handler = until(|n: &u32| seen.push(*n), |n: &u32| *n >= 5);
        for n in 3..=8 {
            handler.handle(&n);
        }
        assert!(!handler.is_attached());
        drop(handler);
        assert_eq!(seen, [3, 4, 5]);
    }
}
