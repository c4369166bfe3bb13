//! Call-at-most-once wrapper.

enum Slot<F, R> {
    Pending(F),
    Fired(R),
    Empty,
}

/// Wraps a closure so it runs on the first [`Once::call`] only.
pub struct Once<F, R> {
    slot: Slot<F, R>,
}

/// ```
/// let mut greet = koolkit::func::once(|name: &str| format!("hi {name}"));
/// assert_eq!(greet.call("ada").map(String::as_str), Some("hi ada"));
/// assert_eq!(greet.call("bob").map(String::as_str), Some("hi ada"));
/// ```
pub fn once<F, R>(f: F) -> Once<F, R> {
    Once { slot: Slot::Pending(f) }
}

impl<F, R> Once<F, R> {
    /// Run the closure if it has not run yet; always returns the first result.
    ///
    /// `None` only if the first call unwound before producing a value.
    pub fn call<A>(&mut self, arg: A) -> Option<&R>
    where
        F: FnOnce(A) -> R,
    {
        if matches!(self.slot, Slot::Pending(_)) {
            if let Slot::Pending(f) = std::mem::replace(&mut self.slot, Slot::Empty) {
                self.slot = Slot::Fired(f(arg));
            }
        }
        match &self.slot {
            Slot::Fired(result) => Some(result),
            _ => None,
        }
    }

    pub fn has_fired(&self) -> bool {
        !matches!(self.slot, Slot::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_exactly_once() {
        let calls = Cell::new(0);
        let mut fire = once(|()| calls.set(calls.get() + 1));
        assert!(!fire.has_fired());
        fire.call(());
        assert_eq!(calls.get(), 1);
        fire.call(());
        assert_eq!(calls.get(), 1);
        assert!(fire.has_fired());
    }

    #[test]
    fn later_calls_return_first_result() {
        let mut double = once(|x: i32| x * 2);
        assert_eq!(double.call(4), Some(&8));
        assert_eq!(double.call(100), Some(&8));
    }
}
