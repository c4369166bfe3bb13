//! Lazily initialised value.

enum Slot<T, F> {
    Pending(F),
    Ready(T),
    Empty,
}

/// A value produced by its initializer on first access.
///
/// The value may be replaced with [`Lazy::set`] or cleared with
/// [`Lazy::take`]; neither re-runs the initializer.
pub struct Lazy<T, F> {
    slot: Slot<T, F>,
}

pub fn lazy_get<T, F>(init: F) -> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    Lazy { slot: Slot::Pending(init) }
}

impl<T, F> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    /// Initialise on first use. `None` after [`Lazy::take`].
    pub fn get(&mut self) -> Option<&T> {
        self.force();
        match &self.slot {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.force();
        match &mut self.slot {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Replace the value. A pending initializer is dropped without running.
    pub fn set(&mut self, value: T) {
        self.slot = Slot::Ready(value);
    }

    /// Remove the value, initialising it first if needed.
    pub fn take(&mut self) -> Option<T> {
        self.force();
        match std::mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self.slot, Slot::Pending(_))
    }

    fn force(&mut self) {
        if matches!(self.slot, Slot::Pending(_)) {
            if let Slot::Pending(init) = std::mem::replace(&mut self.slot, Slot::Empty) {
                self.slot = Slot::Ready(init());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn initializer_runs_on_first_get_only() {
        let runs = Cell::new(0);
        let mut prop = lazy_get(|| {
            runs.set(runs.get() + 1);
            String::from("Hello!")
        });
        assert!(!prop.is_initialized());
        assert_eq!(runs.get(), 0);
        assert_eq!(prop.get().map(String::as_str), Some("Hello!"));
        assert_eq!(prop.get().map(String::as_str), Some("Hello!"));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn set_skips_initializer() {
        let runs = Cell::new(0);
        let mut prop = lazy_get(|| {
            runs.set(runs.get() + 1);
            1
        });
        prop.set(5);
        assert_eq!(prop.get(), Some(&5));
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn take_clears_value() {
        let mut prop = lazy_get(|| vec![1, 2]);
        prop.get_mut().unwrap().push(3);
        assert_eq!(prop.take(), Some(vec![1, 2, 3]));
        assert_eq!(prop.get(), None);
        prop.set(vec![]);
        assert_eq!(prop.get(), Some(&vec![]));
    }
}
