//! Function composition helpers.

use crate::error::KitError;

/// Compose `fns` left to right. An empty list is the identity.
///
/// ```
/// use koolkit::func::pipe;
/// let f = pipe::<i32>(vec![Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 10)]);
/// assert_eq!(f(2), 30);
/// ```
pub fn pipe<T>(fns: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x: T| fns.iter().fold(x, |acc, f| f(acc))
}

/// Apply `when_true` only to values matching `pred`; pass others through.
pub fn when<T, P, W>(pred: P, when_true: W) -> impl Fn(T) -> T
where
    P: Fn(&T) -> bool,
    W: Fn(T) -> T,
{
    move |x: T| if pred(&x) { when_true(x) } else { x }
}

/// Call `f` with the arguments reordered by `indexes`: position `n` of the
/// new argument list is `args[indexes[n]]`.
pub fn rearg<T, R, F>(f: F, indexes: Vec<usize>) -> impl Fn(&[T]) -> Result<R, KitError>
where
    T: Clone,
    F: Fn(Vec<T>) -> R,
{
    move |args: &[T]| -> Result<R, KitError> {
        let picked = indexes
            .iter()
            .map(|&index| {
                args.get(index)
                    .cloned()
                    .ok_or(KitError::IndexOutOfRange { index, len: args.len() })
            })
            .collect::<Result<Vec<T>, KitError>>()?;
        Ok(f(picked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_runs_left_to_right() {
        let f = pipe::<String>(vec![
            Box::new(|s: String| s + "a"),
            Box::new(|s: String| s.to_uppercase()),
            Box::new(|s: String| s + "b"),
        ]);
        assert_eq!(f("x".into()), "XAb");
    }

    #[test]
    fn empty_pipe_is_identity() {
        let f = pipe::<u8>(Vec::new());
        assert_eq!(f(7), 7);
    }

    #[test]
    fn when_doubles_even_numbers() {
        let double_even = when(|x: &i32| x % 2 == 0, |x| x * 2);
        assert_eq!(double_even(2), 4);
        assert_eq!(double_even(1), 1);
    }

    #[test]
    fn rearg_reorders() {
        let rearged = rearg(|args: Vec<&str>| args.join(""), vec![2, 0, 1]);
        assert_eq!(rearged(&["b", "c", "a"]).unwrap(), "abc");
    }

    #[test]
    fn rearg_missing_argument_errors() {
        let rearged = rearg(|args: Vec<u8>| args.len(), vec![0, 3]);
        assert!(matches!(
            rearged(&[1, 2]),
            Err(KitError::IndexOutOfRange { index: 3, len: 2 })
        ));
    }
}
