//! Closure wrappers and combinators.

pub mod bench;
pub mod compose;
pub mod lazy;
pub mod once;
pub mod until;

pub use bench::most_performant;
pub use compose::{pipe, rearg, when};
pub use lazy::{lazy_get, Lazy};
pub use once::{once, Once};
pub use until::{until, Until};
