//! Numeric helpers: prime generation, median, easing curves.

pub mod easing;
pub mod primes;
pub mod stats;

pub use easing::Easing;
pub use primes::generate_prime_numbers;
pub use stats::get_median_value;
