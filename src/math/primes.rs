//! Prime generation with the Sieve of Eratosthenes.

/// All primes `<= limit`, ascending.
pub fn generate_prime_numbers(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let n = limit as usize;
    let mut composite = vec![false; n + 1];
    let mut p = 2usize;
    while p * p <= n {
        if !composite[p] {
            for multiple in (p * p..=n).step_by(p) {
                composite[multiple] = true;
            }
        }
        p += 1;
    }
    (2..=n)
        .filter(|&i| !composite[i])
        .map(|i| i as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_up_to_100() {
        let primes = generate_prime_numbers(100);
        assert_eq!(
            primes,
            [
                2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
                79, 83, 89, 97
            ]
        );
    }

    #[test]
    fn small_limits() {
        assert!(generate_prime_numbers(0).is_empty());
        assert!(generate_prime_numbers(1).is_empty());
        assert_eq!(generate_prime_numbers(2), [2]);
        assert_eq!(generate_prime_numbers(9), [2, 3, 5, 7]);
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(generate_prime_numbers(13).last(), Some(&13));
    }
}
