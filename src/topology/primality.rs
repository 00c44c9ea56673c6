//! Modular arithmetic and the Miller–Rabin probable-prime test.
//!
//! Products are taken in `u128`, so every `usize` modulus is safe from overflow.

use rand::Rng;

/// Witness rounds used by the LPS construction.
pub const MILLER_RABIN_ROUNDS: u32 = 20;

/// `a * b mod m`.
#[inline]
pub fn mod_mul(a: usize, b: usize, m: usize) -> usize {
    ((a as u128 * b as u128) % m as u128) as usize
}

/// `base ^ exponent mod modulus` by square-and-multiply.
///
/// # Panics
/// Panics if `modulus == 0`.
pub fn mod_pow(base: usize, exponent: usize, modulus: usize) -> usize {
    assert!(modulus != 0, "modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % modulus;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mod_mul(result, base, modulus);
        }
        base = mod_mul(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Miller–Rabin with `rounds` witnesses drawn from `rng`.
///
/// A `false` answer is always correct; a `true` answer is wrong with
/// probability at most `4^-rounds`. Values below 4 and even values are
/// decided without drawing witnesses.
pub fn is_probable_prime<R: Rng + ?Sized>(n: usize, rounds: u32, rng: &mut R) -> bool {
    match n {
        0 | 1 => return false,
        2 | 3 => return true,
        _ if n % 2 == 0 => return false,
        _ => {}
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d >>= 1;
        s += 1;
    }

    (0..rounds).all(|_| {
        let a = rng.gen_range(2..n - 1);
        strong_probable_prime(a, d, s, n)
    })
}

/// Whether `n` (with `n - 1 = d * 2^s`, `d` odd) passes the strong test to base `a`.
fn strong_probable_prime(a: usize, d: usize, s: u32, n: usize) -> bool {
    let mut x = mod_pow(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mod_mul(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn trial_division(n: usize) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn mod_pow_matches_naive() {
        for m in 1..40 {
            for b in 0..12 {
                for e in 0..9 {
                    let naive = (0..e).fold(1 % m, |acc, _| acc * b % m);
                    assert_eq!(mod_pow(b, e, m), naive, "{b}^{e} mod {m}");
                }
            }
        }
    }

    #[test]
    fn mod_pow_gives_inverse_modulo_prime() {
        let p = 101;
        for i in 1..p {
            assert_eq!(mod_mul(i, mod_pow(i, p - 2, p), p), 1);
        }
    }

    #[test]
    fn mod_mul_does_not_overflow() {
        let m = usize::MAX - 58;
        assert_eq!(mod_mul(m - 1, m - 1, m), 1);
    }

    #[test]
    fn miller_rabin_agrees_with_trial_division() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..2_000 {
            assert_eq!(
                is_probable_prime(n, MILLER_RABIN_ROUNDS, &mut rng),
                trial_division(n),
                "n = {n}"
            );
        }
    }

    #[test]
    fn miller_rabin_rejects_carmichael_numbers() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [561, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825_265] {
            assert!(!is_probable_prime(n, MILLER_RABIN_ROUNDS, &mut rng), "n = {n}");
        }
    }

    #[test]
    fn miller_rabin_accepts_large_primes() {
        let mut rng = StdRng::seed_from_u64(3);
        for p in [1_000_000_007usize, 998_244_353, 2_147_483_647] {
            assert!(is_probable_prime(p, MILLER_RABIN_ROUNDS, &mut rng));
        }
    }

    #[test]
    fn same_seed_same_answer() {
        let a = is_probable_prime(1_373_653, 2, &mut StdRng::seed_from_u64(5));
        let b = is_probable_prime(1_373_653, 2, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
