//! Modular arithmetic over small rings (the alphabet uses Z/26).

/// Mathematical modulo: result is always in `[0, m)`, even for negative `n`
pub fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Extended Euclid. Returns `(g, x, y)` with `a*x + b*y == g`
pub fn egcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (g, x1, y1) = egcd(b, a % b);
    (g, y1, x1 - (a / b) * y1)
}

/// Multiplicative inverse of `a` modulo `m`, if `gcd(a, m)` is 1
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = egcd(modulo(a, m), m);
    if g != 1 && g != -1 {
        return None;
    }
    Some(modulo(x * g, m))
}
