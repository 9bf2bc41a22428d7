//! Small finite fields GF(p^m) for the line construction.
//!
//! Elements are encoded as integers in `0..q` whose base-`p` digits are the
//! polynomial coefficients (lowest degree first). For a prime `q` the
//! encoding is the residue itself, so `add` and `mul` are plain modular
//! arithmetic.

/// Arithmetic tables for a field of order `q = p^m`.
#[derive(Clone, Debug)]
pub struct GaloisField {
    order: usize,
    add: Vec<u32>,
    mul: Vec<u32>,
}

impl GaloisField {
    /// Build the field of order `q`, or `None` if `q` is not a prime power.
    #[must_use]
    pub fn new(q: usize) -> Option<Self> {
        let (p, m) = prime_power(q)?;
        if m == 1 {
            return Some(Self::prime(p));
        }
        // Search monic degree-m polynomials for one whose quotient ring has no zero divisors
        let lower_terms = q;
        (0..lower_terms).find_map(|low| {
            let mut modulus = digits(low, p, m);
            modulus.push(1);
            Self::extension(p, m, &modulus)
        })
    }

    fn prime(p: usize) -> Self {
        let mut add = vec![0; p * p];
        let mut mul = vec![0; p * p];
        for a in 0..p {
            for b in 0..p {
                add[a * p + b] = ((a + b) % p) as u32;
                mul[a * p + b] = ((a * b) % p) as u32;
            }
        }
        Self { order: p, add, mul }
    }

    fn extension(p: usize, m: usize, modulus: &[usize]) -> Option<Self> {
        let q = p.pow(m as u32);
        let mut add = vec![0; q * q];
        let mut mul = vec![0; q * q];
        for a in 0..q {
            let da = digits(a, p, m);
            for b in 0..q {
                let db = digits(b, p, m);
                let sum: Vec<usize> = da.iter().zip(&db).map(|(x, y)| (x + y) % p).collect();
                add[a * q + b] = undigits(&sum, p) as u32;

                let product = poly_mul_mod(&da, &db, modulus, p);
                let encoded = undigits(&product, p);
                if a != 0 && b != 0 && encoded == 0 {
                    return None;
                }
                mul[a * q + b] = encoded as u32;
            }
        }
        Some(Self { order: q, add, mul })
    }

    /// Number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn add(&self, a: usize, b: usize) -> usize {
        self.add[a * self.order + b] as usize
    }

    #[must_use]
    pub fn mul(&self, a: usize, b: usize) -> usize {
        self.mul[a * self.order + b] as usize
    }
}

/// Decompose `q` as `p^m` with `p` prime.
#[must_use]
pub fn prime_power(q: usize) -> Option<(usize, usize)> {
    if q < 2 {
        return None;
    }
    let p = (2..=q).find(|d| q % d == 0)?;
    let mut rest = q;
    let mut m = 0;
    while rest % p == 0 {
        rest /= p;
        m += 1;
    }
    (rest == 1).then_some((p, m))
}

fn digits(mut value: usize, p: usize, m: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(m);
    for _ in 0..m {
        out.push(value % p);
        value /= p;
    }
    out
}

fn undigits(coeffs: &[usize], p: usize) -> usize {
    coeffs.iter().rev().fold(0, |acc, &c| acc * p + c)
}

/// `a · b mod modulus` over GF(p); `modulus` is monic of degree `a.len()`.
fn poly_mul_mod(a: &[usize], b: &[usize], modulus: &[usize], p: usize) -> Vec<usize> {
    let m = a.len();
    let mut product = vec![0; 2 * m - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = (product[i + j] + x * y) % p;
        }
    }
    for deg in (m..product.len()).rev() {
        let lead = product[deg];
        if lead == 0 {
            continue;
        }
        // Subtract lead · x^(deg-m) · modulus
        for (k, &c) in modulus.iter().enumerate() {
            let idx = deg - m + k;
            product[idx] = (product[idx] + (p - (lead * c) % p)) % p;
        }
    }
    product.truncate(m);
    product
}
