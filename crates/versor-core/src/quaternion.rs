//! Quaternions — immutable four-coefficient hypercomplex numbers.
//!
//! A quaternion is `a + b·i + c·j + d·k` with real coefficients. All
//! operations return new values; an existing quaternion is never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersorError;

/// An immutable quaternion over `f64`.
///
/// Equality is structural and exact: two quaternions are equal iff all
/// four coefficients are equal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// The additive identity, `0`.
    pub const ZERO: Quaternion = Quaternion { a: 0.0, b: 0.0, c: 0.0, d: 0.0 };
    /// The multiplicative identity, `1`.
    pub const ONE: Quaternion = Quaternion { a: 1.0, b: 0.0, c: 0.0, d: 0.0 };
    /// The imaginary unit `i`.
    pub const I: Quaternion = Quaternion { a: 0.0, b: 1.0, c: 0.0, d: 0.0 };
    /// The imaginary unit `j`.
    pub const J: Quaternion = Quaternion { a: 0.0, b: 0.0, c: 1.0, d: 0.0 };
    /// The imaginary unit `k`.
    pub const K: Quaternion = Quaternion { a: 0.0, b: 0.0, c: 0.0, d: 1.0 };

    /// Create a quaternion from its four coefficients.
    ///
    /// Construction is total; any finite or non-finite `f64` is accepted.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The ordered coefficients `[a, b, c, d]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Conjugate: `(a, -b, -c, -d)`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Squared norm: `a² + b² + c² + d²`.
    pub fn norm_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Whether every coefficient has zero magnitude.
    pub fn is_zero(&self) -> bool {
        !nonzero(self.a) && !nonzero(self.b) && !nonzero(self.c) && !nonzero(self.d)
    }
}

/// A coefficient counts as present iff its magnitude is strictly positive.
/// This folds `-0.0` into zero.
fn nonzero(x: f64) -> bool {
    x.abs() > 0.0
}

impl std::ops::Add for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.a - rhs.a,
            self.b - rhs.b,
            self.c - rhs.c,
            self.d - rhs.d,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.a, -self.b, -self.c, -self.d)
    }
}

/// Hamilton product. Not commutative: `i * j = k` but `j * i = -k`.
impl std::ops::Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        let (a1, b1, c1, d1) = (self.a, self.b, self.c, self.d);
        let (a2, b2, c2, d2) = (rhs.a, rhs.b, rhs.c, rhs.d);
        Quaternion::new(
            a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        )
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, scalar: f64) -> Quaternion {
        Quaternion::new(self.a * scalar, self.b * scalar, self.c * scalar, self.d * scalar)
    }
}

impl fmt::Display for Quaternion {
    /// Canonical compact rendering.
    ///
    /// Terms appear in the fixed order `a`, `b·i`, `c·j`, `d·k`; zero terms
    /// are omitted entirely. Imaginary terms of unit magnitude elide the
    /// numeral (`i`, not `1i`). The first emitted term never carries a
    /// leading `+`; every later term carries `+` or `-`. All-zero renders
    /// as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut out = String::new();
        if nonzero(self.a) {
            out.push_str(&self.a.to_string());
        }
        append_term(&mut out, self.b, "i");
        append_term(&mut out, self.c, "j");
        append_term(&mut out, self.d, "k");

        f.write_str(&out)
    }
}

fn append_term(out: &mut String, coeff: f64, symbol: &str) {
    if !nonzero(coeff) {
        return;
    }
    if out.is_empty() {
        if coeff < 0.0 {
            out.push('-');
        }
    } else {
        out.push(if coeff < 0.0 { '-' } else { '+' });
    }
    let mag = coeff.abs();
    if mag != 1.0 {
        out.push_str(&mag.to_string());
    }
    out.push_str(symbol);
}

impl FromStr for Quaternion {
    type Err = VersorError;

    /// Parse up to four comma-separated coefficients, e.g. `"1,2,0,-1"`.
    /// Unsupplied trailing coefficients default to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() > 4 {
            return Err(VersorError::InvalidQuaternion {
                input: s.to_string(),
                msg: format!("expected at most 4 coefficients, got {}", parts.len()),
            });
        }

        let mut coeffs = [0.0f64; 4];
        for (i, part) in parts.iter().enumerate() {
            coeffs[i] = part.parse().map_err(|_| VersorError::InvalidQuaternion {
                input: s.to_string(),
                msg: format!("coefficient '{}' is not a number", part),
            })?;
        }

        let [a, b, c, d] = coeffs;
        Ok(Quaternion::new(a, b, c, d))
    }
}
