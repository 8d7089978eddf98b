//! Logarithms, powers, roots and the gamma/Lambert W family.

use core::f64::consts::{LN_10, LOG10_2, LOG10_E, LOG2_10};

use num_traits::Float;

use crate::constants::{LAMBERT_LN_CUTOFF, LAMBERT_TINY, OMEGA};
use crate::{sign, Decimal};

impl Decimal {
    /// The base-10 logarithm, clamped to zero for negative inputs.
    pub fn plog10(self) -> Self {
        if self < Self::ZERO {
            return Self::ZERO;
        }
        self.log10()
    }

    /// The base-10 logarithm of the absolute value.
    pub fn abs_log10(self) -> Self {
        if self.sign == 0.0 {
            Self::NAN
        } else if self.layer > 0.0 {
            Self::from_parts(sign(self.mag), self.layer - 1.0, self.mag.abs()).normalized()
        } else {
            Self::from_parts(1.0, 0.0, self.mag.log10()).normalized()
        }
    }

    /// The base-10 logarithm. NaN for zero and negative values.
    ///
    /// At layer 1 and above this is a single layer drop, so it is exact.
    pub fn log10(self) -> Self {
        if self.sign <= 0.0 {
            Self::NAN
        } else if self.layer > 0.0 {
            Self::from_parts(sign(self.mag), self.layer - 1.0, self.mag.abs()).normalized()
        } else {
            Self::from_parts(self.sign, 0.0, self.mag.log10()).normalized()
        }
    }

    /// The logarithm in an arbitrary base. NaN when either side is
    /// non-positive or the base is 1.
    pub fn log(self, base: Self) -> Self {
        if self.sign <= 0.0 || base.sign <= 0.0 {
            return Self::NAN;
        }
        if base.sign == 1.0 && base.layer == 0.0 && base.mag == 1.0 {
            return Self::NAN;
        }
        if self.layer == 0.0 && base.layer == 0.0 {
            return Self::from_parts(self.sign, 0.0, self.mag.ln() / base.mag.ln()).normalized();
        }
        self.log10() / base.log10()
    }

    /// The natural logarithm. NaN for zero and negative values.
    pub fn ln(self) -> Self {
        if self.sign <= 0.0 {
            Self::NAN
        } else if self.layer == 0.0 {
            Self::from_parts(self.sign, 0.0, self.mag.ln()).normalized()
        } else if self.layer == 1.0 {
            Self::from_parts(sign(self.mag), 0.0, self.mag.abs() * LN_10).normalized()
        } else if self.layer == 2.0 {
            // log10(ln(10))
            Self::from_parts(sign(self.mag), 1.0, self.mag.abs() + 0.36221568869946325)
                .normalized()
        } else {
            Self::from_parts(sign(self.mag), self.layer - 1.0, self.mag.abs()).normalized()
        }
    }

    /// The base-2 logarithm. NaN for zero and negative values.
    pub fn log2(self) -> Self {
        if self.sign <= 0.0 {
            Self::NAN
        } else if self.layer == 0.0 {
            Self::from_parts(self.sign, 0.0, self.mag.log2()).normalized()
        } else if self.layer == 1.0 {
            Self::from_parts(sign(self.mag), 0.0, self.mag.abs() * LOG2_10).normalized()
        } else if self.layer == 2.0 {
            // log10(log2(10))
            Self::from_parts(sign(self.mag), 1.0, self.mag.abs() + 0.5213902276543247).normalized()
        } else {
            Self::from_parts(sign(self.mag), self.layer - 1.0, self.mag.abs()).normalized()
        }
    }

    /// Raises this value to a power.
    ///
    /// Negative bases only keep a real result when the exponent's float
    /// image has a definite parity; otherwise the result is NaN.
    pub fn pow(self, other: Self) -> Self {
        let a = self;
        let b = other;

        if a.sign == 0.0 {
            return if b == Self::ZERO { Self::ONE } else { a };
        }
        if a.sign == 1.0 && a.layer == 0.0 && a.mag == 1.0 {
            return a;
        }
        if b.sign == 0.0 {
            return Self::ONE;
        }
        if b.sign == 1.0 && b.layer == 0.0 && b.mag == 1.0 {
            return a;
        }

        let result = (a.abs_log10() * b).exp10();
        if self.sign == -1.0 {
            let parity = (b.to_f64() % 2.0).abs() % 2.0;
            if parity == 1.0 {
                return -result;
            }
            if parity == 0.0 {
                return result;
            }
            return Self::NAN;
        }
        result
    }

    /// Raises `base` to this value.
    pub fn pow_base(self, base: Self) -> Self {
        base.pow(self)
    }

    /// 10 raised to this value.
    pub fn exp10(self) -> Self {
        if self == Self::INFINITY {
            return Self::INFINITY;
        }
        if self == Self::NEG_INFINITY {
            return Self::ZERO;
        }
        if !self.layer.is_finite() || !self.mag.is_finite() {
            return Self::NAN;
        }

        let mut a = self;
        // At layer 0 use the float power directly unless it loses precision,
        // in which case promote a layer first.
        if a.layer == 0.0 {
            let new_mag = 10.0.powf(a.sign * a.mag);
            if new_mag.is_finite() && new_mag.abs() >= 0.1 {
                return Self::from_parts(1.0, 0.0, new_mag).normalized();
            }
            if a.sign == 0.0 {
                return Self::ONE;
            }
            a = Self::from_parts(a.sign, a.layer + 1.0, a.mag.log10());
        }
        if a.sign > 0.0 && a.mag >= 0.0 {
            return Self::from_parts(a.sign, a.layer + 1.0, a.mag).normalized();
        }
        if a.sign < 0.0 && a.mag >= 0.0 {
            return Self::from_parts(-a.sign, a.layer + 1.0, -a.mag).normalized();
        }
        // Both negative-magnitude cases round to 10^0.
        Self::ONE
    }

    /// e raised to this value.
    pub fn exp(self) -> Self {
        if self.mag < 0.0 {
            return Self::ONE;
        }
        if self.layer == 0.0 && self.mag <= 709.7 {
            Self::from((self.sign * self.mag).exp())
        } else if self.layer == 0.0 {
            Self::from_parts(1.0, 1.0, self.sign * LOG10_E * self.mag).normalized()
        } else if self.layer == 1.0 {
            Self::from_parts(1.0, 2.0, self.sign * (LOG10_E.log10() + self.mag)).normalized()
        } else {
            Self::from_parts(1.0, self.layer + 1.0, self.sign * self.mag).normalized()
        }
    }

    /// The square root.
    pub fn sqrt(self) -> Self {
        if self.layer == 0.0 {
            Self::from((self.sign * self.mag).sqrt())
        } else if self.layer == 1.0 {
            Self::from_parts(1.0, 2.0, self.mag.log10() - LOG10_2).normalized()
        } else {
            let mut result = Self::from_parts(self.sign, self.layer - 1.0, self.mag) / Self::TWO;
            result.layer += 1.0;
            result.normalize();
            result
        }
    }

    /// The cube root.
    pub fn cbrt(self) -> Self {
        self.pow(Self::from(1.0 / 3.0))
    }

    /// The `degree`th root.
    pub fn root(self, degree: Self) -> Self {
        self.pow(degree.recip())
    }

    /// The factorial, extended to all real values through the gamma
    /// function.
    pub fn factorial(self) -> Self {
        if self.mag < 0.0 || self.layer == 0.0 {
            (self + 1.0).gamma()
        } else if self.layer == 1.0 {
            (self * (self.ln() - 1.0)).exp()
        } else {
            self.exp()
        }
    }

    /// The gamma function, the analytic continuation of `(x - 1)!`.
    ///
    /// Layer-0 values below 24 go through a dedicated float routine; larger
    /// ones use a Stirling series on the log, dropping terms once they stop
    /// registering.
    pub fn gamma(self) -> Self {
        if self.mag < 0.0 {
            self.recip()
        } else if self.layer == 0.0 {
            if self < Self::from_parts(1.0, 0.0, 24.0) {
                return Self::from(f_gamma(self.sign * self.mag));
            }

            let t = self.mag - 1.0;
            let mut l = 0.9189385332046727; // ln(sqrt(2 pi))
            l += (t + 0.5) * t.ln();
            l -= t;

            let n2 = t * t;
            let mut np = t;
            let l2 = l + 1.0 / (12.0 * np);
            if l2 == l {
                return Self::from(l).exp();
            }

            l = l2;
            np *= n2;
            let l2 = l - 1.0 / (360.0 * np);
            if l2 == l {
                return Self::from(l).exp();
            }

            l = l2;
            np *= n2;
            l += 1.0 / (1260.0 * np);
            np *= n2;
            l -= 1.0 / (1680.0 * np);
            Self::from(l).exp()
        } else if self.layer == 1.0 {
            (self * (self.ln() - 1.0)).exp()
        } else {
            self.exp()
        }
    }

    /// The Lambert W function, the inverse of `x * e^x`.
    ///
    /// Only the two real branches are offered: the principal branch covers
    /// inputs from -1/e up, the other branch covers negative inputs from
    /// -1/e up to 0. Anything below -1/e is NaN.
    pub fn lambert_w(self, principal: bool) -> Self {
        if self < Self::from(-0.3678794411710499) {
            return Self::NAN;
        }
        if principal {
            if self.abs() < LAMBERT_TINY {
                self
            } else if self.mag < 0.0 {
                Self::from(f_lambert_w(self.to_f64(), 1e-10, true))
            } else if self.layer == 0.0 {
                Self::from(f_lambert_w(self.sign * self.mag, 1e-10, true))
            } else if self < LAMBERT_LN_CUTOFF {
                d_lambert_w(self, 1e-10, true)
            } else {
                self.ln()
            }
        } else if self.sign == 1.0 {
            Self::NAN
        } else if self.layer == 0.0 {
            Self::from(f_lambert_w(self.sign * self.mag, 1e-10, false))
        } else if self.layer == 1.0 {
            d_lambert_w(self, 1e-10, false)
        } else {
            -(-self).recip().lambert_w(true)
        }
    }
}

fn f_gamma(mut n: f64) -> f64 {
    if n.is_infinite() {
        return n;
    }
    if n < -50.0 {
        if n == n.trunc() {
            return f64::NEG_INFINITY;
        }
        return 0.0;
    }

    // Walk the argument up past 10 so the series below converges, keeping
    // the product to divide back out.
    let mut scal = 1.0;
    while n < 10.0 {
        scal *= n;
        n += 1.0;
    }

    n -= 1.0;
    let mut l = 0.9189385332046727; // ln(sqrt(2 pi))
    l += (n + 0.5) * n.ln();
    l -= n;
    let n2 = n * n;
    let mut np = n;
    l += 1.0 / (12.0 * np);
    np *= n2;
    l -= 1.0 / (360.0 * np);
    np *= n2;
    l += 1.0 / (1260.0 * np);
    np *= n2;
    l -= 1.0 / (1680.0 * np);
    np *= n2;
    l += 1.0 / (1188.0 * np);
    np *= n2;
    l -= 691.0 / (360360.0 * np);
    np *= n2;
    l += 7.0 / (1092.0 * np);
    np *= n2;
    l -= 3617.0 / (122400.0 * np);

    l.exp() / scal
}

fn f_lambert_w(z: f64, tol: f64, principal: bool) -> f64 {
    if z.is_infinite() {
        return z;
    }

    let mut w;
    if principal {
        if z == 0.0 {
            return z;
        }
        if z == 1.0 {
            return OMEGA;
        }
        if z < 10.0 {
            w = 0.0;
        } else {
            w = z.ln() - z.ln().ln();
        }
    } else {
        if z == 0.0 {
            return f64::NEG_INFINITY;
        }
        if z <= -0.1 {
            w = -2.0;
        } else {
            w = (-z).ln() - (-(-z).ln()).ln();
        }
    }

    for _ in 0..100 {
        let wn = (z * (-w).exp() + w * w) / (w + 1.0);
        if (wn - w).abs() < tol * wn.abs() {
            return wn;
        }
        w = wn;
    }
    panic!("lambert w iteration failed to converge on {z}");
}

// Halley iteration seeded from the log, for arguments past float range.
fn d_lambert_w(z: Decimal, tol: f64, principal: bool) -> Decimal {
    if z.mag.is_infinite() {
        return z;
    }

    let mut w;
    if principal {
        if z == Decimal::ZERO {
            return Decimal::ZERO;
        }
        if z == Decimal::ONE {
            return Decimal::from(OMEGA);
        }
        w = z.ln();
    } else {
        if z == Decimal::ZERO {
            return Decimal::NEG_INFINITY;
        }
        w = (-z).ln();
    }

    for _ in 0..100 {
        let ew = (-w).exp();
        let wewz = w - z * ew;
        let wn = w - wewz / (w + 1.0 - (w + 2.0) * wewz / (w * 2.0 + 2.0));
        if (wn - w).abs() < wn.abs() * tol {
            return wn;
        }
        w = wn;
    }
    panic!("lambert w iteration failed to converge on {z}");
}
