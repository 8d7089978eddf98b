#![no_std]
#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either libm or the standard library must be included to use eternum");

use core::{cmp::Ordering, fmt, ops::*, str::FromStr};

use num_traits::{ConstOne, ConstZero, Float, Num, One, Signed, ToPrimitive, Zero};

mod shims;
use shims::*;

mod constants;
use constants::*;

mod parsing;
pub use parsing::FromStrError;

mod math;

mod hyper;

/// A sign/layer/magnitude triple covering magnitudes up to 10^^(1.8e308).
///
/// A value reads as `sign * 10^10^...^mag` with `layer` exponentiations:
/// layer 0 is a plain float, layer 1 is `10^mag`, layer 2 is `10^10^mag`,
/// and so on. Negative magnitudes at layer 1 and up encode values below 1.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)] // Field equality is exact equality on normalized values
pub struct Decimal {
    sign: f64,
    layer: f64,
    mag: f64,
}

impl ToPrimitive for Decimal {
    fn to_f64(&self) -> Option<f64> {
        Some((*self).to_f64())
    }

    fn to_i64(&self) -> Option<i64> {
        (*self).to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.sign < 0.0 {
            return None;
        }
        (*self).to_f64().to_u64()
    }
}

impl From<f64> for Decimal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_parts(sign(value), 0.0, value.abs()).normalized()
    }
}

macro_rules! impl_from_num {
    ($($ty: ty),*) => {$(
        impl From<$ty> for Decimal {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::from(value as f64)
            }
        }
    )*};
}

impl_from_num!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Decimal> for f64 {
    #[inline]
    fn from(value: Decimal) -> f64 {
        value.to_f64()
    }
}

impl Zero for Decimal {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign == 0.0
    }
}

impl ConstZero for Decimal {
    const ZERO: Self = Self::ZERO;
}

impl One for Decimal {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl ConstOne for Decimal {
    const ONE: Self = Self::ONE;
}

impl Signed for Decimal {
    fn abs(&self) -> Self {
        (*self).abs()
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            return Self::ZERO;
        }
        *self - *other
    }

    fn signum(&self) -> Self {
        Self::from(self.sign)
    }

    fn is_positive(&self) -> bool {
        self.sign > 0.0
    }

    fn is_negative(&self) -> bool {
        self.sign < 0.0
    }
}

impl PartialEq<f64> for Decimal {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialOrd<f64> for Decimal {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Self::from(*other))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        match self.sign.partial_cmp(&other.sign)? {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }
        let by_abs = self.cmp_abs(other);
        Some(if self.sign < 0.0 { by_abs.reverse() } else { by_abs })
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Self::from_parts(-self.sign, self.layer, self.mag)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        // Same-signed infinities keep their value; opposed ones have no sum.
        if self.is_infinite() {
            return if rhs.is_infinite() && self.sign == -rhs.sign {
                Self::NAN
            } else {
                self
            };
        }
        if rhs.is_infinite() {
            return rhs;
        }
        if self.sign == 0.0 {
            return rhs;
        }
        if rhs.sign == 0.0 {
            return self;
        }
        // A value plus its negation cancels exactly, no matter how large.
        if self.sign == -rhs.sign && self.layer == rhs.layer && self.mag == rhs.mag {
            return Self::ZERO;
        }
        // From layer 2 up the smaller operand is below double resolution.
        if self.layer >= 2.0 || rhs.layer >= 2.0 {
            return self.max_abs(rhs);
        }
        let (a, b) = if self.cmp_abs(&rhs) == Ordering::Greater {
            (self, rhs)
        } else {
            (rhs, self)
        };
        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from(a.sign * a.mag + b.sign * b.mag);
        }
        let layer_a = a.layer * sign(a.mag);
        let layer_b = b.layer * sign(b.mag);
        if layer_a - layer_b >= 2.0 {
            return a;
        }
        if layer_a == 0.0 && layer_b == -1.0 {
            if (b.mag - a.mag.log10()).abs() > MAX_SIGNIFICANT_DIGITS {
                return a;
            }
            let mag_diff = 10.0.powf(a.mag.log10() - b.mag);
            let mantissa = b.sign + a.sign * mag_diff;
            return Self::from_parts(sign(mantissa), 1.0, b.mag + mantissa.abs().log10())
                .normalized();
        }
        if layer_a == 1.0 && layer_b == 0.0 {
            if (a.mag - b.mag.log10()).abs() > MAX_SIGNIFICANT_DIGITS {
                return a;
            }
            let mag_diff = 10.0.powf(a.mag - b.mag.log10());
            let mantissa = b.sign + a.sign * mag_diff;
            return Self::from_parts(sign(mantissa), 1.0, b.mag.log10() + mantissa.abs().log10())
                .normalized();
        }
        if (a.mag - b.mag).abs() > MAX_SIGNIFICANT_DIGITS {
            return a;
        }
        let mag_diff = 10.0.powf(a.mag - b.mag);
        let mantissa = b.sign + a.sign * mag_diff;
        Self::from_parts(sign(mantissa), 1.0, b.mag + mantissa.abs().log10()).normalized()
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        self + (-rhs)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Decimal {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        // The sign rule holds across mixed infinities.
        if (self == Self::INFINITY && rhs == Self::NEG_INFINITY)
            || (self == Self::NEG_INFINITY && rhs == Self::INFINITY)
        {
            return Self::NEG_INFINITY;
        }
        if (self.mag == f64::INFINITY && rhs.sign == 0.0)
            || (self.sign == 0.0 && rhs.mag == f64::INFINITY)
        {
            return Self::NAN;
        }
        if self.layer == f64::INFINITY {
            return self;
        }
        if rhs.layer == f64::INFINITY {
            return rhs;
        }
        if self.sign == 0.0 || rhs.sign == 0.0 {
            return Self::ZERO;
        }
        // Reciprocal pairs collapse to a signed unit.
        if self.layer == rhs.layer && self.mag == -rhs.mag {
            return Self::from_parts(self.sign * rhs.sign, 0.0, 1.0);
        }
        // Order by multiplicative distance from 1.
        let (a, b) = if self.layer > rhs.layer
            || (self.layer == rhs.layer && self.mag.abs() > rhs.mag.abs())
        {
            (self, rhs)
        } else {
            (rhs, self)
        };
        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from(a.sign * a.mag * b.sign * b.mag);
        }
        if a.layer >= 3.0 || a.layer - b.layer >= 2.0 {
            return Self::from_parts(a.sign * b.sign, a.layer, a.mag).normalized();
        }
        if a.layer == 1.0 && b.layer == 0.0 {
            return Self::from_parts(a.sign * b.sign, 1.0, a.mag + b.mag.log10()).normalized();
        }
        if a.layer == 1.0 && b.layer == 1.0 {
            return Self::from_parts(a.sign * b.sign, 1.0, a.mag + b.mag).normalized();
        }
        if a.layer == 2.0 && (b.layer == 1.0 || b.layer == 2.0) {
            let new_mag = Self::from_parts(sign(a.mag), a.layer - 1.0, a.mag.abs()).normalized()
                + Self::from_parts(sign(b.mag), b.layer - 1.0, b.mag.abs()).normalized();
            return Self::from_parts(
                a.sign * b.sign,
                new_mag.layer + 1.0,
                new_mag.sign * new_mag.mag,
            )
            .normalized();
        }
        unreachable!("multiply left an unhandled layer pairing: {self}, {rhs}");
    }
}

impl Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Decimal {
        self * rhs.recip()
    }
}

impl Rem for Decimal {
    type Output = Decimal;

    fn rem(self, rhs: Self) -> Decimal {
        if rhs == Self::ZERO {
            return Self::ZERO;
        }
        let a = self.to_f64();
        let b = rhs.to_f64();
        if a.is_finite() && b.is_finite() && a != 0.0 && b != 0.0 {
            return Self::from(a % b);
        }
        // One operand is insignificant next to the other.
        if self - rhs == self {
            return Self::ZERO;
        }
        if rhs - self == rhs {
            return self;
        }
        if self.sign == -1.0 {
            return -(self.abs() % rhs);
        }
        if rhs.sign == -1.0 {
            return self % rhs.abs();
        }
        self - (self / rhs).floor() * rhs
    }
}

macro_rules! forward_binop_impl {
    ($($impl_name: ident: $name: ident, $impl_assign_name: ident: $assign_name: ident);*) => {$(
        impl $impl_name<f64> for Decimal {
            type Output = Decimal;

            fn $name(self, rhs: f64) -> Decimal {
                <Self as $impl_name>::$name(self, Self::from(rhs))
            }
        }

        impl $impl_assign_name for Decimal {
            fn $assign_name(&mut self, rhs: Self) {
                *self = <Self as $impl_name>::$name(*self, rhs);
            }
        }

        impl $impl_assign_name<f64> for Decimal {
            fn $assign_name(&mut self, rhs: f64) {
                *self = <Self as $impl_name>::$name(*self, Self::from(rhs));
            }
        }
    )*};
}

forward_binop_impl! {
    Add: add, AddAssign: add_assign;
    Sub: sub, SubAssign: sub_assign;
    Mul: mul, MulAssign: mul_assign;
    Div: div, DivAssign: div_assign;
    Rem: rem, RemAssign: rem_assign
}

impl Decimal {
    pub const ZERO: Self = Self::from_parts(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::from_parts(1.0, 0.0, 1.0);
    pub const NEG_ONE: Self = Self::from_parts(-1.0, 0.0, 1.0);
    pub const TWO: Self = Self::from_parts(1.0, 0.0, 2.0);
    pub const TEN: Self = Self::from_parts(1.0, 0.0, 10.0);
    pub const E: Self = Self::from_parts(1.0, 0.0, core::f64::consts::E);
    pub const NAN: Self = Self::from_parts(f64::NAN, f64::NAN, f64::NAN);
    pub const INFINITY: Self = Self::from_parts(1.0, f64::INFINITY, f64::INFINITY);
    pub const NEG_INFINITY: Self = Self::from_parts(-1.0, f64::INFINITY, f64::INFINITY);

    /// Constructs a Decimal from raw sign, layer and magnitude fields.
    ///
    /// # Note
    /// If not already normalized, you _must_ call [`Decimal::normalize`] on this value.
    /// Failure to do so will cause incorrect (although not undefined) behavior.
    #[inline]
    pub const fn from_parts(sign: f64, layer: f64, mag: f64) -> Self {
        Self { sign, layer, mag }
    }

    /// Constructs a Decimal from a base-10 mantissa/exponent pair.
    pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> Self {
        Self::from_parts(sign(mantissa), 1.0, exponent + mantissa.abs().log10()).normalized()
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Restores the canonical form: sign in {-1, 0, 1}, layer a whole
    /// number, magnitude within its layer band, NaN fully propagated.
    pub fn normalize(&mut self) {
        // Any zero form is totally zero.
        if self.sign == 0.0
            || (self.mag == 0.0 && self.layer == 0.0)
            || (self.mag == f64::NEG_INFINITY && self.layer > 0.0 && self.layer.is_finite())
        {
            *self = Self::ZERO;
            return;
        }

        // Extract the sign from a negative layer-0 magnitude.
        if self.layer == 0.0 && self.mag < 0.0 {
            self.mag = -self.mag;
            self.sign = -self.sign;
        }

        // Any infinity collapses to the canonical pair, keeping the sign.
        if self.mag == f64::INFINITY
            || self.layer == f64::INFINITY
            || self.mag == f64::NEG_INFINITY
            || self.layer == f64::NEG_INFINITY
        {
            self.mag = f64::INFINITY;
            self.layer = f64::INFINITY;
            return;
        }

        // Shift near-subnormal layer-0 magnitudes up into log form.
        if self.layer == 0.0 && self.mag < FIRST_NEG_LAYER {
            self.layer += 1.0;
            self.mag = self.mag.log10();
            return;
        }

        let mut abs_mag = self.mag.abs();
        let mut sign_mag = sign(self.mag);

        if abs_mag >= EXP_LIMIT {
            self.layer += 1.0;
            self.mag = sign_mag * abs_mag.log10();
            return;
        }

        while abs_mag < LAYER_DOWN && self.layer > 0.0 {
            self.layer -= 1.0;
            if self.layer == 0.0 {
                self.mag = 10.0.powf(self.mag);
            } else {
                self.mag = sign_mag * 10.0.powf(abs_mag);
                abs_mag = self.mag.abs();
                sign_mag = sign(self.mag);
            }
        }
        if self.layer == 0.0 {
            if self.mag < 0.0 {
                self.mag = -self.mag;
                self.sign = -self.sign;
            } else if self.mag == 0.0 {
                // Excessive rounding can give us all zeroes.
                self.sign = 0.0;
            }
        }

        if self.sign.is_nan() || self.layer.is_nan() || self.mag.is_nan() {
            *self = Self::NAN;
        }
    }

    #[inline]
    pub const fn sign(&self) -> f64 {
        self.sign
    }

    #[inline]
    pub const fn layer(&self) -> f64 {
        self.layer
    }

    #[inline]
    pub const fn mag(&self) -> f64 {
        self.mag
    }

    #[inline]
    pub const fn into_parts(self) -> (f64, f64, f64) {
        (self.sign, self.layer, self.mag)
    }

    #[inline]
    pub const fn is_nan(&self) -> bool {
        self.sign.is_nan() || self.layer.is_nan() || self.mag.is_nan()
    }

    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.sign.is_infinite() || self.layer.is_infinite() || self.mag.is_infinite()
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    pub fn to_f64(self) -> f64 {
        if self.mag == f64::INFINITY && self.layer == f64::INFINITY {
            if self.sign == 1.0 {
                return f64::INFINITY;
            }
            if self.sign == -1.0 {
                return f64::NEG_INFINITY;
            }
        }
        if !self.layer.is_finite() {
            return f64::NAN;
        }
        if self.layer == 0.0 {
            self.sign * self.mag
        } else if self.layer == 1.0 {
            self.sign * 10.0.powf(self.mag)
        } else if self.mag > 0.0 {
            if self.sign > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            0.0
        }
    }

    /// The base-10 mantissa: `self == mantissa() * 10^exponent()` while the
    /// decomposition is still meaningful (layer 1 and below).
    pub fn mantissa(self) -> f64 {
        if self.sign == 0.0 {
            0.0
        } else if self.layer == 0.0 {
            let exp = self.mag.log10().floor();
            // The smallest subnormal would otherwise divide back up to 10.
            let man = if self.mag == 5e-324 {
                5.0
            } else {
                self.mag / 10.0.powf(exp)
            };
            self.sign * man
        } else if self.layer == 1.0 {
            let residue = self.mag - self.mag.floor();
            self.sign * 10.0.powf(residue)
        } else {
            self.sign
        }
    }

    /// The base-10 exponent paired with [`Decimal::mantissa`]. Degenerates
    /// to ±infinity past layer 2.
    pub fn exponent(self) -> f64 {
        if self.sign == 0.0 {
            0.0
        } else if self.layer == 0.0 {
            self.mag.log10().floor()
        } else if self.layer == 1.0 {
            self.mag.floor()
        } else if self.layer == 2.0 {
            (sign(self.mag) * 10.0.powf(self.mag.abs())).floor()
        } else {
            self.mag * f64::INFINITY
        }
    }

    /// Returns this value with its mantissa replaced.
    pub fn with_mantissa(self, mantissa: f64) -> Self {
        if self.layer <= 2.0 {
            Self::from_mantissa_exponent(mantissa, self.exponent())
        } else if mantissa == 0.0 {
            Self::ZERO
        } else {
            Self::from_parts(sign(mantissa), self.layer, self.mag).normalized()
        }
    }

    /// Returns this value with its exponent replaced.
    pub fn with_exponent(self, exponent: f64) -> Self {
        Self::from_mantissa_exponent(self.mantissa(), exponent)
    }

    /// Returns this value with its sign replaced.
    pub fn with_sign(self, new_sign: f64) -> Self {
        if new_sign == 0.0 {
            Self::ZERO
        } else {
            Self::from_parts(sign(new_sign), self.layer, self.mag).normalized()
        }
    }

    pub fn mantissa_with_places(self, places: usize) -> f64 {
        let m = self.mantissa();
        if m.is_nan() {
            return f64::NAN;
        }
        if m == 0.0 {
            return 0.0;
        }
        decimal_places(m, places)
    }

    pub fn magnitude_with_places(self, places: usize) -> f64 {
        if self.mag.is_nan() {
            return f64::NAN;
        }
        if self.mag == 0.0 {
            return 0.0;
        }
        decimal_places(self.mag, places)
    }

    pub fn abs(self) -> Self {
        if self.sign == 0.0 {
            Self::from_parts(0.0, self.layer, self.mag)
        } else {
            Self::from_parts(1.0, self.layer, self.mag)
        }
    }

    pub fn recip(self) -> Self {
        if self.mag == 0.0 {
            Self::NAN
        } else if self.mag == f64::INFINITY {
            Self::ZERO
        } else if self.layer == 0.0 {
            Self::from_parts(self.sign, 0.0, 1.0 / self.mag).normalized()
        } else {
            Self::from_parts(self.sign, self.layer, -self.mag).normalized()
        }
    }

    pub fn round(self) -> Self {
        if self.mag < 0.0 {
            return Self::ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_parts(self.sign, 0.0, self.mag.round()).normalized();
        }
        self
    }

    pub fn floor(self) -> Self {
        if self.mag < 0.0 {
            return if self.sign == -1.0 { Self::NEG_ONE } else { Self::ZERO };
        }
        if self.sign == -1.0 {
            return -(-self).ceil();
        }
        if self.layer == 0.0 {
            return Self::from_parts(self.sign, 0.0, self.mag.floor()).normalized();
        }
        self
    }

    pub fn ceil(self) -> Self {
        if self.mag < 0.0 {
            return if self.sign == 1.0 { Self::ONE } else { Self::ZERO };
        }
        if self.sign == -1.0 {
            return -(-self).floor();
        }
        if self.layer == 0.0 {
            return Self::from_parts(self.sign, 0.0, self.mag.ceil()).normalized();
        }
        self
    }

    pub fn trunc(self) -> Self {
        if self.mag < 0.0 {
            return Self::ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_parts(self.sign, 0.0, self.mag.trunc()).normalized();
        }
        self
    }

    /// Compares absolute values. Layers count negatively for magnitudes
    /// below 1, so 1e-50 (layer 1, mag -50) sorts under 0.5 (layer 0).
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        let layer_a = if self.mag > 0.0 { self.layer } else { -self.layer };
        let layer_b = if other.mag > 0.0 { other.layer } else { -other.layer };
        if layer_a > layer_b {
            return Ordering::Greater;
        }
        if layer_a < layer_b {
            return Ordering::Less;
        }
        if self.mag > other.mag {
            return Ordering::Greater;
        }
        if self.mag < other.mag {
            return Ordering::Less;
        }
        Ordering::Equal
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self < other {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self > other {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn max_abs(self, other: Self) -> Self {
        if self.cmp_abs(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn min_abs(self, other: Self) -> Self {
        if self.cmp_abs(&other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn clamp_min(self, min: Self) -> Self {
        self.max(min)
    }

    #[inline]
    pub fn clamp_max(self, max: Self) -> Self {
        self.min(max)
    }

    /// Relative-tolerance equality: the tolerance scales with the larger
    /// magnitude, and magnitudes are aligned through a log when the layers
    /// differ by one. Layers more than one apart never compare equal.
    pub fn eq_tolerance(self, other: Self, tolerance: f64) -> bool {
        if self.sign != other.sign {
            return false;
        }
        if (self.layer - other.layer).abs() > 1.0 {
            return false;
        }
        let mut mag_a = self.mag;
        let mut mag_b = other.mag;
        if self.layer > other.layer {
            mag_b = f_mag_log10(mag_b);
        }
        if self.layer < other.layer {
            mag_a = f_mag_log10(mag_a);
        }
        (mag_a - mag_b).abs() <= tolerance * mag_a.abs().max(mag_b.abs())
    }

    #[inline]
    pub fn neq_tolerance(self, other: Self, tolerance: f64) -> bool {
        !self.eq_tolerance(other, tolerance)
    }

    pub fn cmp_tolerance(self, other: Self, tolerance: f64) -> Option<Ordering> {
        if self.eq_tolerance(other, tolerance) {
            Some(Ordering::Equal)
        } else {
            self.partial_cmp(&other)
        }
    }

    #[inline]
    pub fn lt_tolerance(self, other: Self, tolerance: f64) -> bool {
        !self.eq_tolerance(other, tolerance) && self < other
    }

    #[inline]
    pub fn lte_tolerance(self, other: Self, tolerance: f64) -> bool {
        self.eq_tolerance(other, tolerance) || self < other
    }

    #[inline]
    pub fn gt_tolerance(self, other: Self, tolerance: f64) -> bool {
        !self.eq_tolerance(other, tolerance) && self > other
    }

    #[inline]
    pub fn gte_tolerance(self, other: Self, tolerance: f64) -> bool {
        self.eq_tolerance(other, tolerance) || self > other
    }

    pub fn to_fixed(self, places: usize) -> String {
        if self.layer == 0.0 {
            return number_to_fixed(self.sign * self.mag, places);
        }
        self.to_string_with_decimal_places(places)
    }

    pub fn to_exponential(self, places: usize) -> String {
        if self.layer == 0.0 {
            return number_to_exponential(self.sign * self.mag, places);
        }
        self.to_string_with_decimal_places(places)
    }

    pub fn to_precision(self, places: usize) -> String {
        let e = self.exponent();
        if e <= -7.0 {
            return self.to_exponential(places.saturating_sub(1));
        }
        if (places as f64) > e {
            return self.to_fixed((places as f64 - e - 1.0) as usize);
        }
        self.to_exponential(places.saturating_sub(1))
    }

    pub fn to_string_with_decimal_places(self, places: usize) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        if self.mag == f64::INFINITY || self.layer == f64::INFINITY {
            return if self.sign == 1.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        let m = decimal_places(self.mantissa(), places);
        let e = decimal_places(self.exponent(), places);
        if self.layer == 0.0 {
            if (self.mag < 1e21 && self.mag > 1e-7) || self.mag == 0.0 {
                return number_to_fixed(self.sign * self.mag, places);
            }
            return format!("{m}e{e}");
        }
        if self.layer == 1.0 {
            return format!("{m}e{e}");
        }
        let mag = decimal_places(self.mag, places);
        if self.layer <= MAX_ES_IN_A_ROW {
            return format!(
                "{}{}{mag}",
                sign_prefix(self.sign),
                "e".repeat(self.layer as usize)
            );
        }
        let layer = decimal_places(self.layer, places);
        format!("{}(e^{layer}){mag}", sign_prefix(self.sign))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.mag == f64::INFINITY || self.layer == f64::INFINITY {
            return if self.sign == 1.0 {
                write!(f, "Infinity")
            } else {
                write!(f, "-Infinity")
            };
        }
        if self.layer == 0.0 {
            if (self.mag < 1e21 && self.mag > 1e-7) || self.mag == 0.0 {
                return write!(f, "{}", self.sign * self.mag);
            }
            return write!(f, "{}e{}", self.mantissa(), self.exponent());
        }
        if self.layer == 1.0 {
            return write!(f, "{}e{}", self.mantissa(), self.exponent());
        }
        if self.layer <= MAX_ES_IN_A_ROW {
            return write!(
                f,
                "{}{}{}",
                sign_prefix(self.sign),
                "e".repeat(self.layer as usize),
                self.mag.trunc()
            );
        }
        write!(
            f,
            "{}(e^{}){}",
            sign_prefix(self.sign),
            self.layer,
            self.mag.trunc()
        )
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectRadix(radix) => {
                write!(f, "can only decode numbers of radix 10 (got {radix})")
            }
            Self::MalformedInput(index) => write!(f, "malformed input at character {index}"),
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl Error for FromStrError {}

impl Num for Decimal {
    type FromStrRadixErr = FromStrError;

    fn from_str_radix(string: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        use FromStrError::*;
        if radix != 10 {
            return Err(IncorrectRadix(radix));
        }

        Self::from_str(string)
    }
}

impl FromStr for Decimal {
    type Err = FromStrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parsing::parse_decimal(string, false)
    }
}

impl Decimal {
    /// Parses like [`FromStr`], except hyperoperator notations (`^^`, `^^^`
    /// and the tower shorthands) use the linear approximation for
    /// fractional heights.
    pub fn from_str_linear(string: &str) -> Result<Self, FromStrError> {
        parsing::parse_decimal(string, true)
    }
}

fn sign_prefix(sign: f64) -> &'static str {
    if sign == -1.0 {
        "-"
    } else {
        ""
    }
}

pub(crate) fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

pub(crate) fn f_mag_log10(x: f64) -> f64 {
    x.signum() * x.abs().log10()
}

/// Rounds to `places + 1` significant digits, reparsing through fixed
/// notation to shed the float noise the scaling introduces.
pub(crate) fn decimal_places(value: f64, places: usize) -> f64 {
    let len = places as f64 + 1.0;
    let num_digits = value.abs().log10().ceil();
    let rounded = (value * 10.0.powf(len - num_digits)).round() * 10.0.powf(num_digits - len);
    format!("{rounded:.places$}").parse().unwrap_or(rounded)
}

fn number_to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    format!("{value:.places$}")
}

fn number_to_exponential(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    format!("{value:.places$e}")
}
