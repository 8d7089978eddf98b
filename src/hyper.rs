//! Tetration, super-logarithms, pentation and layer arithmetic.
//!
//! Tetration for non-integer heights has no single agreed-upon definition.
//! Bases up to 10 use an analytic approximation driven by precomputed
//! critical-section tables; larger bases fall back to a linear
//! approximation. Every entry point takes a `linear` flag to force the
//! linear approximation everywhere.

use num_traits::Float;

use crate::constants::{
    CRITICAL_HEADERS, CRITICAL_SLOG_VALUES, CRITICAL_TETR_VALUES, MAX_CONVERGENT_BASE,
    MIN_CONVERGENT_BASE,
};
use crate::Decimal;

impl Decimal {
    /// A tower of `height` exponentiations of this base, topped by
    /// `payload`.
    ///
    /// Heights may be fractional, negative (which iterates logarithms
    /// instead) or infinite (which settles on the tower's fixed point
    /// when one exists).
    pub fn tetrate(self, height: f64, payload: Self, linear: bool) -> Self {
        if height == 1.0 {
            return self.pow(payload);
        }
        if height == 0.0 {
            return payload;
        }
        if self == Self::ONE {
            return Self::ONE;
        }
        if self == Self::NEG_ONE {
            return self.pow(payload);
        }

        if height == f64::INFINITY {
            let this_num = self.to_f64();
            if this_num <= MAX_CONVERGENT_BASE && this_num >= MIN_CONVERGENT_BASE {
                let neg_ln = -self.ln();
                // For bases above 1, b^x = x has two solutions; the lower
                // one is the stable equilibrium the tower settles on.
                let mut lower = neg_ln.lambert_w(true) / neg_ln;
                // Below base 1 only the stable equilibrium exists.
                if this_num < 1.0 {
                    return lower;
                }
                let mut upper = neg_ln.lambert_w(false) / neg_ln;
                // The W branches meet at the very edge of the range.
                if this_num > 1.444667861009099 {
                    lower = Self::E;
                    upper = Self::E;
                }
                return if payload == upper {
                    upper
                } else if payload < upper {
                    lower
                } else {
                    Self::INFINITY
                };
            }
            if this_num > MAX_CONVERGENT_BASE {
                // Explodes upward.
                return Self::INFINITY;
            }
            // Smaller positive bases never settle, and negative bases
            // leave the reals.
            return Self::NAN;
        }

        if self == Self::ZERO {
            // 0^^n oscillates between 0 and 1, interpolated in between.
            let mut result = ((height + 1.0) % 2.0).abs();
            if result > 1.0 {
                result = 2.0 - result;
            }
            return Self::from(result);
        }

        if height < 0.0 {
            return payload.iterated_log(self, -height, linear);
        }

        let old_height = height;
        let height = height.trunc();
        let frac_height = old_height - height;
        let mut payload = payload;

        if self > Self::ZERO
            && (self < Self::ONE
                || (self <= Self::from(MAX_CONVERGENT_BASE)
                    && payload <= (-self.ln()).lambert_w(false) / (-self.ln())))
            && (old_height > 10000.0 || !linear)
        {
            // The tower converges, so walk it until it stops moving.
            let limit_height = 10000.0_f64.min(height);
            if payload == Self::ONE {
                payload = self.pow(Self::from(frac_height));
            } else if self < Self::ONE {
                payload = payload.pow(Self::from(1.0 - frac_height))
                    * self.pow(payload).pow(Self::from(frac_height));
            } else {
                payload = payload.layer_add(Self::from(frac_height), self, linear);
            }

            for _ in 0..limit_height as i64 {
                let old_payload = payload;
                payload = self.pow(payload);
                if old_payload == payload {
                    return payload;
                }
            }

            // An odd leftover height still flips once more between the
            // two oscillation points.
            if old_height > 10000.0 && old_height.ceil() % 2.0 == 1.0 {
                return self.pow(payload);
            }
            return payload;
        }

        if frac_height != 0.0 {
            if payload == Self::ONE {
                if self > Self::TEN || linear {
                    payload = self.pow(Self::from(frac_height));
                } else {
                    payload = Self::from(tetrate_critical(self.to_f64(), frac_height));
                    // The critical grid only covers bases from 2 up.
                    if self < Self::TWO {
                        payload = (payload - 1.0) * (self - 1.0) + 1.0;
                    }
                }
            } else if self == Self::TEN {
                payload = payload.layer_add_10(Self::from(frac_height), linear);
            } else if self < Self::ONE {
                payload = payload.pow(Self::from(1.0 - frac_height))
                    * self.pow(payload).pow(Self::from(frac_height));
            } else {
                payload = payload.layer_add(Self::from(frac_height), self, linear);
            }
        }

        for i in 0..height as i64 {
            payload = self.pow(payload);
            if !payload.layer.is_finite() || !payload.mag.is_finite() {
                return payload.normalized();
            }
            // Each remaining step only adds a layer from here on.
            if payload.layer - self.layer > 3.0 {
                return Self::from_parts(
                    payload.sign,
                    payload.layer + (height - i as f64 - 1.0),
                    payload.mag,
                );
            }
            if i > 10000 {
                return payload;
            }
        }
        payload
    }

    /// Iterated exponentiation with this base, another name for
    /// [`Decimal::tetrate`].
    pub fn iterated_exp(self, height: f64, payload: Self, linear: bool) -> Self {
        self.tetrate(height, payload, linear)
    }

    /// Applies `log(base)` to this value `times` times. Negative counts
    /// tetrate instead.
    pub fn iterated_log(self, base: Self, times: f64, linear: bool) -> Self {
        if times < 0.0 {
            return base.tetrate(-times, self, linear);
        }

        let mut result = self;
        let full_times = times;
        let mut times = times.trunc();
        let fraction = full_times - times;

        if result.layer - base.layer > 3.0 {
            let layer_loss = times.min(result.layer - base.layer - 3.0);
            times -= layer_loss;
            result.layer -= layer_loss;
        }

        for i in 0..times as i64 {
            result = result.log(base);
            if !result.layer.is_finite() || !result.mag.is_finite() {
                return result.normalized();
            }
            if i > 10000 {
                return result;
            }
        }

        if fraction > 0.0 && fraction < 1.0 {
            if base == Self::TEN {
                result = result.layer_add_10(Self::from(-fraction), linear);
            } else {
                result = result.layer_add(Self::from(-fraction), base, linear);
            }
        }
        result
    }

    /// Adds `diff` layers, fractional layers included. Very similar to
    /// tetrating or iterated-logging base 10 by `diff`.
    pub fn layer_add_10(self, diff: Self, linear: bool) -> Self {
        let mut f_diff = diff.to_f64();
        let mut result = self;

        if f_diff >= 1.0 {
            // A negative value can't survive the logs below, so flush it
            // to something the layer bump is valid for.
            if result.mag < 0.0 && result.layer > 0.0 {
                result.sign = 0.0;
                result.layer = 0.0;
                result.mag = 0.0;
            } else if result.sign == -1.0 && result.layer == 0.0 {
                result.sign = 1.0;
                result.mag = -result.mag;
            }
            let layer_add = f_diff.trunc();
            f_diff -= layer_add;
            result.layer += layer_add;
        }

        if f_diff <= -1.0 {
            let layer_add = f_diff.trunc();
            f_diff -= layer_add;
            result.layer += layer_add;
            if result.layer < 0.0 {
                for _ in 0..100 {
                    result.layer += 1.0;
                    result.mag = result.mag.log10();
                    if !result.mag.is_finite() {
                        // The logs bottomed out; absorb the rest of the
                        // difference here.
                        if result.sign == 0.0 {
                            result.sign = 1.0;
                        }
                        if result.layer < 0.0 {
                            result.layer = 0.0;
                        }
                        return result.normalized();
                    }
                    if result.layer >= 0.0 {
                        break;
                    }
                }
            }
        }

        while result.layer < 0.0 {
            result.layer += 1.0;
            result.mag = result.mag.log10();
        }
        // Restore the zero special case.
        if result.sign == 0.0 {
            result.sign = 1.0;
            if result.mag == 0.0 && result.layer >= 1.0 {
                result.layer -= 1.0;
                result.mag = 1.0;
            }
        }
        result.normalize();

        // Hand the leftover fractional layer to the slog machinery.
        if f_diff != 0.0 {
            return result.layer_add(Self::from(f_diff), Self::TEN, linear);
        }
        result
    }

    /// Adds `diff` to this value's super-logarithm in the given base.
    pub fn layer_add(self, diff: Self, base: Self, linear: bool) -> Self {
        let f_diff = diff.to_f64();
        if base > Self::ONE && base <= Self::from(MAX_CONVERGENT_BASE) {
            // Convergent bases need the tower bracket as well as the
            // height to pin a value down.
            let (slog_this, range) = self.excess_slog(base, linear);
            let slog_dest = slog_this.to_f64() + f_diff;
            // A failed bracket search surfaces as NaN and has to stop
            // here, or the tetrate below would bounce it straight back.
            if slog_dest.is_nan() {
                return Self::NAN;
            }
            let neg_ln = -base.ln();
            let lower = neg_ln.lambert_w(true) / neg_ln;
            let upper = neg_ln.lambert_w(false) / neg_ln;
            let slog_zero = match range {
                1 => (lower * upper).sqrt(),
                2 => upper * 2.0,
                _ => Self::ONE,
            };
            let slog_one = base.pow(slog_zero);
            let whole_height = slog_dest.floor();
            let frac_height = slog_dest - whole_height;
            let tower_top =
                slog_zero.pow(Self::from(1.0 - frac_height)) * slog_one.pow(Self::from(frac_height));
            return base.tetrate(whole_height, tower_top, linear);
        }

        let slog_dest = self.slog(base, 100.0, linear).to_f64() + f_diff;
        if slog_dest >= 0.0 {
            base.tetrate(slog_dest, Self::ONE, linear)
        } else if !slog_dest.is_finite() {
            Self::NAN
        } else if slog_dest >= -1.0 {
            base.tetrate(slog_dest + 1.0, Self::ONE, linear).log(base)
        } else {
            base.tetrate(slog_dest + 2.0, Self::ONE, linear).log(base).log(base)
        }
    }

    /// The super-logarithm, one of tetration's inverses: how tall a tower
    /// of `base` reaches this value.
    ///
    /// The analytic seed is refined by a direction-switching step search
    /// for up to `iterations` rounds. By construction the result never
    /// exceeds 1.8e308, since a tower that tall is the largest value this
    /// type can hold.
    pub fn slog(self, base: Self, iterations: f64, linear: bool) -> Self {
        let mut step_size = 0.001;
        let mut has_changed_directions_once = false;
        let mut previously_rose = false;
        let mut result = self.slog_internal(base, linear).to_f64();
        for i in 1..iterations as i64 {
            let new_value = base.tetrate(result, Self::ONE, linear);
            let currently_rose = new_value > self;
            if i > 1 && previously_rose != currently_rose {
                has_changed_directions_once = true;
            }
            previously_rose = currently_rose;
            if has_changed_directions_once {
                step_size /= 2.0;
            } else {
                step_size *= 2.0;
            }
            step_size = if currently_rose {
                -step_size.abs()
            } else {
                step_size.abs()
            };
            result += step_size;
            if step_size == 0.0 {
                break;
            }
        }
        Self::from(result)
    }

    fn slog_internal(self, base: Self, linear: bool) -> Self {
        if base <= Self::ZERO || base == Self::ONE {
            return Self::NAN;
        }
        if base < Self::ONE {
            if self == Self::ONE {
                return Self::ZERO;
            }
            if self == Self::ZERO {
                return Self::NEG_ONE;
            }
            return Self::NAN;
        }

        if self.mag < 0.0 || self == Self::ZERO {
            return Self::NEG_ONE;
        }
        if base < Self::from(MAX_CONVERGENT_BASE) {
            // An infinite tower of this base converges; values past that
            // equilibrium can't be reached by any height.
            let neg_ln = -base.ln();
            let inf_tower = neg_ln.lambert_w(true) / neg_ln;
            if self == inf_tower {
                return Self::INFINITY;
            }
            if self > inf_tower {
                return Self::NAN;
            }
        }

        let mut result = 0.0;
        let mut copy = self;
        if copy.layer - base.layer > 3.0 {
            let layer_loss = copy.layer - base.layer - 3.0;
            result += layer_loss;
            copy.layer -= layer_loss;
        }

        for _ in 0..100 {
            if copy < Self::ZERO {
                copy = base.pow(copy);
                result -= 1.0;
            } else if copy <= Self::ONE {
                if linear {
                    return Self::from(result + copy.to_f64() - 1.0);
                }
                return Self::from(result + slog_critical(base.to_f64(), copy.to_f64()));
            } else {
                result += 1.0;
                copy = copy.log(base);
            }
        }
        Self::from(result)
    }

    /// The super-logarithm for convergent bases, where a height alone is
    /// ambiguous: values may sit under the lower fixed point (bracket 0),
    /// between the two fixed points (bracket 1) or above the upper one
    /// (bracket 2). Returns the height together with that bracket.
    pub fn excess_slog(self, base: Self, linear: bool) -> (Self, u8) {
        let n_base = base.to_f64();
        if n_base == 1.0 || n_base <= 0.0 {
            return (Self::NAN, 0);
        }
        if n_base > MAX_CONVERGENT_BASE {
            return (self.slog(base, 100.0, linear), 0);
        }
        let neg_ln = -base.ln();
        let mut lower = neg_ln.lambert_w(true) / neg_ln;
        let mut upper = Self::INFINITY;
        if n_base > 1.0 {
            upper = neg_ln.lambert_w(false) / neg_ln;
        }
        if n_base > 1.444667861009099 {
            lower = Self::E;
            upper = Self::E;
        }
        if self < lower {
            return (self.slog(base, 100.0, linear), 0);
        }
        // The fixed points themselves sit at the two ends of the height
        // axis.
        if self == lower {
            return (Self::INFINITY, 0);
        }
        if self == upper {
            return (Self::NEG_INFINITY, 0);
        }

        if self > upper {
            let slog_zero = upper * 2.0;
            let slog_one = base.pow(slog_zero);
            let mut estimate = 0.0;
            if self >= slog_one {
                let mut payload = slog_one;
                estimate = 1.0;
                while payload < self {
                    payload = base.pow(payload);
                    estimate += 1.0;
                    if payload.layer > 3.0 {
                        let layers_left = (self.layer - payload.layer + 1.0).floor();
                        payload = base.iterated_exp(layers_left, payload, linear);
                        estimate += layers_left;
                    }
                }
                // Overshot by one tower step.
                if payload > self {
                    estimate -= 1.0;
                }
            } else if self < slog_zero {
                let mut payload = slog_zero;
                while payload > self {
                    payload = payload.log(base);
                    estimate -= 1.0;
                }
            }

            let mut frac_height = 0.0;
            let mut step_size = 0.5;
            let mut guess = Self::ZERO;
            while step_size > 1e-16 {
                let tested = frac_height + step_size;
                // Weighted geometric average between the two anchors.
                let tower_top =
                    slog_zero.pow(Self::from(1.0 - tested)) * slog_one.pow(Self::from(tested));
                guess = base.iterated_exp(estimate, tower_top, false);
                if guess == self {
                    return (Self::from(estimate + tested), 2);
                }
                if guess < self {
                    frac_height += step_size;
                }
                step_size /= 2.0;
            }
            if guess.neq_tolerance(self, 1e-7) {
                return (Self::NAN, 0);
            }
            return (Self::from(estimate + frac_height), 2);
        }

        if self < upper && self > lower {
            // Between the fixed points towers descend as they grow, so
            // the bracketing runs in the other direction.
            let slog_zero = (lower * upper).sqrt();
            let slog_one = base.pow(slog_zero);
            let mut estimate = 0.0;
            if self <= slog_one {
                let mut payload = slog_one;
                estimate = 1.0;
                while payload > self {
                    payload = base.pow(payload);
                    estimate += 1.0;
                }
                if payload < self {
                    estimate -= 1.0;
                }
            } else if self > slog_zero {
                let mut payload = slog_zero;
                while payload < self {
                    payload = payload.log(base);
                    estimate -= 1.0;
                }
            }

            let mut frac_height = 0.0;
            let mut step_size = 0.5;
            let mut guess = Self::ZERO;
            while step_size > 1e-16 {
                let tested = frac_height + step_size;
                let tower_top =
                    slog_zero.pow(Self::from(1.0 - tested)) * slog_one.pow(Self::from(tested));
                guess = base.iterated_exp(estimate, tower_top, false);
                if guess == self {
                    return (Self::from(estimate + tested), 1);
                }
                if guess > self {
                    frac_height += step_size;
                }
                step_size /= 2.0;
            }
            if guess.neq_tolerance(self, 1e-7) {
                return (Self::NAN, 0);
            }
            return (Self::from(estimate + frac_height), 1);
        }

        // Only a NaN operand falls through every bracket above.
        (Self::NAN, 0)
    }

    /// A tower of `height` tetrations of this base, topped by `payload`.
    pub fn pentate(self, height: f64, payload: Self, linear: bool) -> Self {
        let old_height = height;
        let mut height = height.trunc();
        let frac_height = old_height - height;
        let mut payload = payload;

        if frac_height != 0.0 {
            if payload == Self::ONE {
                height += 1.0;
                payload = Self::from(frac_height);
            } else if self == Self::TEN {
                payload = payload.layer_add_10(Self::from(frac_height), linear);
            } else {
                payload = payload.layer_add(Self::from(frac_height), self, linear);
            }
        }

        for i in 0..height as i64 {
            payload = self.tetrate(payload.to_f64(), Self::ONE, linear);
            if !payload.layer.is_finite() || !payload.mag.is_finite() {
                return payload.normalized();
            }
            if i > 10 {
                return payload;
            }
        }
        payload
    }
}

fn tetrate_critical(base: f64, height: f64) -> f64 {
    critical_section(base, height, &CRITICAL_TETR_VALUES)
}

fn slog_critical(base: f64, height: f64) -> f64 {
    if base > 10.0 {
        return height - 1.0;
    }
    critical_section(base, height, &CRITICAL_SLOG_VALUES)
}

// Bilinear interpolation over the precomputed grids, in log space where
// the cell allows it. Heights are deciles of the fractional part.
fn critical_section(base: f64, height: f64, grid: &[[f64; 11]; 10]) -> f64 {
    let height = (height * 10.0).clamp(0.0, 10.0);
    let base = base.clamp(2.0, 10.0);
    let mut lower = 0.0;
    let mut upper = 0.0;
    for (i, &header) in CRITICAL_HEADERS.iter().enumerate() {
        if header == base {
            lower = grid[i][height.floor() as usize];
            upper = grid[i][height.ceil() as usize];
            break;
        } else if header < base && CRITICAL_HEADERS[i + 1] > base {
            let base_frac = (base - header) / (CRITICAL_HEADERS[i + 1] - header);
            lower = grid[i][height.floor() as usize] * (1.0 - base_frac)
                + grid[i + 1][height.floor() as usize] * base_frac;
            upper = grid[i][height.ceil() as usize] * (1.0 - base_frac)
                + grid[i + 1][height.ceil() as usize] * base_frac;
            break;
        }
    }
    let frac = height - height.floor();
    if lower <= 0.0 || upper <= 0.0 {
        lower * (1.0 - frac) + upper * frac
    } else {
        base.powf((lower.ln() / base.ln()) * (1.0 - frac) + (upper.ln() / base.ln()) * frac)
    }
}
