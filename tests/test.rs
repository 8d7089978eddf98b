use eternum::{Decimal, FromStrError};
use num_traits::{Num, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

#[test]
fn test_norm() {
    assert_eq!(
        Decimal::from_parts(1.0, 0.0, 1e16).normalized(),
        Decimal::from_parts(1.0, 1.0, 16.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 1.0, 5.0).normalized(),
        Decimal::from_parts(1.0, 0.0, 100_000.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 0.0, -5.0).normalized(),
        Decimal::from_parts(-1.0, 0.0, 5.0)
    );
    assert_eq!(
        Decimal::from_parts(-1.0, 3.0, 2.0).normalized(),
        Decimal::from_parts(-1.0, 2.0, 100.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 0.0, 1e-20).normalized(),
        Decimal::from_parts(1.0, 1.0, -20.0)
    );
    assert_eq!(Decimal::from_parts(0.0, 3.0, 99.0).normalized(), Decimal::ZERO);
    assert_eq!(Decimal::from_parts(1.0, 0.0, 0.0).normalized(), Decimal::ZERO);
    assert_eq!(
        Decimal::from_parts(1.0, 2.0, f64::NEG_INFINITY).normalized(),
        Decimal::ZERO
    );
    assert_eq!(
        Decimal::from_parts(1.0, 0.0, f64::INFINITY).normalized(),
        Decimal::INFINITY
    );
    assert_eq!(
        Decimal::from_parts(1.0, 0.0, f64::NEG_INFINITY).normalized(),
        Decimal::NEG_INFINITY
    );

    let nan = Decimal::from_parts(1.0, f64::NAN, 5.0).normalized();
    assert!(nan.sign().is_nan() && nan.layer().is_nan() && nan.mag().is_nan());
    let nan = Decimal::from_parts(1.0, 0.0, f64::NAN).normalized();
    assert!(nan.sign().is_nan() && nan.layer().is_nan() && nan.mag().is_nan());

    for (sign, layer, mag) in [
        (1.0, 0.0, 1e16),
        (1.0, 1.0, 5.0),
        (1.0, 0.0, -5.0),
        (-1.0, 3.0, 2.0),
        (0.0, 3.0, 99.0),
        (1.0, 0.0, 1e-20),
        (1.0, 2.0, f64::NEG_INFINITY),
        (1.0, 0.0, f64::INFINITY),
    ] {
        let once = Decimal::from_parts(sign, layer, mag).normalized();
        assert_eq!(once, once.normalized());
    }

    assert_eq!(Decimal::from(5e15) + Decimal::from(5e15), Decimal::from_parts(1.0, 1.0, 16.0));
    assert_eq!(Decimal::from_mantissa_exponent(1.0, 100.0), Decimal::from_parts(1.0, 1.0, 100.0));
    assert!(Decimal::from_mantissa_exponent(2.5, 3.0).eq_tolerance(Decimal::from(2500.0), 1e-12));
}

#[test]
fn test_ops() {
    const TEN_E_TWENTY: Decimal = Decimal::from_parts(1.0, 1.0, 20.0);
    const TEN_E_NINETEEN: Decimal = Decimal::from_parts(1.0, 1.0, 19.0);
    const TEN_E_FOUR_HUNDRED: Decimal = Decimal::from_parts(1.0, 1.0, 400.0);
    const TEN_E_399: Decimal = Decimal::from_parts(1.0, 1.0, 399.0);

    assert_eq!(
        TEN_E_TWENTY + TEN_E_TWENTY,
        Decimal::from_parts(1.0, 1.0, 20.30102999566398)
    );
    assert_eq!(
        TEN_E_TWENTY - TEN_E_NINETEEN,
        Decimal::from_parts(1.0, 1.0, 19.954242509439325)
    );
    assert_eq!(
        -TEN_E_NINETEEN + TEN_E_TWENTY,
        Decimal::from_parts(1.0, 1.0, 19.954242509439325)
    );
    assert_eq!(TEN_E_TWENTY - TEN_E_TWENTY, Decimal::ZERO);
    assert_eq!(TEN_E_TWENTY + Decimal::from(0.5), TEN_E_TWENTY);
    assert_eq!(Decimal::ONE + Decimal::from(1e-20), Decimal::ONE);
    assert_eq!(Decimal::from(1e-17) + Decimal::ONE, Decimal::ONE);
    assert!(TEN_E_TWENTY + Decimal::from(1e6) > TEN_E_TWENTY);
    assert!((TEN_E_TWENTY + Decimal::from(1e6)).eq_tolerance(TEN_E_TWENTY, 1e-9));

    let small_l = Decimal::from(2.0);
    let small_r = Decimal::from(3.1);
    assert_eq!(small_l + small_r, 5.1);
    assert_eq!(small_l + -small_r, -1.1);
    assert_eq!(-small_r + small_l, -1.1);
    assert_eq!(small_l * small_r, 6.2);
    assert_eq!(small_l * -small_r, -6.2);
    assert_eq!(-small_l * -small_r, 6.2);

    let sum = Decimal::ONE + Decimal::NEG_ONE;
    assert_eq!(sum, Decimal::ZERO);
    assert_eq!(sum.into_parts(), (0.0, 0.0, 0.0));
    assert_eq!(Decimal::ZERO - Decimal::ONE, Decimal::NEG_ONE);
    assert_eq!(Decimal::ONE - Decimal::NEG_ONE, Decimal::TWO);
    assert_eq!(-Decimal::ONE, Decimal::NEG_ONE);
    assert_ne!(-Decimal::ONE, Decimal::ONE);

    assert!((TEN_E_TWENTY + Decimal::NAN).is_nan());
    assert!((Decimal::NAN + TEN_E_TWENTY).is_nan());
    assert_eq!(Decimal::INFINITY + Decimal::INFINITY, Decimal::INFINITY);
    assert_eq!(Decimal::INFINITY + Decimal::ONE, Decimal::INFINITY);
    assert_eq!(Decimal::ONE + Decimal::INFINITY, Decimal::INFINITY);
    assert!((Decimal::INFINITY + Decimal::NEG_INFINITY).is_nan());
    assert!((Decimal::INFINITY - Decimal::INFINITY).is_nan());

    assert_eq!(TEN_E_TWENTY * TEN_E_TWENTY, Decimal::from_parts(1.0, 1.0, 40.0));
    assert_eq!(TEN_E_TWENTY * Decimal::from_parts(1.0, 1.0, -20.0), Decimal::ONE);
    assert_eq!(TEN_E_TWENTY * Decimal::from(2.0), TEN_E_TWENTY + TEN_E_TWENTY);
    assert_eq!(
        Decimal::from_parts(1.0, 2.0, 100.0) * Decimal::ONE,
        Decimal::from_parts(1.0, 2.0, 100.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 2.0, 33.5) * Decimal::from_parts(1.0, 1.0, 100.0),
        Decimal::from_parts(1.0, 2.0, 33.5)
    );
    assert_eq!(Decimal::ONE * Decimal::INFINITY, Decimal::INFINITY);
    assert_eq!(Decimal::INFINITY * Decimal::NEG_INFINITY, Decimal::NEG_INFINITY);
    assert_eq!(Decimal::NEG_INFINITY * Decimal::INFINITY, Decimal::NEG_INFINITY);
    assert_eq!(Decimal::NEG_INFINITY * Decimal::NEG_INFINITY, Decimal::NEG_INFINITY);
    assert!((Decimal::ZERO * Decimal::INFINITY).is_nan());
    assert!((Decimal::NAN * Decimal::ONE).is_nan());

    assert_eq!(TEN_E_TWENTY / TEN_E_NINETEEN, 10.0);
    assert_eq!(Decimal::from(7.0) / Decimal::from(3.5), 2.0);
    assert_eq!(TEN_E_TWENTY.recip(), Decimal::from_parts(1.0, 1.0, -20.0));
    assert_eq!(Decimal::from(4.0).recip(), 0.25);
    assert_eq!(Decimal::INFINITY / Decimal::from(17.0), Decimal::INFINITY);
    assert_eq!(Decimal::from(17.0) / Decimal::INFINITY, Decimal::ZERO);
    assert!((Decimal::ZERO / Decimal::ZERO).is_nan());
    assert!((TEN_E_TWENTY / Decimal::ZERO).is_nan());
    assert!((Decimal::NAN / Decimal::ONE).is_nan());

    assert_eq!(Decimal::from(5.0) % Decimal::from(3.0), 2.0);
    assert_eq!(Decimal::from(-5.0) % Decimal::from(3.0), -2.0);
    assert_eq!(Decimal::from(5.0) % Decimal::from(-3.0), 2.0);
    assert_eq!(Decimal::from(-5.0) % Decimal::from(-3.0), -2.0);
    assert_eq!(TEN_E_TWENTY % Decimal::ZERO, Decimal::ZERO);
    assert_eq!(TEN_E_TWENTY % Decimal::ONE, Decimal::ZERO);
    assert_eq!(TEN_E_TWENTY % 33.0, 1.0);
    assert_eq!(TEN_E_FOUR_HUNDRED % Decimal::ONE, Decimal::ZERO);
    assert_eq!(Decimal::ONE % TEN_E_FOUR_HUNDRED, Decimal::ONE);
    assert_eq!(TEN_E_FOUR_HUNDRED % TEN_E_399, Decimal::ZERO);
    assert_eq!(TEN_E_FOUR_HUNDRED % -TEN_E_399, Decimal::ZERO);
    assert_eq!(-TEN_E_FOUR_HUNDRED % TEN_E_399, Decimal::ZERO);
    assert!((Decimal::NAN % Decimal::ONE).is_nan());

    assert_eq!(Decimal::from(-1.5).floor(), -2.0);
    assert_eq!(Decimal::from(-1.5).ceil(), -1.0);
    assert_eq!(Decimal::from(-1.5).round(), -2.0);
    assert_eq!(Decimal::from(-1.5).trunc(), -1.0);
    assert_eq!(Decimal::from(1e-5).floor(), Decimal::ZERO);
    assert_eq!(Decimal::from_parts(1.0, 1.0, -30.0).floor(), Decimal::ZERO);
    assert_eq!(Decimal::from_parts(1.0, 1.0, -30.0).ceil(), Decimal::ONE);
    assert_eq!(Decimal::from_parts(-1.0, 1.0, -30.0).floor(), Decimal::NEG_ONE);
    assert_eq!(TEN_E_TWENTY.floor(), TEN_E_TWENTY);

    let product = "1e100".parse::<Decimal>().unwrap() * "1e100".parse::<Decimal>().unwrap();
    assert_eq!(product, Decimal::from_parts(1.0, 1.0, 200.0));
    assert_eq!(product, "1e200".parse::<Decimal>().unwrap());
}

#[test]
fn test_math() {
    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).log10(), 20.0);
    assert_eq!(Decimal::from(20.0).exp10(), Decimal::from_parts(1.0, 1.0, 20.0));
    assert_eq!(Decimal::from(1000.0).exp10(), Decimal::from_parts(1.0, 1.0, 1000.0));
    assert_eq!(Decimal::TEN.ln(), std::f64::consts::LN_10);
    assert_eq!(Decimal::from(1024.0).log2(), 10.0);
    assert!(Decimal::from(8.0).log(Decimal::from(2.0)).eq_tolerance(Decimal::from(3.0), 1e-12));
    assert!(Decimal::from(-1.0).log10().is_nan());
    assert!(Decimal::ZERO.log10().is_nan());
    assert!(Decimal::ONE.log(Decimal::ONE).is_nan());
    assert_eq!(Decimal::from(-3.0).plog10(), Decimal::ZERO);
    assert_eq!(Decimal::from(-100.0).abs_log10(), 2.0);

    let a = Decimal::from_parts(1.0, 2.0, 33.5);
    assert_eq!(Decimal::TEN.pow(a.log10()), a);
    assert_eq!(a.pow(Decimal::ZERO), Decimal::ONE);
    assert_eq!(a.pow(Decimal::ONE), a);
    assert_eq!(Decimal::ONE.pow(a), Decimal::ONE);
    assert_eq!(Decimal::ZERO.pow(Decimal::ZERO), Decimal::ONE);
    assert_eq!(Decimal::ZERO.pow(a), Decimal::ZERO);
    assert_eq!(Decimal::INFINITY.pow(Decimal::ZERO), Decimal::ONE);
    assert!(Decimal::from(2.0).pow(Decimal::from(10.0)).eq_tolerance(Decimal::from(1024.0), 1e-10));
    assert!(Decimal::from(-2.0).pow(Decimal::from(3.0)).eq_tolerance(Decimal::from(-8.0), 1e-9));
    assert!(Decimal::from(-2.0).pow(Decimal::from(2.0)).eq_tolerance(Decimal::from(4.0), 1e-9));
    assert!(Decimal::from(-2.0).pow(Decimal::from(0.5)).is_nan());
    assert_eq!(Decimal::from(0.5).pow_base(Decimal::from(100.0)), Decimal::TEN);

    assert_eq!(Decimal::ONE.exp(), Decimal::E);
    assert_eq!(
        Decimal::from(1000.0).exp(),
        Decimal::from_parts(1.0, 1.0, std::f64::consts::LOG10_E * 1000.0)
    );
    assert_eq!(Decimal::from(16.0).sqrt(), 4.0);
    assert!(Decimal::from_parts(1.0, 1.0, 40.0)
        .sqrt()
        .eq_tolerance(Decimal::from_parts(1.0, 1.0, 20.0), 1e-12));
    assert!(Decimal::from(27.0).cbrt().eq_tolerance(Decimal::from(3.0), 1e-9));
    assert!(Decimal::from(32.0)
        .root(Decimal::from(5.0))
        .eq_tolerance(Decimal::from(2.0), 1e-9));

    assert!(Decimal::from(5.0).factorial().eq_tolerance(Decimal::from(120.0), 1e-9));
    assert!(Decimal::from(10.0).factorial().eq_tolerance(Decimal::from(3628800.0), 1e-9));
    assert!(Decimal::from(170.0)
        .factorial()
        .eq_tolerance(Decimal::from(7.257415615307994e306), 1e-9));
    assert!(Decimal::from(171.0).factorial() > Decimal::from(f64::MAX));
    assert!(Decimal::from(171.0).factorial().is_finite());
    assert!(Decimal::from(100.0)
        .gamma()
        .eq_tolerance(Decimal::from(9.332621544394415e155), 1e-9));
    assert!(Decimal::from(0.5)
        .gamma()
        .eq_tolerance(Decimal::from(std::f64::consts::PI.sqrt()), 1e-9));
    assert!(Decimal::from(-0.5)
        .gamma()
        .eq_tolerance(Decimal::from(-2.0 * std::f64::consts::PI.sqrt()), 1e-9));
    assert_eq!(
        Decimal::from_parts(1.0, 1.0, -30.0).gamma(),
        Decimal::from_parts(1.0, 1.0, 30.0)
    );

    let w = Decimal::from(5.0).lambert_w(true);
    assert!((w * w.exp()).eq_tolerance(Decimal::from(5.0), 1e-9));
    let z = Decimal::from_parts(1.0, 1.0, 100.0);
    let w = z.lambert_w(true);
    assert!((w * w.exp()).eq_tolerance(z, 1e-7));
    assert!(Decimal::from(-0.5).lambert_w(true).is_nan());
    let w = Decimal::from(-0.1).lambert_w(false);
    assert!((w * w.exp()).eq_tolerance(Decimal::from(-0.1), 1e-7));
}

#[test]
fn test_hyper() {
    assert_eq!(Decimal::TEN.tetrate(0.0, Decimal::from(7.0), false), 7.0);
    assert_eq!(
        Decimal::TEN.tetrate(1.0, Decimal::from(7.0), false),
        Decimal::TEN.pow(Decimal::from(7.0))
    );
    assert_eq!(Decimal::ONE.tetrate(5.0, Decimal::TWO, false), Decimal::ONE);
    assert_eq!(Decimal::ZERO.tetrate(3.0, Decimal::ONE, false), Decimal::ZERO);
    assert_eq!(Decimal::ZERO.tetrate(2.0, Decimal::ONE, false), Decimal::ONE);
    assert_eq!(Decimal::TEN.tetrate(2.0, Decimal::ONE, false), Decimal::from(1e10));
    assert_eq!(
        Decimal::TEN.tetrate(3.0, Decimal::ONE, false),
        Decimal::from_parts(1.0, 1.0, 1e10)
    );
    assert_eq!(
        Decimal::TEN.tetrate(10.0, Decimal::ONE, false),
        Decimal::from_parts(1.0, 8.0, 1e10)
    );
    assert_eq!(
        Decimal::TEN.tetrate(100.0, Decimal::ONE, false),
        Decimal::from_parts(1.0, 98.0, 1e10)
    );
    assert_eq!(
        Decimal::from(100.0).tetrate(1.5, Decimal::ONE, false),
        Decimal::from_parts(1.0, 1.0, 20.0)
    );
    assert_eq!(Decimal::TEN.tetrate(-1.0, Decimal::from(1e10), false), 10.0);

    let half = Decimal::from(2.0).tetrate(0.5, Decimal::ONE, false);
    assert!(half > Decimal::ONE && half < Decimal::TWO);
    assert_eq!(
        Decimal::from(2.0).tetrate(1.5, Decimal::ONE, false),
        Decimal::from(2.0).pow(half)
    );
    assert!(Decimal::TEN
        .tetrate(0.5, Decimal::ONE, true)
        .eq_tolerance(Decimal::from(10f64.sqrt()), 1e-12));

    assert_eq!(
        Decimal::from(2.0).tetrate(f64::INFINITY, Decimal::ONE, false),
        Decimal::INFINITY
    );
    assert!(Decimal::from(0.01).tetrate(f64::INFINITY, Decimal::ONE, false).is_nan());
    let fix = Decimal::from(1.3).tetrate(f64::INFINITY, Decimal::ONE, false);
    assert!(Decimal::from(1.3).pow(fix).eq_tolerance(fix, 1e-9));
    let fix = Decimal::from(0.9).tetrate(f64::INFINITY, Decimal::ONE, false);
    assert!(Decimal::from(0.9).pow(fix).eq_tolerance(fix, 1e-9));

    for base in [1.1, 1.25, 1.44, 2.0, 10.0] {
        let base = Decimal::from(base);
        for height in 0..=5 {
            let value = base.tetrate(height as f64, Decimal::ONE, false);
            let slog = value.slog(base, 100.0, false).to_f64();
            assert!((slog - height as f64).abs() < 1e-2);
        }
    }
    let big = Decimal::from_parts(1.0, 98.0, 1e10);
    assert!((big.slog(Decimal::TEN, 100.0, false).to_f64() - 100.0).abs() < 1e-2);
    assert!((Decimal::ZERO.slog(Decimal::TEN, 100.0, false).to_f64() + 1.0).abs() < 1e-2);
    assert!(Decimal::ONE.slog(Decimal::ZERO, 100.0, false).is_nan());

    assert_eq!(
        Decimal::TEN.iterated_exp(3.0, Decimal::from(25.0), false),
        Decimal::from_parts(1.0, 3.0, 25.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 3.0, 25.0).iterated_log(Decimal::TEN, 3.0, false),
        Decimal::from(25.0)
    );
    assert_eq!(
        big.iterated_log(Decimal::TEN, 95.0, false),
        Decimal::from_parts(1.0, 3.0, 1e10)
    );

    let e100 = Decimal::from_parts(1.0, 1.0, 100.0);
    assert_eq!(
        e100.layer_add_10(Decimal::from(2.0), false),
        Decimal::from_parts(1.0, 3.0, 100.0)
    );
    assert_eq!(
        Decimal::from_parts(1.0, 3.0, 100.0).layer_add_10(Decimal::from(-2.0), false),
        e100
    );
    let up = e100.layer_add_10(Decimal::from(0.5), false);
    assert!(up.layer_add_10(Decimal::from(-0.5), false).eq_tolerance(e100, 1e-6));
    assert!(Decimal::ONE
        .layer_add(Decimal::from(2.0), Decimal::TWO, false)
        .eq_tolerance(Decimal::from(4.0), 1e-6));
    let base = Decimal::from(1.3);
    let shifted = Decimal::from(3.0).layer_add(Decimal::from(0.5), base, false);
    assert!(shifted
        .layer_add(Decimal::from(-0.5), base, false)
        .eq_tolerance(Decimal::from(3.0), 1e-5));
    assert!(Decimal::NAN.layer_add(Decimal::from(0.5), base, false).is_nan());

    let neg_ln = -base.ln();
    let lower = neg_ln.lambert_w(true) / neg_ln;
    let upper = neg_ln.lambert_w(false) / neg_ln;
    assert_eq!(lower.excess_slog(base, false), (Decimal::INFINITY, 0));
    assert_eq!(upper.excess_slog(base, false), (Decimal::NEG_INFINITY, 0));
    assert_eq!(Decimal::from(1.2).excess_slog(base, false).1, 0);
    assert_eq!(Decimal::from(3.0).excess_slog(base, false).1, 1);
    assert_eq!(Decimal::from(10.0).excess_slog(base, false).1, 2);
    let (height, bracket) = Decimal::NAN.excess_slog(base, false);
    assert!(height.is_nan());
    assert_eq!(bracket, 0);

    assert_eq!(Decimal::TEN.pentate(1.0, Decimal::ONE, false), Decimal::TEN);
    assert_eq!(
        Decimal::TEN.pentate(2.0, Decimal::ONE, false),
        Decimal::from_parts(1.0, 8.0, 1e10)
    );
    assert_eq!(
        Decimal::TEN.pentate(0.5, Decimal::ONE, false),
        Decimal::TEN.tetrate(0.5, Decimal::ONE, false)
    );
}

#[test]
fn test_cmp() {
    const BIG: Decimal = Decimal::from_parts(1.0, 3.0, 1e15);
    const BIGGER: Decimal = Decimal::from_parts(1.0, 3.0, 2e15);
    const BIGGERER: Decimal = Decimal::from_parts(1.0, 4.0, 16.0);

    assert!(Decimal::NAN != Decimal::NAN);
    assert!(!(Decimal::NAN < Decimal::NAN));
    assert!(!(Decimal::NAN > Decimal::NAN));
    assert!(Decimal::INFINITY == Decimal::INFINITY);
    assert!(Decimal::ZERO == Decimal::ZERO);
    assert!(Decimal::ONE > Decimal::ZERO);
    assert!(Decimal::ONE > Decimal::NEG_ONE);
    assert!(Decimal::NEG_ONE < Decimal::ZERO);

    assert!(BIG > Decimal::ONE);
    assert!(BIG > 1.0);
    assert!(BIG > -1.0);
    assert!(BIG == BIG);
    assert!(BIG < BIGGER);
    assert!(BIGGER > BIG);
    assert!(BIG < BIGGERER);
    assert!(BIGGERER >= BIGGERER);
    assert!(-BIGGER < -BIG);
    assert!(-BIG > -BIGGERER);
    assert!(Decimal::INFINITY > BIGGERER);
    assert!(Decimal::NEG_INFINITY < -BIGGERER);
    assert!(BIG < Decimal::INFINITY);
    assert!(BIG > Decimal::NEG_INFINITY);

    assert!(Decimal::from(1e-50) < Decimal::from(0.5));
    assert_eq!(Decimal::from(1e-50).cmp_abs(&Decimal::from(0.5)), Ordering::Less);
    assert_eq!(Decimal::from(-100.0).cmp_abs(&Decimal::from(50.0)), Ordering::Greater);
    assert_eq!(Decimal::from(-100.0).max_abs(Decimal::from(50.0)), Decimal::from(-100.0));
    assert_eq!(Decimal::from(-100.0).min_abs(Decimal::from(50.0)), Decimal::from(50.0));
    assert_eq!(Decimal::from(5.0).max(Decimal::from(3.0)), 5.0);
    assert_eq!(Decimal::from(5.0).min(Decimal::from(3.0)), 3.0);
    assert_eq!(Decimal::from(5.0).clamp(Decimal::ZERO, Decimal::from(3.0)), 3.0);
    assert_eq!(Decimal::from(-5.0).clamp_min(Decimal::ZERO), Decimal::ZERO);
    assert_eq!(Decimal::from(5.0).clamp_max(Decimal::TEN), 5.0);

    let close = Decimal::from(100.0000001);
    let hundred = Decimal::from(100.0);
    assert!(hundred.eq_tolerance(close, 1e-7));
    assert!(hundred.neq_tolerance(close, 1e-12));
    assert_eq!(hundred.cmp_tolerance(close, 1e-7), Some(Ordering::Equal));
    assert_eq!(hundred.cmp_tolerance(close, 1e-12), Some(Ordering::Less));
    assert!(!hundred.lt_tolerance(close, 1e-7));
    assert!(hundred.lte_tolerance(close, 1e-7));
    assert!(hundred.lt_tolerance(close, 1e-12));
    assert!(close.gt_tolerance(hundred, 1e-12));
    assert!(close.gte_tolerance(hundred, 1e-7));
    assert!(Decimal::from_parts(1.0, 1.0, 16.0).eq_tolerance(Decimal::from(9e15), 1e-2));
    assert!(!Decimal::from_parts(1.0, 2.0, 20.0).eq_tolerance(hundred, 1e-2));
    assert!(!Decimal::NAN.eq_tolerance(Decimal::NAN, 1e-9));
}

#[test]
fn test_ident() {
    assert!(Decimal::ONE.is_finite());
    assert!(!Decimal::NAN.is_finite());
    assert!(!Decimal::INFINITY.is_finite());
    assert!(!Decimal::ONE.is_infinite());
    assert!(Decimal::INFINITY.is_infinite());
    assert!(Decimal::NEG_INFINITY.is_infinite());
    assert!(!Decimal::NAN.is_infinite());
    assert!(Decimal::NAN.is_nan());
    assert!(!Decimal::INFINITY.is_nan());
    assert!(Decimal::from_parts(1.0, 3.0, 1e15).is_finite());

    assert_eq!(Decimal::zero(), Decimal::ZERO);
    assert!(Decimal::ZERO.is_zero());
    assert!(!Decimal::ONE.is_zero());
    assert_eq!(Decimal::one(), Decimal::ONE);
    assert!(Decimal::ONE.is_one());

    assert_eq!(Signed::signum(&Decimal::from(-5.0)), Decimal::NEG_ONE);
    assert_eq!(Signed::signum(&Decimal::from(5.0)), Decimal::ONE);
    assert!(Decimal::from(-5.0).is_negative());
    assert!(Decimal::from(5.0).is_positive());
    assert_eq!(Signed::abs_sub(&Decimal::from(3.0), &Decimal::from(5.0)), Decimal::ZERO);
    assert_eq!(Signed::abs_sub(&Decimal::from(5.0), &Decimal::from(3.0)), 2.0);
    assert_eq!(Decimal::from(-5.0).abs(), 5.0);
    assert_eq!(
        Decimal::from_parts(-1.0, 2.0, 100.0).abs(),
        Decimal::from_parts(1.0, 2.0, 100.0)
    );
    assert_eq!(Decimal::from(-5.0).with_sign(1.0), 5.0);
    assert_eq!(Decimal::from(5.0).with_sign(0.0), Decimal::ZERO);
}

#[test]
fn test_conv() {
    assert_eq!(f64::from(Decimal::ONE), 1.0);
    assert_eq!(ToPrimitive::to_f64(&Decimal::ONE), Some(1.0));
    assert_eq!(ToPrimitive::to_i64(&Decimal::ONE), Some(1));
    assert_eq!(ToPrimitive::to_u64(&Decimal::ONE), Some(1));
    assert_eq!(ToPrimitive::to_u64(&Decimal::NEG_ONE), None);
    assert_eq!(ToPrimitive::to_i64(&Decimal::from(2.5)), Some(2));
    assert_eq!(ToPrimitive::to_i64(&Decimal::from_parts(1.0, 2.0, 100.0)), None);

    assert_eq!(Decimal::from(42u8), 42.0);
    assert_eq!(Decimal::from(-7i32), -7.0);
    assert_eq!(Decimal::from(1e20), Decimal::from_parts(1.0, 1.0, 20.0));
    assert_eq!(Decimal::from(2.5f32), 2.5);

    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).to_f64(), 1e20);
    assert_eq!(Decimal::from_parts(1.0, 2.0, 100.0).to_f64(), f64::INFINITY);
    assert_eq!(Decimal::from_parts(-1.0, 2.0, 100.0).to_f64(), f64::NEG_INFINITY);
    assert_eq!(Decimal::from_parts(1.0, 2.0, -100.0).to_f64(), 0.0);
    assert!(Decimal::NAN.to_f64().is_nan());

    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).mantissa(), 1.0);
    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).exponent(), 20.0);
    assert_eq!(Decimal::from(1234.5).mantissa(), 1.2345);
    assert_eq!(Decimal::from(1234.5).exponent(), 3.0);
    assert_eq!(Decimal::from(1234.5).mantissa_with_places(2), 1.23);
    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).magnitude_with_places(2), 20.0);
    assert_eq!(Decimal::ZERO.mantissa(), 0.0);
    assert_eq!(Decimal::ZERO.exponent(), 0.0);
    assert_eq!(
        Decimal::from(1234.5).with_exponent(5.0),
        Decimal::from_mantissa_exponent(1.2345, 5.0)
    );
}

#[test]
fn test_parse() {
    assert_eq!("0".parse::<Decimal>().unwrap(), Decimal::ZERO);
    assert_eq!("17".parse::<Decimal>().unwrap(), 17.0);
    assert_eq!("-13.73".parse::<Decimal>().unwrap(), -13.73);
    assert_eq!("1,000,000".parse::<Decimal>().unwrap(), 1e6);
    assert_eq!("Infinity".parse::<Decimal>().unwrap(), Decimal::INFINITY);
    assert_eq!("-Infinity".parse::<Decimal>().unwrap(), Decimal::NEG_INFINITY);
    assert_eq!("inf".parse::<Decimal>().unwrap(), Decimal::INFINITY);
    assert!("NaN".parse::<Decimal>().unwrap().is_nan());

    assert_eq!("1e100".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 1.0, 100.0));
    assert_eq!("1e400".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 1.0, 400.0));
    assert_eq!("1e-500".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 1.0, -500.0));
    assert_eq!("ee100".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 2.0, 100.0));
    assert_eq!("-ee100".parse::<Decimal>().unwrap(), Decimal::from_parts(-1.0, 2.0, 100.0));
    assert_eq!("eee5".parse::<Decimal>().unwrap().into_parts(), (1.0, 3.0, 5.0));
    assert!("5e2e3"
        .parse::<Decimal>()
        .unwrap()
        .eq_tolerance("5e2000".parse::<Decimal>().unwrap(), 1e-9));

    assert_eq!("(e^7)12".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 6.0, 1e12));
    assert_eq!("-(e^3)2".parse::<Decimal>().unwrap(), Decimal::from_parts(-1.0, 2.0, 100.0));

    assert_eq!("10^^2".parse::<Decimal>().unwrap(), Decimal::from(1e10));
    assert_eq!(
        "10^^3".parse::<Decimal>().unwrap(),
        Decimal::TEN.tetrate(3.0, Decimal::ONE, false)
    );
    assert_eq!(
        "10^^3".parse::<Decimal>().unwrap(),
        "1e10000000000".parse::<Decimal>().unwrap()
    );
    assert_eq!("10^^^2".parse::<Decimal>().unwrap(), Decimal::from_parts(1.0, 8.0, 1e10));
    assert!("3^4".parse::<Decimal>().unwrap().eq_tolerance(Decimal::from(81.0), 1e-9));
    assert!("2^^2;3".parse::<Decimal>().unwrap().eq_tolerance(Decimal::from(256.0), 1e-9));

    let tower = "3pt2".parse::<Decimal>().unwrap();
    assert!(tower.eq_tolerance(Decimal::from_parts(1.0, 2.0, 100.0), 1e-12));
    assert_eq!("3p2".parse::<Decimal>().unwrap(), tower);
    assert_eq!("(2)f3".parse::<Decimal>().unwrap(), tower);
    assert_eq!("10^^3;2".parse::<Decimal>().unwrap(), tower);
    assert_eq!(
        "-2pt(3)".parse::<Decimal>().unwrap(),
        Decimal::from_parts(-1.0, 1.0, 1000.0)
    );

    assert!("".parse::<Decimal>().is_err());
    assert!("Na".parse::<Decimal>().is_err());
    assert!("-".parse::<Decimal>().is_err());
    assert!("+".parse::<Decimal>().is_err());
    assert!("abc".parse::<Decimal>().is_err());
    assert!("--5".parse::<Decimal>().is_err());
    assert!("10^^".parse::<Decimal>().is_err());
    assert!("1e2e".parse::<Decimal>().is_err());
    assert_eq!("eek".parse::<Decimal>(), Err(FromStrError::MalformedInput(2)));
    assert_eq!("10{5}".parse::<Decimal>(), Err(FromStrError::MalformedInput(0)));

    assert_eq!(
        <Decimal as Num>::from_str_radix("100", 16),
        Err(FromStrError::IncorrectRadix(16))
    );
    assert_eq!(
        <Decimal as Num>::from_str_radix("1e100", 10).unwrap(),
        Decimal::from_parts(1.0, 1.0, 100.0)
    );
    assert_eq!(Decimal::from_str_linear("10^^2").unwrap(), Decimal::from(1e10));
}

#[test]
fn test_fmt() {
    assert_eq!(Decimal::from(42.0).to_string(), "42");
    assert_eq!(Decimal::from(-13.73).to_string(), "-13.73");
    assert_eq!(Decimal::ZERO.to_string(), "0");
    assert_eq!(Decimal::from(1e15).to_string(), "1000000000000000");
    assert_eq!(Decimal::from(1e21).to_string(), "1e21");
    assert_eq!(Decimal::from_parts(1.0, 1.0, 100.0).to_string(), "1e100");
    assert_eq!(Decimal::from_parts(1.0, 2.0, 100.0).to_string(), "ee100");
    assert_eq!(Decimal::from_parts(-1.0, 2.0, 100.0).to_string(), "-ee100");
    assert_eq!(Decimal::from_parts(1.0, 5.0, 12345.6).to_string(), "eeeee12345");
    assert_eq!(Decimal::from_parts(1.0, 6.0, 100000.0).to_string(), "(e^6)100000");
    assert_eq!(Decimal::from_parts(1.0, 7.0, 15.5).to_string(), "(e^7)15");
    assert_eq!(Decimal::NAN.to_string(), "NaN");
    assert_eq!(Decimal::INFINITY.to_string(), "Infinity");
    assert_eq!(Decimal::NEG_INFINITY.to_string(), "-Infinity");
    assert_eq!("eee5".parse::<Decimal>().unwrap().to_string(), "eee5");
    assert_eq!("10^^3".parse::<Decimal>().unwrap().to_string(), "1e10000000000");
    assert_eq!("(e^7)12".parse::<Decimal>().unwrap().to_string(), "(e^6)1000000000000");

    let tiny = Decimal::from(1e-8);
    assert!(tiny.to_string().parse::<Decimal>().unwrap().eq_tolerance(tiny, 1e-9));

    assert_eq!(Decimal::from(1.2345).to_fixed(2), "1.23");
    assert_eq!(Decimal::from(3.0).to_fixed(0), "3");
    assert_eq!(Decimal::from_parts(1.0, 1.0, 20.0).to_fixed(2), "1e20");
    assert_eq!(Decimal::from(12345.0).to_exponential(2), "1.23e4");
    assert_eq!(Decimal::from(12345.0).to_precision(3), "1.23e4");
    assert_eq!(Decimal::from(0.00012345).to_precision(3), "0.000123");
    assert_eq!(Decimal::from(1.5e-9).to_precision(3), "1.50e-9");
    assert_eq!(
        format!("{}", FromStrError::IncorrectRadix(16)),
        "can only decode numbers of radix 10 (got 16)"
    );
    assert_eq!(
        format!("{}", FromStrError::MalformedInput(2)),
        "malformed input at character 2"
    );
}
