//! Floating point helpers usable in `const` context.
//!
//! Everything here is a `const fn` so transformation matrices and other constants can be built at
//! compile time. The series are accurate to well below [`EPSILON`] on the reduced ranges.

pub const EPSILON: f64 = 1.0e-6;
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2. * PI;
pub const HALF_PI: f64 = 0.5 * PI;

const SERIES_TERMS: u32 = 12;
const ATAN_SERIES_TERMS: u32 = 20;
const SQRT_MAX_ITERATIONS: u32 = 64;

pub const fn abs(x: f64) -> f64 {
    if x < 0. { -x } else { x }
}

pub const fn max(lhs: f64, rhs: f64) -> f64 {
    if lhs < rhs { rhs } else { lhs }
}

/// Compares with the default [`EPSILON`], see [`are_close_eps`].
pub const fn are_close(lhs: f64, rhs: f64) -> bool {
    are_close_eps(lhs, rhs, EPSILON)
}

/// Exact match, then absolute difference, then difference relative to the larger magnitude.
pub const fn are_close_eps(lhs: f64, rhs: f64, epsilon: f64) -> bool {
    if lhs == rhs {
        return true;
    }
    let diff = abs(lhs - rhs);
    if diff <= epsilon {
        return true;
    }
    diff <= epsilon * max(abs(lhs), abs(rhs))
}

pub const fn radians(degrees: f64) -> f64 {
    degrees / 180. * PI
}

pub const fn degrees(radians: f64) -> f64 {
    radians * 180. / PI
}

/// Wraps an angle into [-PI, PI].
const fn reduce_angle(x: f64) -> f64 {
    let turns = (x / TWO_PI) as i64 as f64;
    let mut x = x - turns * TWO_PI;
    while x > PI {
        x -= TWO_PI;
    }
    while x < -PI {
        x += TWO_PI;
    }
    x
}

pub const fn sin(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let x = reduce_angle(x);
    let x_sq = x * x;

    let mut term = x;
    let mut result = 0.;
    let mut n = 0;
    while n < SERIES_TERMS {
        result += term;
        let k = (2 * n + 2) as f64;
        term *= -x_sq / (k * (k + 1.));
        n += 1;
    }
    result
}

pub const fn cos(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let x = reduce_angle(x);
    let x_sq = x * x;

    let mut term = 1.;
    let mut result = 0.;
    let mut n = 0;
    while n < SERIES_TERMS {
        result += term;
        let k = (2 * n + 1) as f64;
        term *= -x_sq / (k * (k + 1.));
        n += 1;
    }
    result
}

pub const fn tan(x: f64) -> f64 {
    sin(x) / cos(x)
}

/// Newton's method seeded from the halved exponent. Negative input yields NaN.
pub const fn sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0. {
        return f64::NAN;
    }
    if x == 0. || x.is_infinite() {
        return x;
    }

    let mut guess = f64::from_bits((x.to_bits() >> 1) + 0x1FF8_0000_0000_0000);
    let mut i = 0;
    while i < SQRT_MAX_ITERATIONS {
        let next = 0.5 * (guess + x / guess);
        if next == guess {
            break;
        }
        guess = next;
        i += 1;
    }
    guess
}

pub const fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0. {
        return 0.;
    }
    if x > 1. {
        return HALF_PI - atan(1. / x);
    }
    if x < -1. {
        return -HALF_PI - atan(1. / x);
    }

    // atan(x) = 2 atan(x / (1 + sqrt(1 + x^2))), applied twice leaves |x| <= tan(PI / 16)
    let mut x = x;
    let mut halvings = 0;
    while halvings < 2 {
        x /= 1. + sqrt(1. + x * x);
        halvings += 1;
    }

    let x_sq = x * x;
    let mut power = x;
    let mut result = 0.;
    let mut n = 0;
    while n < ATAN_SERIES_TERMS {
        let term = power / (2 * n + 1) as f64;
        if n % 2 == 0 {
            result += term;
        } else {
            result -= term;
        }
        power *= x_sq;
        n += 1;
    }
    result * 4.
}

/// NaN outside of [-1, 1].
pub const fn asin(x: f64) -> f64 {
    if x.is_nan() || x > 1. || x < -1. {
        return f64::NAN;
    }
    if x == 1. {
        return HALF_PI;
    }
    if x == -1. {
        return -HALF_PI;
    }
    atan(x / sqrt(1. - x * x))
}

/// NaN outside of [-1, 1].
pub const fn acos(x: f64) -> f64 {
    if x.is_nan() || x > 1. || x < -1. {
        return f64::NAN;
    }
    HALF_PI - asin(x)
}
