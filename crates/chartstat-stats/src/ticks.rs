//! Human-friendly tick values and domain rounding.
//!
//! Tick steps are a power of ten multiplied by 1, 2 or 5, chosen so that
//! roughly `count` ticks cover the requested range. Tick values are computed
//! as `index * step` (or `index / inverse_step` for fractional steps) rather
//! than accumulated, so they land on exact decimal values where possible.
//!
//! # Examples
//!
//! ```
//! use chartstat_stats::ticks::{nice, ticks};
//!
//! assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
//! assert_eq!(nice(350.0, 850.0, 10), (350.0, 850.0));
//! assert_eq!(nice(18.0, 92.0, 10), (10.0, 100.0));
//! ```

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Step between ticks.
///
/// Fractional steps are kept as their inverse to avoid representation error:
/// a step of 0.2 is `Inverse(5.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Whole(f64),
    Inverse(f64),
}

#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: f64,
    last: f64,
    step: Step,
}

#[expect(clippy::cast_precision_loss)]
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<TickSpec> {
    tick_spec_f(start, stop, count as f64)
}

#[expect(clippy::cast_possible_truncation)]
fn tick_spec_f(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let raw_step = (stop - start) / count.max(0.0);
    let power = raw_step.log10().floor();
    if !power.is_finite() {
        return None;
    }
    let error = raw_step / 10f64.powi(power as i32);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (first, last, step) = if power < 0.0 {
        let inc = 10f64.powi(-(power as i32)) / factor;
        let mut first = (start * inc).round();
        let mut last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        (first, last, Step::Inverse(inc))
    } else {
        let inc = 10f64.powi(power as i32) * factor;
        let mut first = (start / inc).round();
        let mut last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        (first, last, Step::Whole(inc))
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec_f(start, stop, count * 2.0);
    }
    if first.is_nan() || last.is_nan() {
        return None;
    }
    Some(TickSpec { first, last, step })
}

/// Returns approximately `count` evenly spaced, human-friendly values in
/// `[start, stop]`.
///
/// If `stop < start` the ticks are returned in descending order.
/// Returns an empty vector when `count` is zero or a bound is not finite, and
/// `[start]` when `start == stop`.
///
/// # Examples
///
/// ```
/// use chartstat_stats::ticks::ticks;
///
/// assert_eq!(ticks(18.0, 92.0, 10), vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
/// assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
/// assert!(ticks(0.0, 10.0, 0).is_empty());
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count) else {
        return vec![];
    };
    if spec.last < spec.first {
        return vec![];
    }

    let n = (spec.last - spec.first) as usize + 1;
    let mut values = (0..n)
        .map(|i| {
            let index = spec.first + i as f64;
            match spec.step {
                Step::Whole(step) => index * step,
                Step::Inverse(inv) => index / inv,
            }
        })
        .collect::<Vec<_>>();
    if reverse {
        values.reverse();
    }
    values
}

/// Returns the signed tick increment for the range, or `None` if the range is
/// degenerate.
///
/// Positive values are the step itself; negative values are the negated
/// inverse of a fractional step.
fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
    tick_spec(start, stop, count).map(|spec| match spec.step {
        Step::Whole(step) => step,
        Step::Inverse(inv) => -inv,
    })
}

/// Extends `[start, stop]` outward so that both bounds are tick values.
///
/// The domain is returned in the same orientation as given. Degenerate
/// domains are returned unchanged.
///
/// # Examples
///
/// ```
/// use chartstat_stats::ticks::nice;
///
/// assert_eq!(nice(0.2, 9.7, 10), (0.0, 10.0));
/// assert_eq!(nice(9.7, 0.2, 10), (10.0, 0.0));
/// assert_eq!(nice(3.0, 3.0, 10), (3.0, 3.0));
/// ```
#[must_use]
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut previous = None;

    for _ in 0..10 {
        let Some(step) = tick_increment(lo, hi, count) else {
            break;
        };
        if previous == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        previous = Some(step);
    }

    if reverse { (hi, lo) } else { (lo, hi) }
}
