//! Sampling: map normalized run progress to the formatted display string.
//!
//! Model:
//! - `u` is normalized progress in [0, 1] over the counter's duration.
//! - The eased value is floored while in flight, so the display never
//!   overshoots the target and then corrects.
//! - At `u >= 1` the exact end value is rendered, not the eased
//!   approximation, so floating-point error can never leave the final
//!   display one unit off.
//! - Range counters apply the same eased factor to both bounds
//!   independently, each floored.

use crate::counter::{CountTarget, CounterDef, CounterKind};
use crate::easing::{ease_out_quart, lerp_f64};

/// Sample one bound at eased progress.
#[inline]
fn sample_target(target: &CountTarget, eased: f64, done: bool) -> i64 {
    if done {
        target.end.floor() as i64
    } else {
        lerp_f64(target.start, target.end, eased).floor() as i64
    }
}

/// Render a counter at normalized progress `u` in [0, 1].
pub fn sample_counter(def: &CounterDef, u: f64) -> String {
    let u = u.clamp(0.0, 1.0);
    let done = u >= 1.0;
    let eased = ease_out_quart(u);
    match &def.kind {
        CounterKind::Value(target) => def.format.format(sample_target(target, eased, done)),
        CounterKind::Range { min, max } => {
            let lo = sample_target(min, eased, done);
            let hi = sample_target(max, eased, done);
            // Plain hyphen separator, matching the rendered page text.
            format!("{} - {}", def.format.format(lo), def.format.format(hi))
        }
    }
}
