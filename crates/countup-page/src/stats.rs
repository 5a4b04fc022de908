//! The page's concrete counters: hero statistics and pricing.
//!
//! Values and durations mirror the site content: effectiveness percentage
//! (0..99 over 2s), years of duration (0..3 over 1.5s), a currency-formatted
//! main price (2.5s), and brand price ranges declared as "min-max" strings
//! (2s each).

use anyhow::{bail, Context, Result};
use countup_core::{AnimationTime, CountTarget, CounterDef, CounterKind, DisplayFormat};

pub const SLOT_EFFECTIVENESS: &str = "hero.effectiveness";
pub const SLOT_YEARS: &str = "hero.years";
pub const SLOT_MAIN_PRICE: &str = "pricing.main";

fn ms(v: f64) -> AnimationTime {
    AnimationTime::from_nanos((v * 1_000_000.0) as u64)
}

/// Counters of the hero statistics section.
pub fn hero_counters() -> Vec<CounterDef> {
    vec![
        CounterDef {
            name: "effectiveness".into(),
            slot: SLOT_EFFECTIVENESS.into(),
            kind: CounterKind::Value(CountTarget::rising(99.0)),
            duration: ms(2000.0),
            format: DisplayFormat::Plain,
        },
        CounterDef {
            name: "years".into(),
            slot: SLOT_YEARS.into(),
            kind: CounterKind::Value(CountTarget::rising(3.0)),
            duration: ms(1500.0),
            format: DisplayFormat::Plain,
        },
    ]
}

/// The main price counter, "$<grouped> ARS".
pub fn main_price_counter(target: i64) -> CounterDef {
    CounterDef {
        name: "main-price".into(),
        slot: SLOT_MAIN_PRICE.into(),
        kind: CounterKind::Value(CountTarget::rising(target as f64)),
        duration: ms(2500.0),
        format: DisplayFormat::currency("$", " ARS"),
    }
}

/// A brand price-range counter from its declared "min-max" attribute form,
/// rendered as "$<min> - $<max>" with thousands grouping.
pub fn brand_range_counter(slot: &str, range: &str) -> Result<CounterDef> {
    let (min, max) = parse_range(range)?;
    Ok(CounterDef {
        name: format!("brand-range:{slot}"),
        slot: slot.to_string(),
        kind: CounterKind::Range {
            min: CountTarget::rising(min),
            max: CountTarget::rising(max),
        },
        duration: ms(2000.0),
        format: DisplayFormat::currency("$", ""),
    })
}

/// Parse the "5000-10000" attribute form.
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let Some((lo, hi)) = range.split_once('-') else {
        bail!("range '{range}' is not of the form 'min-max'");
    };
    let min: f64 = lo
        .trim()
        .parse()
        .with_context(|| format!("bad range minimum in '{range}'"))?;
    let max: f64 = hi
        .trim()
        .parse()
        .with_context(|| format!("bad range maximum in '{range}'"))?;
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attribute_form() {
        assert_eq!(parse_range("5000-10000").unwrap(), (5000.0, 10000.0));
        assert_eq!(parse_range("100 - 200").unwrap(), (100.0, 200.0));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(parse_range("5000").is_err());
        assert!(parse_range("a-b").is_err());
    }

    #[test]
    fn hero_counters_validate() {
        for def in hero_counters() {
            def.validate().unwrap();
        }
        main_price_counter(1299).validate().unwrap();
        brand_range_counter("pricing.brand.acme", "5000-10000")
            .unwrap()
            .validate()
            .unwrap();
    }
}
