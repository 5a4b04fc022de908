use countup_core::{
    AnimationTime, Config, CountTarget, CounterCommand, CounterDef, CounterEvent, CounterKind,
    DisplayFormat, Engine, Inputs,
};

fn ms(v: f64) -> AnimationTime {
    AnimationTime::from_millis(v).unwrap()
}

fn counter(end: f64, duration_ms: f64, slot: &str) -> CounterDef {
    CounterDef {
        name: slot.to_string(),
        slot: slot.to_string(),
        kind: CounterKind::Value(CountTarget::rising(end)),
        duration: ms(duration_ms),
        format: DisplayFormat::Plain,
    }
}

fn range_counter(min: f64, max: f64, duration_ms: f64, slot: &str) -> CounterDef {
    CounterDef {
        name: slot.to_string(),
        slot: slot.to_string(),
        kind: CounterKind::Range {
            min: CountTarget::rising(min),
            max: CountTarget::rising(max),
        },
        duration: ms(duration_ms),
        format: DisplayFormat::currency("$", ""),
    }
}

/// Drive the engine with a fixed tick until the run list empties,
/// returning the last text written per the given slot.
fn run_to_completion(eng: &mut Engine, tick_ms: f64, slot: &str, max_ticks: usize) -> String {
    let mut last = String::new();
    for _ in 0..max_ticks {
        let out = eng.update(ms(tick_ms), Inputs::default());
        for change in &out.changes {
            if change.slot == slot {
                last = change.text.clone();
            }
        }
        if eng.live_runs() == 0 {
            return last;
        }
    }
    panic!("runs never completed within {max_ticks} ticks");
}

#[test]
fn eased_value_at_half_duration() {
    // start=0, end=99, duration=2000ms, sampled at elapsed=1000ms:
    // progress 0.5, eased 1 - 0.5^4 = 0.9375, floor(99 * 0.9375) = 92.
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(99.0, 2000.0, "hero.effectiveness")).unwrap();
    eng.trigger(id).unwrap();

    let out = eng.update(ms(1000.0), Inputs::default());
    assert_eq!(out.changes.len(), 1);
    assert_eq!(out.changes[0].text, "92");
}

#[test]
fn final_render_is_exact_end_value() {
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(99.0, 2000.0, "hero.effectiveness")).unwrap();
    eng.trigger(id).unwrap();

    // Deliberately awkward tick size so elapsed never lands on the duration.
    let last = run_to_completion(&mut eng, 333.0, "hero.effectiveness", 100);
    assert_eq!(last, "99");
}

#[test]
fn run_retires_on_the_terminal_tick() {
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(3.0, 1500.0, "hero.years")).unwrap();
    eng.trigger(id).unwrap();

    let out = eng.update(ms(1500.0), Inputs::default());
    assert_eq!(out.changes[0].text, "3");
    assert!(matches!(
        out.events.as_slice(),
        [CounterEvent::RunFinished { text, .. }] if text == "3"
    ));
    assert_eq!(eng.live_runs(), 0);

    // Nothing further is emitted once the run is gone.
    let out = eng.update(ms(16.0), Inputs::default());
    assert!(out.is_empty());
}

#[test]
fn displayed_value_never_decreases_for_rising_target() {
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(99.0, 2000.0, "s")).unwrap();
    eng.trigger(id).unwrap();

    let mut last = -1i64;
    while eng.live_runs() > 0 {
        let out = eng.update(ms(16.0), Inputs::default());
        let v: i64 = out.changes[0].text.parse().unwrap();
        assert!(v >= last, "display went backwards: {last} -> {v}");
        last = v;
    }
    assert_eq!(last, 99);
}

#[test]
fn range_counter_completes_with_grouped_bounds() {
    let mut eng = Engine::new(Config::default());
    let id = eng
        .load_counter(range_counter(5000.0, 10000.0, 2000.0, "pricing.brand"))
        .unwrap();
    eng.trigger(id).unwrap();

    let last = run_to_completion(&mut eng, 16.0, "pricing.brand", 200);
    assert_eq!(last, "$5,000 - $10,000");
}

#[test]
fn currency_counter_formats_every_tick() {
    let mut eng = Engine::new(Config::default());
    let id = eng
        .load_counter(CounterDef {
            name: "pricing.main".into(),
            slot: "pricing.main".into(),
            kind: CounterKind::Value(CountTarget::rising(1299.0)),
            duration: ms(2500.0),
            format: DisplayFormat::currency("$", " ARS"),
        })
        .unwrap();
    eng.trigger(id).unwrap();

    while eng.live_runs() > 0 {
        let out = eng.update(ms(100.0), Inputs::default());
        let text = &out.changes[0].text;
        assert!(text.starts_with('$') && text.ends_with(" ARS"), "bad render: {text}");
    }
}

#[test]
fn duplicate_runs_interleave_and_still_end_exact() {
    // The original behavior, preserved behind Restart: two writers racing
    // for one slot. Whichever finishes last must still render the exact
    // target, never an eased intermediate.
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(99.0, 2000.0, "s")).unwrap();

    eng.restart(id).unwrap();
    eng.update(ms(700.0), Inputs::default());
    eng.restart(id).unwrap();

    assert_eq!(eng.live_runs(), 2);

    let mut last = String::new();
    while eng.live_runs() > 0 {
        let out = eng.update(ms(250.0), Inputs::default());
        if let Some(change) = out.changes.last() {
            last = change.text.clone();
        }
    }
    assert_eq!(last, "99");
}

#[test]
fn command_driven_trigger_is_idempotent() {
    let mut eng = Engine::new(Config::default());
    let id = eng.load_counter(counter(99.0, 2000.0, "s")).unwrap();

    let inputs = Inputs {
        commands: vec![
            CounterCommand::Trigger { counter: id },
            CounterCommand::Trigger { counter: id },
        ],
    };
    let out = eng.update(ms(16.0), inputs).clone();
    assert_eq!(eng.live_runs(), 1);
    assert_eq!(
        out.events
            .iter()
            .filter(|e| matches!(e, CounterEvent::RunStarted { .. }))
            .count(),
        1
    );
}

#[test]
fn independent_counters_step_concurrently() {
    let mut eng = Engine::new(Config::default());
    let a = eng.load_counter(counter(99.0, 2000.0, "hero.effectiveness")).unwrap();
    let b = eng.load_counter(counter(3.0, 1500.0, "hero.years")).unwrap();
    eng.trigger(a).unwrap();
    eng.trigger(b).unwrap();

    let out = eng.update(ms(100.0), Inputs::default());
    assert_eq!(out.changes.len(), 2);
    let slots: Vec<&str> = out.changes.iter().map(|c| c.slot.as_str()).collect();
    assert!(slots.contains(&"hero.effectiveness"));
    assert!(slots.contains(&"hero.years"));

    // The shorter run retires first; the longer one keeps stepping.
    eng.update(ms(1400.0), Inputs::default());
    assert_eq!(eng.live_runs(), 1);
}
