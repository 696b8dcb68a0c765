use projection_chart_wasm::domain::projection::{
    AnimationDriver, AnimationPhase, AnimationState, ChartConfig, CubicBezier, MotionPreference,
    RevealTransition, SweepCycle,
};
use quickcheck_macros::quickcheck;

const SWEEP_MS: f64 = 9800.0;
const GAP_MS: f64 = 900.0;
const TOTAL_MS: f64 = SWEEP_MS + GAP_MS;

fn cycle() -> SweepCycle {
    SweepCycle::new(SWEEP_MS, GAP_MS)
}

#[test]
fn cycle_defaults_come_from_config() {
    assert_eq!(SweepCycle::from_config(&ChartConfig::default()), cycle());
    assert_eq!(cycle().total_ms(), TOTAL_MS);
}

#[test]
fn sweep_advances_linearly() {
    let cycle = cycle();
    assert_eq!(cycle.state_at(0.0), AnimationState::initial());

    let half = cycle.state_at(4900.0);
    assert_eq!(half.progress, 0.5);
    assert!(half.marker_visible);
    assert_eq!(half.phase, AnimationPhase::Sweeping);
}

#[test]
fn gap_hides_marker_at_full_progress() {
    let cycle = cycle();
    for elapsed in [SWEEP_MS, SWEEP_MS + 1.0, TOTAL_MS - 1.0] {
        let state = cycle.state_at(elapsed);
        assert_eq!(state.progress, 1.0);
        assert!(!state.marker_visible);
        assert_eq!(state.phase, AnimationPhase::Gap);
    }
}

#[test]
fn later_cycles_repeat_the_first() {
    let cycle = cycle();
    assert_eq!(cycle.state_at(3.0 * TOTAL_MS + 2450.0).progress, 0.25);
    assert_eq!(cycle.state_at(3.0 * TOTAL_MS + 2450.0), cycle.state_at(2450.0));
}

#[quickcheck]
fn progress_stays_in_unit_range(elapsed: u32) -> bool {
    let state = cycle().state_at(elapsed as f64);
    (0.0..=1.0).contains(&state.progress)
}

#[quickcheck]
fn progress_resets_on_cycle_boundary(cycles: u16) -> bool {
    let state = cycle().state_at(cycles as f64 * TOTAL_MS);
    state.progress == 0.0 && state.marker_visible
}

#[quickcheck]
fn progress_is_monotonic_within_a_sweep(cycles: u8, a: u16, b: u16) -> bool {
    let offset = cycles as f64 * TOTAL_MS;
    let (a, b) = (a.min(b) as f64 % SWEEP_MS, a.max(b) as f64 % SWEEP_MS);
    let (a, b) = (a.min(b), a.max(b));
    let cycle = cycle();
    cycle.state_at(offset + a).progress <= cycle.state_at(offset + b).progress
}

#[test]
fn negative_elapsed_is_treated_as_start() {
    assert_eq!(cycle().state_at(-500.0), AnimationState::initial());
}

#[test]
fn driver_anchors_clock_on_first_tick() {
    let mut driver = AnimationDriver::new(cycle(), MotionPreference::Full);
    assert!(driver.is_animated());
    assert_eq!(driver.state(), AnimationState::initial());
    assert_eq!(driver.elapsed_ms(5000.0), None);

    let first = driver.tick(1000.0);
    assert_eq!(first.progress, 0.0);
    assert_eq!(driver.reveal_fraction(), 0.0);

    let later = driver.tick(1000.0 + 4900.0);
    assert_eq!(later.progress, 0.5);
    assert_eq!(driver.elapsed_ms(5900.0), Some(4900.0));
    assert_eq!(driver.reveal_fraction(), 1.0);
}

#[test]
fn driver_frames_never_go_backwards_within_sweep() {
    let mut driver = AnimationDriver::new(cycle(), MotionPreference::Full);
    let mut previous = driver.tick(0.0).progress;
    let mut now = 0.0;
    while now < SWEEP_MS - 16.0 {
        now += 16.7;
        let progress = driver.tick(now).progress;
        assert!(progress >= previous);
        previous = progress;
    }
}

#[test]
fn reduced_motion_freezes_driver() {
    let mut driver = AnimationDriver::new(cycle(), MotionPreference::Reduced);
    assert!(!driver.is_animated());
    assert_eq!(driver.reveal_fraction(), 1.0);

    for now in [0.0, 16.0, 4900.0, SWEEP_MS + 10.0, 5.0 * TOTAL_MS + 3000.0] {
        let state = driver.tick(now);
        assert_eq!(state.progress, 0.0);
        assert!(!state.marker_visible);
        assert_eq!(state.phase, AnimationPhase::Static);
    }
    assert_eq!(driver.elapsed_ms(1000.0), None);
}

#[test]
fn motion_preference_from_flag() {
    assert_eq!(MotionPreference::from_reduced_flag(true), MotionPreference::Reduced);
    assert_eq!(MotionPreference::from_reduced_flag(false), MotionPreference::Full);
    assert_eq!(MotionPreference::default(), MotionPreference::Full);
}

#[test]
fn reveal_waits_for_delay_then_completes() {
    let reveal = RevealTransition::default();
    assert_eq!(reveal.fraction_at(0.0), 0.0);
    assert_eq!(reveal.fraction_at(50.0), 0.0);
    assert!(reveal.fraction_at(400.0) > 0.5);
    assert_eq!(reveal.fraction_at(1400.0), 1.0);
    assert!(reveal.is_complete(1400.0));
    assert!(!reveal.is_complete(1399.0));
}

#[test]
fn linear_reveal_without_duration_is_immediate() {
    let reveal = RevealTransition::new(0.0, 0.0, CubicBezier::linear());
    assert_eq!(reveal.fraction_at(1.0), 1.0);

    let linear = RevealTransition::new(0.0, 1000.0, CubicBezier::linear());
    assert!((linear.fraction_at(250.0) - 0.25).abs() < 1e-5);
}

#[test]
fn driver_reveal_settles_at_full_width() {
    let mut driver = AnimationDriver::new(cycle(), MotionPreference::Full)
        .with_reveal(RevealTransition::new(50.0, 1350.0, CubicBezier::linear()));

    driver.tick(0.0);
    driver.tick(725.0);
    assert!((driver.reveal_fraction() - 0.5).abs() < 1e-5);

    driver.tick(1400.0);
    assert_eq!(driver.reveal_fraction(), 1.0);
    driver.tick(3.0 * TOTAL_MS);
    assert_eq!(driver.reveal_fraction(), 1.0);
}
