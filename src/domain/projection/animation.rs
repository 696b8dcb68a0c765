use derive_more::Display;

use super::easing::CubicBezier;
use super::value_objects::ChartConfig;

/// Host accessibility capability, read once at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum MotionPreference {
    #[default]
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "reduced")]
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced { MotionPreference::Reduced } else { MotionPreference::Full }
    }

    pub fn allows_animation(self) -> bool {
        self == MotionPreference::Full
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AnimationPhase {
    /// Marker visible, progress advancing
    #[display(fmt = "sweeping")]
    Sweeping,
    /// Marker hidden, progress held at 1
    #[display(fmt = "gap")]
    Gap,
    /// Reduced motion: the cycle never runs
    #[display(fmt = "static")]
    Static,
}

/// Animation state read by the render path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Sweep position in [0, 1]
    pub progress: f64,
    pub marker_visible: bool,
    pub phase: AnimationPhase,
}

impl AnimationState {
    pub fn initial() -> Self {
        Self { progress: 0.0, marker_visible: true, phase: AnimationPhase::Sweeping }
    }

    pub fn frozen() -> Self {
        Self { progress: 0.0, marker_visible: false, phase: AnimationPhase::Static }
    }
}

/// Sweep followed by a gap, repeating forever
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCycle {
    sweep_ms: f64,
    gap_ms: f64,
}

impl SweepCycle {
    pub fn new(sweep_ms: f64, gap_ms: f64) -> Self {
        Self { sweep_ms: sweep_ms.max(f64::EPSILON), gap_ms: gap_ms.max(0.0) }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.sweep_ms, config.gap_ms)
    }

    pub fn total_ms(&self) -> f64 {
        self.sweep_ms + self.gap_ms
    }

    /// State as a pure function of wall-clock time since the loop started.
    pub fn state_at(&self, elapsed_ms: f64) -> AnimationState {
        let within = elapsed_ms.max(0.0).rem_euclid(self.total_ms());
        if within < self.sweep_ms {
            AnimationState {
                progress: (within / self.sweep_ms).clamp(0.0, 1.0),
                marker_visible: true,
                phase: AnimationPhase::Sweeping,
            }
        } else {
            AnimationState { progress: 1.0, marker_visible: false, phase: AnimationPhase::Gap }
        }
    }
}

/// Clip-rect growth revealing the plotted series after mount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransition {
    pub delay_ms: f64,
    pub duration_ms: f64,
    easing: CubicBezier,
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self { delay_ms: 50.0, duration_ms: 1350.0, easing: CubicBezier::reveal() }
    }
}

impl RevealTransition {
    pub fn new(delay_ms: f64, duration_ms: f64, easing: CubicBezier) -> Self {
        Self { delay_ms, duration_ms, easing }
    }

    /// Revealed share of the chart width in [0, 1]
    pub fn fraction_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.ease((elapsed_ms - self.delay_ms) / self.duration_ms)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.delay_ms + self.duration_ms
    }
}

/// Owns the animation state of one chart instance.
///
/// The frame callback is the only writer: it calls [`AnimationDriver::tick`]
/// with the frame timestamp. The first tick anchors the clock. Under reduced
/// motion the driver never starts and `tick` keeps returning the frozen state.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    cycle: SweepCycle,
    reveal: RevealTransition,
    motion: MotionPreference,
    started_at: Option<f64>,
    state: AnimationState,
    reveal_fraction: f64,
}

impl AnimationDriver {
    pub fn new(cycle: SweepCycle, motion: MotionPreference) -> Self {
        let (state, reveal_fraction) = if motion.allows_animation() {
            (AnimationState::initial(), 0.0)
        } else {
            (AnimationState::frozen(), 1.0)
        };
        Self {
            cycle,
            reveal: RevealTransition::default(),
            motion,
            started_at: None,
            state,
            reveal_fraction,
        }
    }

    pub fn with_reveal(mut self, reveal: RevealTransition) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn is_animated(&self) -> bool {
        self.motion.allows_animation()
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn reveal_fraction(&self) -> f64 {
        self.reveal_fraction
    }

    /// Milliseconds since the first tick, `None` before it
    pub fn elapsed_ms(&self, now_ms: f64) -> Option<f64> {
        self.started_at.map(|start| (now_ms - start).max(0.0))
    }

    /// Advance to the frame timestamp `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> AnimationState {
        if !self.is_animated() {
            return self.state;
        }
        self.started_at.get_or_insert(now_ms);
        let elapsed = self.elapsed_ms(now_ms).unwrap_or_default();

        self.state = self.cycle.state_at(elapsed);
        if self.reveal_fraction < 1.0 {
            self.reveal_fraction = if self.reveal.is_complete(elapsed) {
                1.0
            } else {
                self.reveal.fraction_at(elapsed)
            };
        }
        self.state
    }
}
