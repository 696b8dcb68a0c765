use leptos::*;

use crate::{
    application::{
        ProjectionChart,
        projection_chart::{OPTIMISTIC_GREEN, PESSIMISTIC_AMBER, RISK_RED},
    },
    domain::{
        logging::LogComponent,
        projection::{AnimationDriver, ChartConfig, SweepCycle},
    },
    infrastructure::{FrameLoop, detect_motion_preference},
    log_error, log_info,
};

pub const ARIA_LABEL: &str = "Animated projection chart (optimistic and pessimistic scenarios)";

const CHART_CSS: &str = r#"
.fc-hero-projection {
    width: 100%;
    height: 100%;
}

.fc-line-draw {
    stroke-dasharray: 1;
    stroke-dashoffset: 1;
    animation: fc-line-draw 1.6s cubic-bezier(0.22, 1, 0.36, 1) forwards;
}

.fc-line-draw--delay {
    animation-delay: 0.15s;
}

@keyframes fc-line-draw {
    to { stroke-dashoffset: 0; }
}

@media (prefers-reduced-motion: reduce) {
    .fc-line-draw {
        animation: none;
        stroke-dashoffset: 0;
    }
}
"#;

/// Use the caller's config when it validates, the landing defaults otherwise
fn resolve_config(config: Option<ChartConfig>) -> ChartConfig {
    match config {
        Some(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log_error!(
                    LogComponent::Presentation("HeroProjectionChart"),
                    "❌ {}; falling back to defaults",
                    e
                );
                ChartConfig::default()
            }
        },
        None => ChartConfig::default(),
    }
}

/// 📈 Decorative cash-flow projection with a sweeping cursor.
///
/// Series, paths and the risk band are built once per mount. Only the cursor
/// and the reveal clip change per frame, driven by a [`FrameLoop`] that is
/// cancelled on cleanup. Under reduced motion no loop is started.
#[component]
pub fn HeroProjectionChart(
    /// Extra CSS class for the `<svg>` element
    #[prop(optional, into)]
    class: Option<String>,
    /// Geometry and timing, defaults to the landing page values
    #[prop(optional_no_strip)]
    config: Option<ChartConfig>,
) -> impl IntoView {
    let config = resolve_config(config);
    let chart = ProjectionChart::build(&config);
    let motion = detect_motion_preference();
    let mut driver = AnimationDriver::new(SweepCycle::from_config(&config), motion);

    let (frame, set_frame) = create_signal(chart.frame(&driver.state(), driver.reveal_fraction()));

    if driver.is_animated() {
        let track = chart.clone();
        let frame_loop = FrameLoop::start(move |now| {
            let state = driver.tick(now);
            set_frame.set(track.frame(&state, driver.reveal_fraction()));
        });
        on_cleanup(move || frame_loop.cancel());
    } else {
        log_info!(
            LogComponent::Presentation("HeroProjectionChart"),
            "♿ Reduced motion requested, rendering static chart"
        );
    }

    let svg_class = match class.filter(|extra| !extra.trim().is_empty()) {
        Some(extra) => format!("fc-hero-projection {}", extra.trim()),
        None => "fc-hero-projection".to_string(),
    };
    let width = config.width;
    let height = config.height;

    view! {
        <style>{CHART_CSS}</style>
        <svg
            class=svg_class
            viewBox=config.view_box()
            preserveAspectRatio="none"
            role="img"
            aria-label=ARIA_LABEL
        >
            <defs>
                <clipPath id="fcHeroReveal">
                    <rect x="0" y="0" height=height width=move || frame.with(|f| f.reveal_width) />
                </clipPath>

                <linearGradient id="fcHeroOptFill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=OPTIMISTIC_GREEN stop-opacity="0.28" />
                    <stop offset="100%" stop-color=OPTIMISTIC_GREEN stop-opacity="0.02" />
                </linearGradient>
                <linearGradient id="fcHeroPessFill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=PESSIMISTIC_AMBER stop-opacity="0.22" />
                    <stop offset="100%" stop-color=PESSIMISTIC_AMBER stop-opacity="0.02" />
                </linearGradient>
                <linearGradient id="fcHeroDanger" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=RISK_RED stop-opacity="0.22" />
                    <stop offset="100%" stop-color=RISK_RED stop-opacity="0.06" />
                </linearGradient>

                <pattern id="fcHeroGrid" width="28" height="18" patternUnits="userSpaceOnUse">
                    <path
                        d="M 28 0 L 0 0 0 18"
                        fill="none"
                        stroke="rgba(255,255,255,0.10)"
                        stroke-width="1"
                    />
                </pattern>
            </defs>

            // background grid
            <rect x="0" y="0" width=width height=height fill="url(#fcHeroGrid)" opacity="0.18" />

            // risk band over the pessimistic < 0 window
            <rect
                x=chart.band_x
                y="0"
                width=chart.band_width
                height=height
                fill="url(#fcHeroDanger)"
                opacity="0.55"
            />
            <rect
                x=chart.band_x
                y="0"
                width=chart.band_width
                height=height
                fill="none"
                stroke="rgba(239,68,68,0.28)"
                stroke-width="1"
            />

            // zero line
            <line
                x1="0"
                x2=width
                y1=chart.zero_y
                y2=chart.zero_y
                stroke=RISK_RED
                stroke-opacity=move || frame.with(|f| f.zero_line_opacity())
                stroke-width="1"
                stroke-dasharray="4 4"
            />

            <g clip-path="url(#fcHeroReveal)">
                <path d=chart.pessimistic_area.clone() fill="url(#fcHeroPessFill)" />
                <path d=chart.optimistic_area.clone() fill="url(#fcHeroOptFill)" />

                <path
                    d=chart.pessimistic_line.clone()
                    fill="none"
                    stroke=PESSIMISTIC_AMBER
                    stroke-opacity="0.92"
                    stroke-width="2.1"
                    pathLength="1"
                    class="fc-line-draw"
                />
                <path
                    d=chart.optimistic_line.clone()
                    fill="none"
                    stroke=OPTIMISTIC_GREEN
                    stroke-opacity="0.95"
                    stroke-width="2.2"
                    pathLength="1"
                    class="fc-line-draw fc-line-draw--delay"
                />
            </g>

            <Show when=move || frame.with(|f| f.marker_visible())>
                <g class="fc-hero-cursor">
                    <line
                        x1=move || frame.with(|f| f.cursor.x)
                        x2=move || frame.with(|f| f.cursor.x)
                        y1="0"
                        y2=height
                        stroke=move || frame.with(|f| f.guide_stroke())
                        stroke-width="1"
                        opacity=move || frame.with(|f| f.marker_opacity)
                    />
                    <circle
                        cx=move || frame.with(|f| f.cursor.x)
                        cy=move || frame.with(|f| f.cursor.y)
                        r="3.8"
                        fill=move || frame.with(|f| f.marker_color())
                        fill-opacity=move || frame.with(|f| 0.95 * f.marker_opacity)
                    />
                    <circle
                        cx=move || frame.with(|f| f.cursor.x)
                        cy=move || frame.with(|f| f.cursor.y)
                        r="7.2"
                        fill=move || frame.with(|f| f.marker_color())
                        fill-opacity=move || frame.with(|f| f.halo_opacity())
                    />
                </g>
            </Show>
        </svg>
    }
}
