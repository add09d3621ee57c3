//! Property-based invariant tests for the frame sequencer.
//!
//! 1. Frames always have `width * height` opaque pixels drawn from the wheel.
//! 2. Phases stay inside their windows for any step.
//! 3. Extrema always bracket zero by at least the epsilon floor, and under the
//!    persist policy they only widen.
//! 4. Palette lookup accepts any integer.
//! 5. Mode 3 frames are uniform.
//! 6. On the fixed-point backend, any finite steps and offset render without
//!    overflow and keep both phases inside their windows.

use huenoise_fx::{
    EXTREMA_EPSILON, ExtremaPolicy, FrameSequencer, HUE_COUNT, HUES, HueMode, HuePalette,
    SequencerConfig,
};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = SequencerConfig> {
    (
        0.01f64..2.0,
        -4.0f64..4.0,
        1.0f64..1024.0,
        -0.5f64..0.5,
        -1.0f64..1.0,
        1u32..=3,
        any::<bool>(),
    )
        .prop_map(|(xy_scale, z_step, z_depth, hue_step, hue_offset, mode, reset)| {
            SequencerConfig {
                xy_scale,
                z_step,
                z_depth,
                hue_step,
                hue_offset,
                mode,
                extrema: if reset {
                    ExtremaPolicy::ResetEachFrame
                } else {
                    ExtremaPolicy::Persist
                },
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn frames_are_complete_and_on_the_wheel(
        width in 1u32..12,
        height in 1u32..12,
        config in config_strategy(),
    ) {
        let mut seq = FrameSequencer::new(width, height, config).expect("valid");
        for frame in seq.frames().take(3) {
            prop_assert_eq!(frame.pixels().len(), (width * height) as usize);
            prop_assert!(frame.pixels().iter().all(|c| HUES.contains(c)));
        }
    }

    #[test]
    fn phases_stay_in_window(config in config_strategy(), frames in 1usize..24) {
        let depth = config.z_depth;
        let mut seq = FrameSequencer::new(2, 2, config).expect("valid");
        for _ in 0..frames {
            seq.next_frame();
            let state = seq.state();
            prop_assert!(state.z_state >= 0.0 && state.z_state < depth);
            prop_assert!(state.hue_state >= 0.0 && state.hue_state < 1.0);
        }
    }

    #[test]
    fn extrema_bracket_zero_and_persist_only_widens(config in config_strategy()) {
        let persist = config.extrema == ExtremaPolicy::Persist;
        let mut seq = FrameSequencer::new(6, 4, config).expect("valid");
        let mut previous = (seq.state().min, seq.state().max);
        for _ in 0..4 {
            seq.next_frame();
            let state = seq.state();
            prop_assert!(state.min <= -EXTREMA_EPSILON);
            prop_assert!(state.max >= EXTREMA_EPSILON);
            if persist {
                prop_assert!(state.min <= previous.0 && state.max >= previous.1);
            }
            previous = (state.min, state.max);
        }
    }

    #[test]
    fn palette_accepts_any_index(hue in any::<i64>()) {
        let index = HuePalette::index(hue);
        prop_assert!(index < HUE_COUNT);
        prop_assert_eq!(HuePalette::color(hue), HUES[index]);
        if let Some(previous_turn) = hue.checked_sub(90) {
            prop_assert_eq!(HuePalette::color(hue), HuePalette::color(previous_turn));
        }
    }

    #[test]
    fn phase_only_frames_are_uniform(config in config_strategy()) {
        let config = config.with_mode(HueMode::PhaseOnly);
        let mut seq = FrameSequencer::new(5, 3, config).expect("valid");
        for frame in seq.frames().take(3) {
            prop_assert!(frame.is_uniform());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Fixed-point backend under extreme steps
// ═════════════════════════════════════════════════════════════════════════

#[cfg(feature = "fixed-point")]
fn wide_config_strategy() -> impl Strategy<Value = SequencerConfig> {
    (
        0.01f64..2.0,
        -1e12f64..1e12,
        1.0f64..1024.0,
        -1e12f64..1e12,
        -1e12f64..1e12,
        1u32..=3,
    )
        .prop_map(|(xy_scale, z_step, z_depth, hue_step, hue_offset, mode)| {
            SequencerConfig {
                xy_scale,
                z_step,
                z_depth,
                hue_step,
                hue_offset,
                mode,
                ..SequencerConfig::default()
            }
        })
}

#[cfg(feature = "fixed-point")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fixed_point_survives_extreme_steps(config in wide_config_strategy(), frames in 1usize..16) {
        use huenoise_scalar::{Fx, NoiseScalar};

        prop_assert!(config.validate().is_ok());
        let mut seq = FrameSequencer::<Fx>::with_backend(3, 2, config).expect("valid");
        for frame in seq.frames().take(frames) {
            prop_assert!(frame.pixels().iter().all(|c| HUES.contains(c)));
        }
        let state = seq.state();
        let z_state = NoiseScalar::to_f64(state.z_state);
        let hue_state = NoiseScalar::to_f64(state.hue_state);
        prop_assert!(z_state >= 0.0 && z_state < NoiseScalar::to_f64(state.z_depth));
        prop_assert!((0.0..1.0).contains(&hue_state));
    }
}
