//! Easing curves for the settle animation.

/// Steepness of the viscous-fluid curve.
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// Maps linear progress in `[0.0, 1.0]` to eased progress in `[0.0, 1.0]`.
///
/// Every curve is monotonic and pins `0.0 -> 0.0` and `1.0 -> 1.0`, so an
/// interpolation between two offsets never leaves the segment between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Fast start that decays like a body moving through a viscous fluid; the
    /// curve platform scrollers use by default.
    #[default]
    ViscousFluid,
    /// Cubic ease-in-out.
    CubicInOut,
}

impl Easing {
    /// Applies the curve to `progress`, clamping the input to `[0.0, 1.0]`.
    pub fn apply(self, progress: f32) -> f32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let eased = match self {
            Easing::Linear => t,
            Easing::ViscousFluid => viscous_fluid_normalized(t),
            Easing::CubicInOut => cubic_in_out(t),
        };
        eased.clamp(0.0, 1.0)
    }
}

fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e, the value reached at the end of the first segment.
        let start = 0.367_879_44_f32;
        let rest = 1.0 - (1.0 - x).exp();
        start + rest * (1.0 - start)
    }
}

fn viscous_fluid_normalized(t: f32) -> f32 {
    viscous_fluid(t) / viscous_fluid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::ViscousFluid, Easing::CubicInOut];

    #[test]
    fn curves_pin_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=200 {
                let value = easing.apply(step as f32 / 200.0);
                assert!(value >= previous, "{easing:?} dipped at step {step}");
                assert!((0.0..=1.0).contains(&value));
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert!((easing.apply(7.0) - 1.0).abs() < 1e-6);
            assert_eq!(easing.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn viscous_fluid_front_loads_motion() {
        assert!(Easing::ViscousFluid.apply(0.25) > Easing::Linear.apply(0.25));
    }
}
