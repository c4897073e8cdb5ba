//! Zeeman splitting of atomic and electronic levels.

use crate::constants::{BOHR_MAGNETON, ELECTRON_MASS, ELEMENTARY_CHARGE};
use crate::math::{RVec, Scalar};

/// Namespace for closed-form solid-state energy formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidState;

impl SolidState {
    /// Zeeman energy E₀ + e/(2mₑ) (g_l L + g_s S) B for orbital quantum
    /// number `l` and spin `s` in field `b` (T).
    #[must_use]
    pub fn energy_zeeman(
        gl: Scalar,
        l: Scalar,
        gs: Scalar,
        s: Scalar,
        b: Scalar,
        e_offset: Scalar,
    ) -> Scalar {
        e_offset + ELEMENTARY_CHARGE / 2.0 / ELECTRON_MASS * (gl * l + gs * s) * b
    }

    /// Zeeman energy E₀ + μ_B m_s g_e B for spin projection `ms` and
    /// effective g-factor `ge` in field `b` (T).
    #[must_use]
    pub fn energy_zeeman_simple(ms: Scalar, ge: Scalar, b: Scalar, e_offset: Scalar) -> Scalar {
        e_offset + BOHR_MAGNETON * ms * ge * b
    }

    /// [`SolidState::energy_zeeman`] over a field sweep.
    #[must_use]
    pub fn energy_zeeman_sweep(
        gl: Scalar,
        l: Scalar,
        gs: Scalar,
        s: Scalar,
        fields: &RVec,
        e_offset: Scalar,
    ) -> RVec {
        fields.map(|b| Self::energy_zeeman(gl, l, gs, s, b, e_offset))
    }

    /// [`SolidState::energy_zeeman_simple`] over a field sweep.
    #[must_use]
    pub fn energy_zeeman_simple_sweep(
        ms: Scalar,
        ge: Scalar,
        fields: &RVec,
        e_offset: Scalar,
    ) -> RVec {
        fields.map(|b| Self::energy_zeeman_simple(ms, ge, b, e_offset))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::sweep::linspace;

    #[test]
    fn zero_field_returns_offset() {
        assert_eq!(SolidState::energy_zeeman(1.0, 1.0, 2.0, 0.5, 0.0, 3.0), 3.0);
        assert_eq!(SolidState::energy_zeeman_simple(1.0, 2.0, 0.0, -1.0), -1.0);
    }

    #[test]
    fn simple_form_is_bohr_magneton_per_tesla() {
        let e = SolidState::energy_zeeman_simple(0.5, 2.0, 1.0, 0.0);
        assert_relative_eq!(e, BOHR_MAGNETON, max_relative = 1e-12);
    }

    #[test]
    fn full_form_combines_orbital_and_spin() {
        let orbital = SolidState::energy_zeeman(1.0, 1.0, 2.0, 0.0, 0.5, 0.0);
        let spin = SolidState::energy_zeeman(1.0, 0.0, 2.0, 0.5, 0.5, 0.0);
        let both = SolidState::energy_zeeman(1.0, 1.0, 2.0, 0.5, 0.5, 0.0);
        assert_relative_eq!(both, orbital + spin, max_relative = 1e-12);
    }

    #[test]
    fn sweeps_are_linear_in_field() {
        let fields = linspace(0.0, 1.0, 1001);
        let e = SolidState::energy_zeeman_sweep(1.0, 0.0, 2.0, 0.5, &fields, 0.0);
        let slope = ELEMENTARY_CHARGE / 2.0 / ELECTRON_MASS;
        assert_eq!(e.len(), 1001);
        assert_eq!(e[0], 0.0);
        assert_relative_eq!(e[1000], slope, max_relative = 1e-12);
        assert_relative_eq!(e[500], slope / 2.0, max_relative = 1e-12);

        let simple = SolidState::energy_zeeman_simple_sweep(-0.5, 2.0, &fields, 1e-23);
        assert_relative_eq!(simple[1000], 1e-23 - BOHR_MAGNETON, max_relative = 1e-12);
    }
}
