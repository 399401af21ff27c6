//! Unit conversion factors used when decoding formatted checkpoint files.
//!
//! Formatted checkpoint files store everything in atomic units. The decoder
//! converts lengths to Ångström, energies to electronvolts and dipoles to
//! Debye while reading, so the factors here are applied exactly once.

/// Bohr radius in Ångström.
pub const BOHR_TO_ANGSTROM: f64 = 0.529177;

/// Hartree in electronvolts.
pub const HARTREE_TO_EV: f64 = 27.2114;

/// Atomic unit of electric dipole moment in Debye.
pub const AU_TO_DEBYE: f64 = 2.541746473;

/// Rounds `value` to `decimals` places. Ties go to the even neighbour, so
/// `-5.125` rounds to `-5.12` at two places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_decimals() {
        assert_eq!(round_to(-10.123456, 4), -10.1235);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn round_to_breaks_ties_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-5.125, 2), -5.12);
        assert_eq!(round_to(0.03125, 4), 0.0312);
        assert_eq!(round_to(-5.375, 2), -5.38);
    }

    #[test]
    fn bohr_conversion_is_reversible() {
        let bohr = 1.8897;
        let angstrom = bohr * BOHR_TO_ANGSTROM;
        assert!((angstrom / BOHR_TO_ANGSTROM - bohr).abs() < 1e-12);
    }
}
