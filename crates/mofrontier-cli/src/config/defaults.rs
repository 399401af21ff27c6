use mofrontier::analysis::degeneracy::DEFAULT_TOLERANCE;
use mofrontier::core::models::orbitals::Spin;

pub struct DefaultsConfig {
    pub window_size: usize,
    pub spin: Spin,
    pub degeneracy_tolerance: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            spin: Spin::Alpha,
            degeneracy_tolerance: DEFAULT_TOLERANCE,
        }
    }
}
