pub mod degeneracy;
pub mod extract;
pub mod inspect;
