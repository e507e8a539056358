pub mod g1;
pub mod g2;

pub use self::{g1::G1Affine, g2::G2Affine};

#[cfg(test)]
mod tests;

/// `a` of the G1 equation.
pub const COEFF_A: u64 = 2;
