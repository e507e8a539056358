pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

#[cfg(test)]
mod tests;
