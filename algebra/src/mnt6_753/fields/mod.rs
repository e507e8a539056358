pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

pub mod fq3;
pub use self::fq3::*;

#[cfg(test)]
mod tests;
