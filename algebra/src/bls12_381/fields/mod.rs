pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

pub mod fq2;
pub use self::fq2::*;

pub mod fq12;
pub use self::fq12::*;

#[cfg(test)]
mod tests;
