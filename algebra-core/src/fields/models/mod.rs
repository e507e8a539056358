pub mod fp;
pub use self::fp::*;

pub mod rules;
pub use self::rules::*;

pub mod ext;
pub use self::ext::*;
