pub mod constant;
pub mod pda;
pub mod serialization;
pub mod utils;

pub use constant::*;
pub use pda::*;
pub use serialization::*;
pub use utils::*;
