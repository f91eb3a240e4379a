pub mod codebook;
pub use codebook::*;

pub mod item;
pub use item::*;
