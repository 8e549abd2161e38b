pub mod cipher;
pub mod custom;
pub mod hybrid;
pub mod input;
pub mod stats;

pub use cipher::*;
pub use custom::*;
pub use hybrid::*;
pub use input::*;
pub use stats::*;
