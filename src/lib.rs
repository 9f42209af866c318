pub mod ldtgfx;

pub use ldtgfx::convert::convert;
pub use ldtgfx::error::{Error, Result};
