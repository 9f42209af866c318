pub mod bitmap;
pub mod convert;
pub mod error;
pub mod layout;
pub mod palette;
pub mod shp;
