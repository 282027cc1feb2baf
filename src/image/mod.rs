pub mod binary;
pub mod io;

pub use self::binary::{BinaryImage, PixelClass, Sentinels};
