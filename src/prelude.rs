pub use crate::fancy::ConversionTrait;
pub use crate::magnification::MagnificationTrait;
