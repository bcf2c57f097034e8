mod normalize;
mod types;
mod validate;

pub use normalize::{GENERIC_INVALID_MESSAGE, normalize};
pub use types::*;
pub use validate::{NUMERIC_MESSAGE, REQUIRED_MESSAGE, validate_field};
