//! Command implementations.

pub mod convert;
pub mod inspect;
pub mod validate;

pub use self::convert::{convert, execute_convert};
pub use self::inspect::execute_inspect;
pub use self::validate::{execute_validate, validate_dir};
