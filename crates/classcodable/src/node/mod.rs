mod declaration;
mod field;
mod marker;
mod member;

pub use self::declaration::*;
pub use self::field::*;
pub use self::marker::*;
pub use self::member::*;
