//! The crate's most used items, for glob import:
//!
//! ```
//! use threefold::prelude::*;
//! ```

pub use crate::error::UnderflowError;
pub use crate::list::List;
pub use crate::list::ListShape;
pub use crate::ops::Iterative;
pub use crate::ops::ListOps;
pub use crate::ops::Recursive;
pub use crate::ops::TailRecursive;
