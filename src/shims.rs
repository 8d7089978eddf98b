#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(any(feature = "std", docsrs))]
extern crate std;

#[cfg(not(feature = "std"))]
pub use alloc::{
    format,
    string::{String, ToString},
};
#[cfg(any(docsrs, feature = "std"))]
pub use std::{
    error::Error,
    format,
    string::{String, ToString},
};

#[cfg(all(not(feature = "std"), feature = "error_in_core"))]
pub use core::error::Error;
