//! same-frame - HeaderDescriptor and canonical on-air header serialization
//!
//! This crate owns the structured description of a SAME header
//! ([`header::HeaderDescriptor`]) and the one-shot routine that renders it
//! into the byte sequence specified by 47 CFR §11.31
//! ([`serialize::serialize`]).

pub mod error;
pub mod header;
pub mod serialize;

pub use error::{FrameError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{FrameError, Result},
        header::{HeaderDescriptor, LocationCode, LocationList},
        serialize::serialize,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = 2 + 2;
        assert_eq!(result, 4);
    }
}
