//! Infrastructure layer.

pub mod source;

pub use self::source::Source;
#[cfg(feature = "dummy-json")]
pub use self::source::{dummy_json, DummyJson};
