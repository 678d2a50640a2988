//! `santext` is a library to apply text transformations such as JSON or HTML
//! beautifying, case conversions and base64 encoding.
//!
//! The main entry point of this crate is `engine::TransformEngine`, which
//! dispatches a text to the transform registered for an operation and always
//! returns a `TransformResult`, never an error. `stats::TextStats` describes a
//! text and `export::FileExport` saves a result to a file.
//!
//! If you need more control, the transforms themselves live in `transforms`
//! and can be registered into a custom `transforms::TransformRegistry`.
//!
//! "Hello world" example:
//! ```
//! use santext::prelude::*;
//!
//! let result = TransformEngine::new().apply(
//!     "{\"hello\":\"world\"}",
//!     TransformOperation::Beautify,
//!     FormatHint::Json,
//! );
//! assert!(result.is_success());
//! assert_eq!(result.content(), "{\n  \"hello\": \"world\"\n}");
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod format;
pub mod log;
pub mod operation;
pub mod reader;
pub mod stats;
pub mod transforms;
pub mod utils;

pub use engine::apply;

/// The santext prelude
///
/// This module re-exports the most commonly used items from santext.
/// You can use it with `use santext::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::export::FileExport;
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::engine::{TransformEngine, TransformResult};
    pub use crate::error::Result;
    pub use crate::format::FormatHint;
    pub use crate::operation::TransformOperation;
    pub use crate::stats::TextStats;
}
