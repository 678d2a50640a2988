mod case;
mod codec;
pub mod json;
mod layout;
pub mod markup;
mod registry;
mod transform;
mod whitespace;

pub use case::{snake_tokens, CamelCase, Lowercase, SnakeCase, TitleCase, Uppercase};
pub use codec::{Base64Decoder, Base64Encoder};
pub use layout::{Beautifier, Minifier};
pub use registry::{TransformManager, TransformRegistry};
pub use transform::Transform;
pub use whitespace::{
    collapse_whitespace, is_space, trim_space, CollapseWhitespace, NON_SPACE_CLASS, SPACE_CLASS,
};
