//! Graph playground: text-format graph parser and Prüfer tree decoder

pub mod model;
pub mod parse;
pub mod prufer;

pub use model::{Edge, Graph, IndexStart, ParseOptions};
pub use parse::{ParseError, ParseField, parse};
pub use prufer::{decode, random_code, validate_code};
