pub mod abstract_factory;
pub mod builder;
pub mod engine;
pub mod factory;
pub mod prototype;
pub mod registry;
pub mod solid;

pub use crate::domain::model::{PlaygroundContext, PlaygroundSettings};
pub use crate::domain::ports::{Playground, Storage};
pub use crate::utils::error::Result;
