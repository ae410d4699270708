pub mod current;
pub mod extractor;
pub mod patcher;
pub mod resolver;
