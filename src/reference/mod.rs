pub mod fetch;
pub mod parse;
