pub mod find;
pub mod root;
