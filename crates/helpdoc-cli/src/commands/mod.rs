pub mod help;
pub mod list;
