pub mod import;
pub mod show;
