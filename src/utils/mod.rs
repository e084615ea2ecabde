pub mod string;
pub mod table;
pub mod loader;
