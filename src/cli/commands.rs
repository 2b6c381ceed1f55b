pub mod generate;
pub mod serve;

pub use generate::generate_data;
pub use serve::serve;
