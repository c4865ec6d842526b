pub mod cast;

pub use cast::cast_values;
