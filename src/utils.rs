pub mod side;
pub mod string_builder;
