pub mod form;
pub mod input;
pub mod render;
pub mod roster;
