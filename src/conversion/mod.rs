pub mod form;
pub mod normalize;
