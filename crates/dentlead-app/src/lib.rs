pub mod error;
pub mod form;
pub mod inference;
pub mod intake;
pub mod selector;
