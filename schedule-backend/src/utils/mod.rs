pub mod clock;
pub mod validation;
