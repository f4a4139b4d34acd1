pub mod contrast;
pub mod finder;
