pub mod counter;
pub mod result;
