pub mod course;
pub mod sample;
