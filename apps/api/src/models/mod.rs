pub mod hint;
pub mod profile;
pub mod resume;
