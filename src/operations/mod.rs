pub mod creation;
pub mod faces;
pub mod planarize;
