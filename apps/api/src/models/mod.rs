pub mod personnel;
pub mod report;
