pub mod dashboard;
pub mod lookups;
pub mod participants;
pub mod settings;
