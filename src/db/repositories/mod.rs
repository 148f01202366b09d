mod event_settings_repository;
mod jamaat_repository;
mod participant_repository;
mod region_repository;

pub use event_settings_repository::EventSettingsRepository;
pub use jamaat_repository::JamaatRepository;
pub use participant_repository::{CategoryCounts, ParticipantRepository};
pub use region_repository::RegionRepository;
