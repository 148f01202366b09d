mod event_settings;
mod jamaat;
mod participant;
mod region;

pub use event_settings::*;
pub use jamaat::*;
pub use participant::*;
pub use region::*;
