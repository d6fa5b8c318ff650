mod chromosome;
mod class;
mod config;
mod department;
mod faculty;
mod gene;
mod ids;
mod input;
mod result;
mod semester;
mod subject;
mod time_slot;

pub use chromosome::*;
pub use class::*;
pub use config::*;
pub use department::*;
pub use faculty::*;
pub use gene::*;
pub use ids::*;
pub use input::*;
pub use result::*;
pub use semester::*;
pub use subject::*;
pub use time_slot::*;
