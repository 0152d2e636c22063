mod load;
mod merge;
mod types;

pub use load::LoadedConfig;
pub use merge::Settings;
pub use types::{CompressConfig, DemaskConfig};
