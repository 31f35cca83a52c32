pub mod config;
pub mod error;
pub mod power;
pub mod summary;

#[cfg(feature = "python")]
mod py;

pub use config::{load_cfg, save_cfg, ImportCfg};
pub use error::PowerError;
pub use power::{PowerSummary, Watts};
pub use summary::{MinMaxAvg, SummaryData};
