//! Area picking: scan scene objects against a rubber-band frustum

pub mod candidate;
pub mod config;
pub mod picker;
pub mod rect;
pub mod watch;

pub use candidate::PickCandidate;
pub use config::PickConfig;
pub use picker::{AreaPickResult, AreaPicker, PickedObject};
pub use rect::PickRect;
pub use watch::{PickWatcher, WatchList};
