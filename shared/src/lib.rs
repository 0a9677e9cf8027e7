//! Core of the dream reactions picker
//!
//! Gesture classification, radial sector hit-testing and the wiring a hosting
//! screen needs to drive the reaction wheel, plus shared configuration.

pub mod chrome;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod picker;
pub mod reactions;
pub mod selector;
pub mod surface;

pub use chrome::{ChromeGuard, ChromeSettings, SharedChrome, TouchAction, ViewportChrome};
pub use config::{
    config_dir, config_path, delete_config, load_config, save_config, ConfigError, PickerConfig,
};
pub use geometry::{Anchor, Point, Rect};
pub use gesture::{
    primary_position, GestureDetector, GestureEvent, GesturePhase, PointerSample, PointerSource,
};
pub use layout::{OptionSlot, WheelLayout};
pub use picker::{PickerCall, PickerError, PickerPhase, ReactionPicker, ReactionSink};
pub use reactions::{default_reactions, find_reaction, ReactionOption};
pub use selector::{HoverChange, HoverTracker, RadialSelector, SectorHit};
pub use surface::{ReactionSurface, SurfaceEvent};
