//! tabjump
//!
//! Terminal tab switcher: lists the host's open tabs in a filterable popup,
//! then activates or closes them through a tab registry.
//!
//! Pure core (`model`, `state`) with an impure shell (`host`, `view`).

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
