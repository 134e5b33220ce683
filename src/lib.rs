#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod ai;
mod common;
mod config;
mod extent;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod snapshot;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use extent::Direction;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use sim::{GameRecord, SimConfig, Summary, CSV_HEADER};
#[cfg(feature = "std")]
pub use ui::*;
