//! Dovetail computes the layout of hand-cut dovetail joints.
//!
//! The core is [`solve()`], a pure function from a [`JointCfg`] to the
//! marking coordinates of every pin and tail along the board edge.
//!
//! ```
//! use dovetail::{solve, JointCfg};
//!
//! let geo = solve(&JointCfg::new());
//! assert_eq!(geo.pin_points.len(), geo.tail_points.len() + 1);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::{cfg::*, layout::*, unit::*};

mod cfg;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod layout;
pub mod marking;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
mod unit;
