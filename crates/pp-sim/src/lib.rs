//! `pp-sim` — the coordinator that drives one puck_path run.
//!
//! # Pipeline
//!
//! ```text
//! ① Populate  — nine spots from SPOT_LAYOUT; 1..=max_pucks pucks at random
//!               positions on the board.
//! ② Assign    — each puck, in population order, moves to its nearest free
//!               spot (ties keep the lower path index).
//! ③ Compact   — if any free spot sits above an occupied one, shift the whole
//!               block to the head end of the path and re-seat the pucks.
//! ④ Work      — n times: mark the head puck processed, rotate it to the tail.
//! ```
//!
//! Every stage is a public method so tests can drive the pipeline step by
//! step; [`Coordinator::run`] executes it end to end and reports progress to
//! a [`PathObserver`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pp_core::PathConfig;
//! use pp_sim::{CoordinatorBuilder, NoopObserver};
//!
//! let mut coordinator = CoordinatorBuilder::new(PathConfig::default()).build()?;
//! let summary = coordinator.run(&mut NoopObserver)?;
//! assert_eq!(summary.processed, summary.pucks);
//! ```

pub mod builder;
pub mod coordinator;
pub mod observer;
pub mod summary;


pub use builder::CoordinatorBuilder;
pub use coordinator::Coordinator;
pub use observer::{NoopObserver, PathObserver};
pub use summary::RunSummary;
