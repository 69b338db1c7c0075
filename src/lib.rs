//! # Introduction
//!
//! algotty traces six classic algorithms (linear, binary and exponential
//! search; bubble, selection and insertion sort) over a small integer array,
//! recording a step for every comparison, swap and milestone. The finished
//! trace is then played back forward and backward through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Algorithm::generate → Trace → Player → TUI
//! ```
//!
//! 1. [`dataset`]: random input arrays (sorted, with a target, for searches).
//! 2. [`algorithms`]: the six step generators and the closed
//!    [`algorithms::Algorithm`] enum that dispatches to them. Generation is
//!    synchronous and pure; invalid input is rejected up front with an
//!    [`algorithms::errors::GeneratorError`].
//! 3. [`step`]: the [`step::Step`] records and the immutable [`step::Trace`].
//! 4. [`playback`]: [`playback::Player`], a cooperative stepper that advances
//!    one step per interval when polled.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] and [`logging`] hold the command-line surface and the tracing
//! setup used by the binary.
//!
//! ## Example
//!
//! ```
//! use algotty::algorithms::Algorithm;
//!
//! let trace = Algorithm::Binary.generate(&[1, 3, 5, 7, 9, 11], Some(7)).unwrap();
//! let last = trace.last().and_then(|step| step.as_search()).unwrap();
//! assert_eq!(last.found_index, Some(3));
//! ```

pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod playback;
pub mod step;
pub mod ui;
