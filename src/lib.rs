//! Core library for Conway's Game of Life on a fixed-size toroidal grid.

pub mod config;
pub mod enc;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pos;

pub use config::RunConfig;
pub use enc::{GridCodec, PlainText, decode, encode, render};
pub use engine::{GridWindow, LifeEngine, live_neighbors, run, step};
pub use error::FormatError;
pub use grid::{Cell, Grid};
pub use pos::Pos;
