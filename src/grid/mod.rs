//! City grid.
//!
//! A [`CityGrid`] owns `n` cities on distinct vertices of an integer
//! `width × height` grid. It is built once, either by random placement
//! from a [`GridConfig`] or from explicit [`Point`]s, and read-only
//! afterwards. Both solvers take it by reference.

mod city_grid;
mod config;
mod types;

pub use city_grid::CityGrid;
pub use config::GridConfig;
pub use types::Point;
