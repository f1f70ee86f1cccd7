//! Per-mode element seeding, force rules and drawing.

pub mod grid;
pub mod particles;
