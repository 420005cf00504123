//! Terminal presentation: design tokens, capability detection and the
//! catalog tree widget.

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
