//! Note card presentation state.
//!
//! # Responsibility
//! - Model the expand/collapse toggle of one note card.
//! - Expose the display line cap the rendering layer measures against.
//!
//! Line measurement itself belongs to the renderer; core only consumes the
//! measured values.

pub mod state;
