//! `mvq_session`
//!
//! Headless calculator session built on `mvq_kernel`:
//! - Operand registers A, B and result C, one value per kind each
//! - Mode snapshot from the kinds of A and B, and dispatch to the kernel
//! - Four-slot memory stores per storable kind
//! - Toolbar actions (zero, identity, unitize, length, conversions, copy)
//! - Scrollback log with worked steps

pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod explain;
pub mod memory;
pub mod mode;
pub mod operand;
pub mod scrollback;

pub use calculator::Calculator;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::calculator::*;
    pub use crate::config::*;
    pub use crate::dispatch::*;
    pub use crate::error::*;
    pub use crate::memory::*;
    pub use crate::mode::*;
    pub use crate::operand::*;
}
