//! Mathematical kernels: the NFW enclosed-mass fitting function and the
//! mean/critical density ratio.

pub mod density;
pub mod nfw;

pub use density::*;
pub use nfw::*;
