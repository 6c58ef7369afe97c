#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use itc_core as conversion;

#[doc(inline)]
pub use itc_elastix as elastix;

#[doc(inline)]
pub use itc_transform as transform;
