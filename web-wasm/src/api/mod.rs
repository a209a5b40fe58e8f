//! 外部API連携

pub mod pexels;

pub use pexels::PexelsClient;
