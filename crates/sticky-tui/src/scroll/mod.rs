//! Animation system for the sticky transition host
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, bouncy)
//! - `timing` - Time calculation utilities (progress, interpolation, rows)
//! - `config` - Duration helpers over the core configuration
//!
//! ## L3 Molecular Layer
//! - `animation` - Spring-back and swap controllers combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use sticky_tui::scroll::{SpringBack, SwapAnimator};
//!
//! let mut spring = SpringBack::new(config.transition.spring_back_duration());
//! spring.start(settled_offset, Instant::now());
//!
//! // In main loop, update each frame and feed the offset back
//! let offset = spring.update(Instant::now());
//! toggle.handle_offset(offset);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{SpringBack, SwapAnimator, SwapFrame};
pub use config::UiConfigExt;
pub use easing::{EasingType, EasingTypeExt};
