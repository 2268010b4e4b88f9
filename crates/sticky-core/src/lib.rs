pub mod config;
pub mod error;
pub mod haptics;
pub mod interaction;
pub mod presentation;
pub mod toggle;

pub use config::{AppConfig, EasingType, PageConfig};
pub use error::{Error, Result};
pub use haptics::{HapticFeedback, HapticsMode, NoopHaptics};
pub use interaction::{PullDirection, Sample, ScrollVelocity, StickyInteraction, TransitionState};
pub use presentation::{IndicatorEdge, PullIndicator};
pub use toggle::{ContentToggle, TransitionRequest};
