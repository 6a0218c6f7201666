//! Snap-scroll panel carousel.
//!
//! One parametrized controller drives every carousel in the app: the
//! full-viewport story panels and the fixed-width preview cards on the home
//! page, and the filtered project showcase. The controller owns a discrete
//! current-panel index, reconciles it with a continuously scrollable offset,
//! and runs an optional auto-advance cycle that pauses on user interaction.
//!
//! - `controller` - index/offset reconciliation, timers, navigation
//! - `motion` - eased offset glides between panels
//! - `easing` - curve application for the config-level `Easing` enum
//! - `swipe` - horizontal drag gesture tracking

pub mod controller;
pub mod easing;
pub mod motion;
pub mod swipe;

pub use controller::{Direction, PanelCarousel, Sizing};
pub use motion::OffsetAnimator;
pub use swipe::SwipeTracker;
