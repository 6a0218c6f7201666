//! Static portfolio content.
//!
//! Everything the UI shows lives in these tables. There is no backend and no
//! persistence; filtering is a linear scan over the static slices.

pub mod blog;
pub mod expertise;
pub mod projects;
pub mod technologies;

pub use blog::BlogPost;
pub use expertise::{ExpertiseArea, WalkthroughStep};
pub use projects::Project;
pub use technologies::{Certification, TechGroup};
