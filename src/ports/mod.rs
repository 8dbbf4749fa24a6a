//! Ports (trait boundaries) between the training loop and its collaborators.
//!
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by agents and observers.

pub mod learner;
pub mod observer;

pub use learner::Learner;
pub use observer::Observer;
