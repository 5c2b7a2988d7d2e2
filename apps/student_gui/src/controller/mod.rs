//! Controller layer: view state, user/backend events, the reducer, and command dispatch.

pub mod events;
pub mod orchestration;
pub mod reducer;
pub mod state;
