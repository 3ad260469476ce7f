//! Scene orchestration.

pub mod scene;
