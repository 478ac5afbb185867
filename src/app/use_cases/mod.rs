//! Use-Cases der Application-Layer-Orchestrierung.

pub mod lifecycle;
pub mod location;
pub mod markers;
pub mod onboarding;
pub mod search;
pub mod selection;
pub mod viewport;
