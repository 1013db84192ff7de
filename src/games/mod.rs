//! Ready-made game configurations.

pub mod landmarks;
