//! Emotion reflection logger
//!
//! A form for recording an emotional state (category, intensity, stimulus,
//! a reflective answer and a planned action) that composes a reflection
//! sentence from those inputs and hands finished records to a sink.

pub mod config;
pub mod form;
pub mod logging;
pub mod protocol;
pub mod reflection;
pub mod render;
pub mod session;
pub mod sink;
pub mod taxonomy;
