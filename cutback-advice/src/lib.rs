//! cutback-advice: turns a sampled recommendation into monthly savings advice

pub mod advice;
pub mod fmt;
pub mod render;

pub use advice::{Advice, AdviceLine, EssentialLine, DEFAULT_HORIZON_MONTHS};
pub use render::{render_json, render_text};
