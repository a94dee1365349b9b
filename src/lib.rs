//! Terminal quiz on conversation psychology.
//!
//! Five AI-generated multiple-choice scenarios, an AI-written verdict
//! with a personality archetype, and a funnel to the companion e-books.
//! The core is a pure state-machine reducer over one session object;
//! question generation and performance analysis are delegated to a
//! content provider (Gemini) behind a trait, one round trip each.

pub mod clipboard;
pub mod config;
pub mod funnel;
pub mod logging;
pub mod provider;
pub mod quiz;
pub mod share;
pub mod ui;
