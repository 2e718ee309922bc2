//! UI layer for the desktop GUI: the single study screen.

pub mod app;

pub use app::FlashcardsApp;
