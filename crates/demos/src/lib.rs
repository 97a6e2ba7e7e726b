//! Demo programs for trellis.

/// Crossterm session and event loop.
pub mod backend;
/// Focus gym layout.
pub mod focusgym;

#[cfg(test)]
mod tests;
