//! BMF End-to-End Test Infrastructure
//!
//! Shared fixtures and checks for the integration tests in `tests/`:
//!
//! - **Fixtures**: sample fonts and temporary font files
//! - **PNG checks**: decode rendered images back to pixels
//! - **Determinism**: repeated runs must produce identical bytes
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bmfont-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod png_check;
