//! Single test binary entry point.
//!
//! All tests are consolidated into one binary to keep linking overhead down.
//!
//! Structure:
//! - helpers: Rigs, recording sources and log capture shared by every test
//! - integration: Multi-component gesture flows over a headless source
//! - unit: Single-component unit tests
