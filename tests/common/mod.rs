//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Temporary project trees and archive readers
//! - `git_repo.rs` - Temporary git repositories with bare remotes
//! - `mocks.rs` - Scripted `VersionControl` implementation
