//! Testing utilities for Foundation plugins.
//!
//! - [`MockPlatform`] - an in-memory platform that records what is logged
//! - [`LangFixture`] - a mock platform with a bundled and, optionally, an on-disk lang file
//! - Assertions for key sets and log output
//!
//! ## Quick Start
//!
//! ```
//! use foundation_platform::Platform;
//! use foundation_testing::*;
//!
//! let fixture = LangFixture::new("a: Hello\n").with_disk("a: Hi\nc: Extra\n");
//! let platform = fixture.platform();
//!
//! platform.warn("Unknown keys found in lang.yml file: c");
//!
//! assert_warned(&platform, "Unknown keys");
//! assert_keys(fixture.disk_entries().keys().map(String::as_str), &["a", "c"]);
//! ```

pub mod assertions;
pub mod fixture;
pub mod mock;

pub use assertions::*;
pub use fixture::*;
pub use mock::*;
