//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Greeting returned by the root endpoint
pub const GREETING_MESSAGE: &str = "Hello, World!";

// =============================================================================
// Database
// =============================================================================

/// Default pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Email used by the `lookup` command when none is given
pub const DEFAULT_LOOKUP_EMAIL: &str = "varun@gmail.com";
