//! Demo data seeding configuration.

use serde::{Deserialize, Serialize};

/// Controls whether the in-memory stores are populated with the demo
/// directory on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to insert the demo employees and bootstrap credentials.
    #[serde(default = "default_true")]
    pub demo_data: bool,
    /// Plaintext secret assigned to every seeded credential. Hashed through
    /// the real hasher before it is stored.
    #[serde(default = "default_demo_secret")]
    pub demo_secret: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_true(),
            demo_secret: default_demo_secret(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_demo_secret() -> String {
    "password".to_string()
}
