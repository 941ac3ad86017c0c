//! Threat signature database.
//!
//! A signature is a named rule: one or more regex patterns plus a
//! severity weight. The store loads signatures from a JSON document at
//! engine construction and is immutable afterward.
//!
//! # Database format
//!
//! ```json
//! {
//!   "threat_signatures": [
//!     {
//!       "id": "jb-dan-001",
//!       "category": "jailbreak",
//!       "patterns": ["(?i)dan\\s+mode", "(?i)do\\s+anything\\s+now"],
//!       "severity_modifier": 3.5
//!     }
//!   ]
//! }
//! ```
//!
//! # Load discipline
//!
//! | Constructor        | Missing/bad file      | Bad record | Bad pattern |
//! |--------------------|-----------------------|------------|-------------|
//! | `from_file`        | empty store (warn)    | skip       | skip        |
//! | `from_file_strict` | error                 | skip       | skip        |
//! | `builtin`          | n/a (compiled in)     | n/a        | n/a         |

mod builtin;
mod record;
mod store;

pub use builtin::{BuiltinSignature, BUILTIN_SIGNATURES};
pub use record::{CompiledSignature, ThreatSignature};
pub use store::SignatureStore;
