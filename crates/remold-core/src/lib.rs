//! Remold Core - declarative JSON-to-JSON transformation engine
//!
//! This crate implements the transformation engine behind Remold: a closed
//! catalog of typed transformation steps that restructure a JSON document,
//! addressed by dotted paths and combined with a small condition sub-language
//! for branching.
//!
//! # Main Components
//!
//! - **Transformation Model**: the tagged sum type of the thirteen step kinds
//!   and the condition grammar (`types`)
//! - **Path Resolver**: dotted/indexed/wildcard path parsing and scope
//!   selection (`engine::path`)
//! - **Catalog**: the pure per-kind functions (`engine::ops`)
//! - **Dispatcher**: validation, deep copy, and the ordered step fold
//!   (`engine`)
//! - **Validator**: decode-with-errors shape checking of configuration
//!   documents (`validator`)
//!
//! # Example
//!
//! ```
//! use remold_core::transform;
//! use serde_json::json;
//!
//! # fn example() -> remold_core::Result<()> {
//! let input = json!({"person": {"firstName": "John"}});
//! let config = json!({
//!     "transformations": [
//!         {"type": "rename", "path": ".person", "source": "firstName", "target": "givenName"}
//!     ]
//! });
//!
//! let output = transform(&input, &config)?;
//! assert_eq!(output["person"]["givenName"], "John");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod types;
pub mod validator;

// Re-export the main surface for convenience
pub use engine::{apply, transform, transform_decoded};
pub use error::{Error, Result};
pub use types::{
    Condition, ConditionOperator, Operand, TextModification, TransformSet, Transformation,
};
pub use validator::{decode_config, decode_config_str, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
