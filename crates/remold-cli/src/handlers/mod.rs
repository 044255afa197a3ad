//! Command handlers for the Remold CLI

mod completions;
mod schema;
mod transform;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use schema::handle_schema;
pub use transform::handle_transform;
pub use validate::handle_validate;
