// Operations
mod operations;
pub use operations::*;

// Errors
mod errors;
pub use errors::*;

// Models
mod state;
pub use state::*;

mod members;
pub use members::*;
