mod members;
pub use members::*;

mod semester;
pub use semester::*;
