pub mod blog_handlers;
pub mod cv_handlers;
pub mod profile_handlers;
pub mod system_handlers;

pub use blog_handlers::*;
pub use cv_handlers::*;
pub use profile_handlers::*;
pub use system_handlers::*;
