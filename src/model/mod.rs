pub mod bonus;
pub mod config;
pub mod program;
pub mod roadmap;
pub mod status;
pub mod step;
pub mod template;

pub use bonus::*;
pub use config::*;
pub use program::*;
pub use roadmap::*;
pub use status::*;
pub use step::*;
pub use template::*;
