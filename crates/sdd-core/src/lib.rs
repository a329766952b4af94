pub mod adapter;
pub mod agent;
pub mod config;
pub mod error;
pub mod io;
pub mod loader;
pub mod locale;
pub mod materialize;
pub mod messages;
pub mod paths;
pub mod profiles;
pub mod render;
pub mod rules;
pub mod schema;
pub mod target;

pub use agent::{Agent, AgentSource};
pub use error::{Result, SddError};
pub use loader::{load_agents, DefinitionSource, LoadOptions, LoadReport};
pub use locale::Locale;
pub use target::Target;
