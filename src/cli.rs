//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; a single route table dispatches to the library.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_ancestors, format_create_outcome, format_layers_json, format_layers_text,
    format_resolution_json, format_resolution_text,
};
pub use route::RunContext;
