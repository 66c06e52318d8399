//! CLI domain: parse, route, output and presentation only.
//! No generation orchestration here; the route table dispatches to `generation::run`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_check_report, format_generate_outcome};
pub use route::RunContext;
