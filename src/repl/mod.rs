mod commands;
mod feed;
mod interactive;
mod render;

pub use commands::ReplCommand;
pub use feed::ExampleFeed;
pub use interactive::InteractiveRepl;
pub use render::{render_error_banner, render_examples, render_sql_panel, render_table};
