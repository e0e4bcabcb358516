use super::commands::ReplCommand;
use super::feed::ExampleFeed;
use super::render::{render_error_banner, render_examples, render_sql_panel, render_table};
use crate::error::Result;
use crate::orchestrator::{Orchestrator, QueryPhase};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "censusq> ";
const HISTORY_FILE: &str = ".censusq_history";

/// Interactive session. Owns the line editor and drives the orchestrator;
/// everything printed is derived from the session state.
pub struct InteractiveRepl {
    editor: DefaultEditor,
    orchestrator: Orchestrator,
    feed: ExampleFeed,
}

impl InteractiveRepl {
    pub fn new(orchestrator: Orchestrator, feed: ExampleFeed) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            orchestrator,
            feed,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let history = history_path();
        if let Some(path) = &history {
            if let Err(e) = self.editor.load_history(path) {
                debug!("no usable history at {}: {e}", path.display());
            }
        }

        println!("{}", render_examples(&self.feed));

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let Some(command) = ReplCommand::parse(&line) else {
                        continue;
                    };
                    if self.handle(command).await? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        if let Some(path) = &history {
            if let Err(e) = self.editor.save_history(path) {
                debug!("could not save history: {e}");
            }
        }
        Ok(())
    }

    /// Returns true when the session should end.
    async fn handle(&mut self, command: ReplCommand) -> Result<bool> {
        match command {
            ReplCommand::Quit => return Ok(true),
            ReplCommand::Help => {
                println!(
                    ":examples  show example queries\n\
                     :sql       show the last generated SQL\n\
                     :geojson   dump the map document\n\
                     :quit      leave"
                );
            }
            ReplCommand::Examples => println!("{}", render_examples(&self.feed)),
            ReplCommand::Sql => {
                let state = self.orchestrator.state();
                if state.shows_examples() {
                    println!("{}", render_examples(&self.feed));
                } else {
                    println!("{}", render_sql_panel(&state.sql_query));
                }
            }
            ReplCommand::GeoJson => {
                let doc = self.orchestrator.state().map_document();
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            ReplCommand::Example(n) => {
                let example = self.feed.get(n).map(str::to_string);
                match example {
                    Some(example) => {
                        println!("{example}");
                        self.submit(&example).await?;
                    }
                    None => println!("no example #{n}"),
                }
            }
            ReplCommand::Query(text) => self.submit(&text).await?,
        }
        Ok(false)
    }

    async fn submit(&mut self, query: &str) -> Result<()> {
        let _ = self.editor.add_history_entry(query);
        let phase = self.orchestrator.submit(query).await;

        let state = self.orchestrator.state();
        match phase {
            QueryPhase::Failure => {
                let message = state.error_message.as_deref().unwrap_or("unknown error");
                println!("{}", render_error_banner(message));
            }
            _ => {
                println!("{}", render_sql_panel(&state.sql_query));
                if let Some(table) = render_table(&state.columns, &state.rows) {
                    println!("{table}");
                }
                if let Some(animation) = &state.last_animation {
                    debug!(
                        "map framed to [{}, {}] x [{}, {}]",
                        animation.min_long,
                        animation.min_lat,
                        animation.max_long,
                        animation.max_lat
                    );
                }
            }
        }

        self.orchestrator.acknowledge();
        Ok(())
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}
