//! The interactive `cmd>` loop.
//!
//! The shell only collects input and prints what the command functions
//! return. Storage errors are reported and the loop keeps going; terminal
//! I/O errors end it.

use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser};
use tracing::warn;

use super::commands::{project, todo};
use super::error::{CliError, CliResult};
use super::utils::parse_optional_id;
use super::{ProjectCommands, ShellCommand, TodoCommands};
use crate::db::{Database, Id, PRIORITY_DEFAULT};
use crate::service::TodoItemService;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
    /// Input ran out in the middle of a prompt.
    EndOfInput,
}

pub struct Shell<'a, D: Database, R, W> {
    db: &'a D,
    input: R,
    output: W,
}

impl<'a, D: Database, R: BufRead, W: Write> Shell<'a, D, R, W> {
    pub fn new(db: &'a D, input: R, output: W) -> Self {
        Self { db, input, output }
    }

    /// Consume the shell and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> CliResult<()> {
        writeln!(
            self.output,
            "Todo List Application started. Type 'help' for commands"
        )?;

        loop {
            let Some(line) = self.prompt("cmd> ")? else {
                writeln!(self.output, "\nExiting")?;
                break;
            };

            match self.execute(&line).await? {
                Flow::Continue => {}
                Flow::Exit => {
                    writeln!(self.output, "Exiting the application.")?;
                    break;
                }
                Flow::EndOfInput => {
                    writeln!(self.output, "\nExiting")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Parse and run one command line.
    pub async fn execute(&mut self, line: &str) -> CliResult<Flow> {
        let Some(words) = shlex::split(line) else {
            writeln!(self.output, "Unbalanced quotes in command")?;
            return Ok(Flow::Continue);
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellCommand::try_parse_from(words) {
            Ok(command) => command,
            Err(e) => {
                write!(self.output, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.dispatch(command).await {
            Ok(flow) => Ok(flow),
            Err(CliError::Database(e)) => {
                warn!(error = %e, "command failed");
                writeln!(self.output, "Error: {}", e)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    async fn dispatch(&mut self, command: ShellCommand) -> CliResult<Flow> {
        match command {
            ShellCommand::Help => {
                let help = ShellCommand::command().render_help();
                write!(self.output, "{}", help)?;
            }
            ShellCommand::Quit => return Ok(Flow::Exit),
            ShellCommand::Projects { command } => return self.projects(command).await,
            ShellCommand::Todos { command } => return self.todos(command).await,
        }
        Ok(Flow::Continue)
    }

    async fn projects(&mut self, command: ProjectCommands) -> CliResult<Flow> {
        let output = match command {
            ProjectCommands::List { format } => project::list_projects(self.db, &format).await?,
            ProjectCommands::Create { title } => {
                let Some(title) = self.words_or_prompt(title, "Project title: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                project::create_project(self.db, &title).await?
            }
            ProjectCommands::Rename { id, title } => {
                let Some(title) = self.words_or_prompt(title, "New project title: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                project::rename_project(self.db, id, &title).await?
            }
            ProjectCommands::Delete { id } => project::delete_project(self.db, id).await?,
        };

        writeln!(self.output, "{}", output)?;
        Ok(Flow::Continue)
    }

    async fn todos(&mut self, command: TodoCommands) -> CliResult<Flow> {
        let output = match command {
            TodoCommands::List {
                project_id,
                project_title,
                format,
            } => {
                let filter = match (project_id, project_title.as_deref()) {
                    (Some(id), _) => todo::TodoFilter::Project(id),
                    (None, Some(title)) => todo::TodoFilter::ProjectTitle(title),
                    (None, None) => todo::TodoFilter::All,
                };
                todo::list_todos(self.db, filter, &format).await?
            }
            TodoCommands::Add => return self.add_todo_flow().await,
            TodoCommands::Show { id, format } => todo::show_todo(self.db, id, &format).await?,
            TodoCommands::Edit { id } => return self.edit_todo_flow(id).await,
            TodoCommands::Complete { id } => todo::complete_todo(self.db, id).await?,
            TodoCommands::Delete { id } => todo::delete_todo(self.db, id).await?,
        };

        writeln!(self.output, "{}", output)?;
        Ok(Flow::Continue)
    }

    async fn add_todo_flow(&mut self) -> CliResult<Flow> {
        let Some(title) = self.prompt("Todo title: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let default_priority = PRIORITY_DEFAULT.to_string();
        let Some(priority) = self.prompt_priority(&default_priority)? else {
            return Ok(Flow::EndOfInput);
        };

        let projects = project::list_projects(self.db, "table").await?;
        writeln!(self.output, "{}", projects)?;
        let Some(project_id) = self.prompt_project_id(None)? else {
            return Ok(Flow::EndOfInput);
        };

        let output = todo::add_todo(self.db, &title, &description, &priority, project_id).await?;
        writeln!(self.output, "{}", output)?;
        Ok(Flow::Continue)
    }

    async fn edit_todo_flow(&mut self, id: Id) -> CliResult<Flow> {
        let Some(mut item) = TodoItemService::new(self.db).get(id).await? else {
            writeln!(self.output, "Todo {} not found.", id)?;
            return Ok(Flow::Continue);
        };

        let Some(title) = self.prompt_with_default("Todo title", &item.title)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(description) = self.prompt_with_default("Description", &item.description)?
        else {
            return Ok(Flow::EndOfInput);
        };
        let Some(priority) = self.prompt_priority(&item.priority.to_string())? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(project_id) = self.prompt_project_id(item.project_id)? else {
            return Ok(Flow::EndOfInput);
        };

        item.title = title;
        item.description = description;
        // prompt_priority only returns values that parse
        item.priority = priority.trim().parse().unwrap_or(item.priority);
        item.project_id = project_id;

        let output = todo::update_todo(self.db, &item).await?;
        writeln!(self.output, "{}", output)?;
        Ok(Flow::Continue)
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, but an empty answer keeps `default`.
    fn prompt_with_default(&mut self, label: &str, default: &str) -> CliResult<Option<String>> {
        let answer = self.prompt(&format!("{} [{}] ", label, default))?;
        Ok(answer.map(|a| if a.is_empty() { default.to_string() } else { a }))
    }

    /// Ask until the answer is an integer in 1..=5.
    fn prompt_priority(&mut self, default: &str) -> CliResult<Option<String>> {
        loop {
            let Some(answer) = self.prompt_with_default("Priority (1-5)", default)? else {
                return Ok(None);
            };
            if TodoItemService::<D>::validate_priority(answer.as_str()) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Priority must be an integer between 1 and 5")?;
        }
    }

    /// Ask until the answer is blank (no project) or numeric.
    ///
    /// Returns `Some(project_id)` on an answer and `None` at end of input.
    fn prompt_project_id(&mut self, current: Option<Id>) -> CliResult<Option<Option<Id>>> {
        let label = match current {
            Some(id) => format!("Project id (leave empty for {}, '-' for none): ", id),
            None => "Project id (leave empty for none): ".to_string(),
        };

        loop {
            let Some(answer) = self.prompt(&label)? else {
                return Ok(None);
            };
            if answer == "-" {
                return Ok(Some(None));
            }
            if answer.is_empty() {
                return Ok(Some(current));
            }
            match parse_optional_id(&answer) {
                Ok(id) => return Ok(Some(id)),
                Err(_) => writeln!(self.output, "Project id must be numeric")?,
            }
        }
    }

    /// Join the words typed after the command, or prompt when there were none.
    ///
    /// Quoted words arrive as one token with their inner spacing intact.
    fn words_or_prompt(&mut self, words: Vec<String>, label: &str) -> CliResult<Option<String>> {
        if words.is_empty() {
            self.prompt(label)
        } else {
            Ok(Some(words.join(" ")))
        }
    }
}
