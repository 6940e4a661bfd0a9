pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Delete a task by id")]
    Delete(delete::DeleteArgs),
    #[command(about = "Change the status of a task")]
    Status(status::StatusArgs),
    #[command(about = "Edit the description of a task")]
    Edit(edit::EditArgs),
    #[command(about = "List tasks for a user")]
    List(list::ListArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::List(args) => list::cmd(args),
        }
    }
}
