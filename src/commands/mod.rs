pub mod add;
pub mod delete;
pub mod init;
pub mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task to the list")]
    Add(add::AddArgs),
    #[command(about = "Show the task list sorted by date and time")]
    List,
    #[command(about = "Delete a task by its position on the list")]
    Delete(delete::DeleteArgs),
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
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Delete(args) => delete::cmd(args),
        }
    }
}
