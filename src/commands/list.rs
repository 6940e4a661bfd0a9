use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Owning user id
    #[arg(long)]
    user: i64,
    /// Print as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let db = Db::new()?;
    let tasks = Tasks::new(&db)?.fetch_for_user(args.user)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_print!(Message::TasksNotFoundForUser(args.user));
        return Ok(());
    }

    View::tasks(&tasks);
    Ok(())
}
