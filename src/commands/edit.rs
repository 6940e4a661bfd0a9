use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task identifier
    id: String,
    /// New description
    task: String,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let db = Db::new()?;
    let mut tasks = Tasks::new(&db)?;

    tasks.set_description(&args.id, &args.task)?;

    msg_success!(Message::TaskEdited(args.id));
    Ok(())
}
