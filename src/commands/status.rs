use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task identifier
    id: String,
    /// New status, stored verbatim
    status: String,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let db = Db::new()?;
    let mut tasks = Tasks::new(&db)?;

    tasks.set_status(&args.id, &args.status)?;

    msg_success!(Message::TaskStatusChanged(args.id, args.status));
    Ok(())
}
