use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task identifier
    #[arg(long)]
    id: String,
    /// Task description
    #[arg(long)]
    task: String,
    /// Owning user id
    #[arg(long)]
    user: i64,
    /// Initial status
    #[arg(long, default_value = "Active")]
    status: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let db = Db::new()?;
    let mut tasks = Tasks::new(&db)?;

    let task = Task::new(&args.id, &args.task, args.user, &args.status);
    tasks.insert(&task)?;

    msg_success!(Message::TaskAdded(task.id));
    Ok(())
}
