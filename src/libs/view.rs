use crate::libs::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "USER", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.description, task.user_id, task.status]);
        }
        table.printstd();
    }
}
