use super::open_store;
use crate::libs::messages::Message;
use crate::libs::stats::Statistics;
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn cmd(file: Option<&Path>) -> Result<()> {
    let (_, tasks) = open_store(file)?;
    print_statistics(tasks.all(), Local::now().date_naive());
    Ok(())
}

pub fn print_statistics(tasks: &[Task], today: NaiveDate) {
    let stats = Statistics::compute(tasks, today);

    msg_print!(Message::StatisticsHeader, true);

    msg_print!(Message::OverviewHeader);
    View::overview_table(&stats).printstd();

    if !stats.by_category.is_empty() {
        msg_print!(Message::CategoryBreakdownHeader, true);
        View::category_table(&stats).printstd();
    }

    if !stats.by_priority.is_empty() {
        msg_print!(Message::PriorityBreakdownHeader, true);
        View::priority_table(&stats).printstd();
    }

    msg_print!(Message::OverdueTasksHeader, true);
    if stats.overdue_tasks.is_empty() {
        msg_info!(Message::NoOverdueTasks);
    } else {
        View::overdue_table(&stats).printstd();
    }
}
