pub mod burndown;
pub mod sprint_stats;

use crate::Task;

pub(crate) fn sum_points<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> f64 {
    tasks.into_iter().map(Task::points).sum()
}
