//! UI Components
//!
//! Board columns, task cards and the add-task input.

mod board_column;
mod task_card;
mod add_task_input;
mod live_region;

pub use board_column::BoardColumn;
pub use task_card::TaskCard;
pub use add_task_input::AddTaskInput;
pub use live_region::LiveRegion;
