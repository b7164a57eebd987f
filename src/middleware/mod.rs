pub mod add_task;
