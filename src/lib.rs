// taskfile - single-user to-do list persisted to a flat JSON file

pub mod export;
pub mod filter;
pub mod page;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use export::to_csv_bytes;
pub use page::{num_pages, paginate};
pub use store::{DEFAULT_PATH, Store};
pub use task::{Priority, Task, add_task, next_id};
