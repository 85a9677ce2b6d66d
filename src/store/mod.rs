pub mod habits;
pub mod logs;
pub mod profile;

pub use habits::HabitCatalog;
pub use logs::{LogStore, SeedMode};
pub use profile::ProfileStore;
