pub mod daily_log;
pub mod habit;
pub mod profile;

pub use daily_log::DailyLog;
pub use habit::Habit;
pub use profile::UserProfile;
