pub mod backend;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
