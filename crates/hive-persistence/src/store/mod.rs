pub mod atomic_writer;
pub mod json_file;
pub mod memory;

pub use atomic_writer::AtomicWriter;
pub use json_file::{JsonEnvelope, JsonFileRepository};
pub use memory::InMemoryRepository;
