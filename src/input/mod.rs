mod reader;

pub use reader::{InputReader, MAX_MESSAGE_SIZE};
