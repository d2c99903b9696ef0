/// Line-oriented coordinate parsing.
pub mod reader;
