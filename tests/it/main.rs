mod array;
mod error;
