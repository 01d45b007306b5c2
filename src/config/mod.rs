// Configuration language module
// Scanner, parser and typed store for `key = value` config files
//
// Input bytes are scanned into tokens whose text is interned into a string
// pool; the parser turns them into records, and records plus pool form the
// store the application queries by key and expected type.

mod buffer;
mod error;
mod parser;
mod pool;
mod scanner;
mod store;
mod token;
mod value;

pub use buffer::GrowBuffer;
pub use error::{ConfigError, Diagnostic};
pub use parser::Parser;
pub use pool::{PoolOffset, StringPool};
pub use scanner::Scanner;
pub use store::Store;
pub use token::{Token, TokenKind};
pub use value::{Entry, Record, Value, ValueKind, ValueRef};
