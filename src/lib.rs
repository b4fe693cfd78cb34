//! Library entrypoint for `shlexer`.
//!
//! The crate exposes a shell-style lexer with its quoting inverse, and a
//! kernel command line splitter.

pub mod cmdline;
pub mod i18n;
pub mod lexer;
pub mod quote;
pub mod randutil;

pub use cmdline::{CmdlineError, split_kernel_command_line};
pub use lexer::{LexError, Lexer, Token, TokenKind, Tokenizer, split};
pub use quote::{join, quote};
