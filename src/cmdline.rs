//! Kernel command line splitting.
//!
//! Arguments are `name` or `name=value`, separated by ASCII spaces. A value
//! may be wrapped in `"..."` to keep spaces; the quotes stay in the output.
//! There is no escaping and no comment syntax.

use tracing::debug;

use crate::i18n::Translator;

/// Kernel command line split failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmdlineError {
    /// The line ended inside a quoted value.
    #[error("unbalanced quoting")]
    UnbalancedQuoting {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// A quote appeared where an argument cannot have one.
    #[error("unexpected quoting")]
    UnexpectedQuoting {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl CmdlineError {
    /// Renders the message through `translator`.
    pub fn localized(&self, translator: &dyn Translator) -> String {
        translator.gettext(&self.to_string())
    }
}

/// Position within the current argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgState {
    /// Between arguments.
    Idle,
    /// Reading the name.
    Name,
    /// Just read the first `=`. `keyed` is false when the name is empty.
    Assign { keyed: bool },
    /// Reading an unquoted value.
    Value,
    /// Inside a quoted value opened at `open`.
    Quoted { open: usize },
    /// Right after the closing quote.
    QuoteClosed,
}

/// Splits a kernel command line into arguments.
///
/// Runs of spaces separate arguments. A `"` is only accepted right after the
/// first `=` of a named argument and must be closed before the line ends;
/// the closing `"` must end the argument.
pub fn split_kernel_command_line(line: &str) -> Result<Vec<String>, CmdlineError> {
    let mut args = Vec::new();
    let mut state = ArgState::Idle;
    let mut start = 0;

    for (offset, ch) in line.char_indices() {
        state = match (state, ch) {
            (ArgState::Quoted { .. }, '"') => ArgState::QuoteClosed,
            (ArgState::Quoted { open }, _) => ArgState::Quoted { open },
            (ArgState::Idle, ' ') => ArgState::Idle,
            (_, ' ') => {
                args.push(line[start..offset].to_string());
                ArgState::Idle
            }
            (ArgState::Assign { keyed: true }, '"') => ArgState::Quoted { open: offset },
            (_, '"') | (ArgState::QuoteClosed, _) => {
                debug!(offset, line, "unexpected quoting in kernel command line");
                return Err(CmdlineError::UnexpectedQuoting { offset });
            }
            (ArgState::Idle, '=') => {
                start = offset;
                ArgState::Assign { keyed: false }
            }
            (ArgState::Idle, _) => {
                start = offset;
                ArgState::Name
            }
            (ArgState::Name, '=') => ArgState::Assign { keyed: true },
            (ArgState::Name, _) => ArgState::Name,
            (ArgState::Assign { .. } | ArgState::Value, _) => ArgState::Value,
        };
    }

    match state {
        ArgState::Quoted { open } => {
            debug!(offset = open, line, "unbalanced quoting in kernel command line");
            Err(CmdlineError::UnbalancedQuoting { offset: open })
        }
        ArgState::Idle => Ok(args),
        _ => {
            args.push(line[start..].to_string());
            Ok(args)
        }
    }
}
