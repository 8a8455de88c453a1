//! Shared test utilities for the installer crate.

use crate::error::{InstallerError, Result};
use crate::executor::{CommandExecutor, Invocation};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Represents an expected command invocation for testing.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The invocation the stub expects next.
    pub invocation: Invocation,
    /// The exit code to report for it.
    pub exit_code: i32,
}

impl ExpectedCall {
    /// Expect `invocation` and report `exit_code`.
    #[must_use]
    pub fn new(invocation: Invocation, exit_code: i32) -> Self {
        Self {
            invocation,
            exit_code,
        }
    }
}

/// A stub implementation of [`CommandExecutor`] for testing.
///
/// Records expected command invocations and returns predefined exit codes,
/// allowing tests to verify command execution without side effects. Every
/// invocation received is recorded, including unexpected ones.
#[derive(Debug, Default)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
    received: RefCell<Vec<Invocation>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
            received: RefCell::new(Vec::new()),
        }
    }

    /// Every invocation received so far, in order.
    #[must_use]
    pub fn received(&self) -> Vec<Invocation> {
        self.received.borrow().clone()
    }

    /// Returns `true` when every expected invocation has been consumed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.expected.borrow().is_empty()
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.received.borrow_mut().push(invocation.clone());

        let Some(call) = self.expected.borrow_mut().pop_front() else {
            return Err(InstallerError::StubMismatch {
                message: format!("unexpected invocation: {invocation}"),
            });
        };

        if call.invocation != *invocation {
            return Err(InstallerError::StubMismatch {
                message: format!("expected {}, received {invocation}", call.invocation),
            });
        }

        Ok(call.exit_code)
    }
}
