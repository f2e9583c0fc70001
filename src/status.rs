//! Operation Status
//!
//! One state machine for every request the dashboard makes, so two
//! operations can never be loading at the same time.

/// Request-backed dashboard operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Submit,
    Fetch,
    Delete(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    Loading(Operation),
    Succeeded(Operation),
    Failed(Operation, String),
}

impl OpStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, OpStatus::Loading(_))
    }

    pub fn is_loading_op(&self, op: &Operation) -> bool {
        matches!(self, OpStatus::Loading(current) if current == op)
    }

    /// Enter `Loading(op)`. Returns false, leaving the state untouched, while
    /// another operation is in flight.
    pub fn try_begin(&mut self, op: Operation) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = OpStatus::Loading(op);
        true
    }

    /// Leave `Loading` with the operation's outcome
    pub fn finish(&mut self, outcome: Result<(), String>) {
        let op = match std::mem::take(self) {
            OpStatus::Loading(op) => op,
            other => {
                *self = other;
                return;
            }
        };
        *self = match outcome {
            Ok(()) => OpStatus::Succeeded(op),
            Err(message) => OpStatus::Failed(op, message),
        };
    }
}
