use std::fmt;

/// Why a table operation could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Construction was asked for a table with zero slots.
    ZeroSlots,
    /// The allocator refused a record the operation needed. Whatever had been
    /// acquired before the refusal has already been handed back.
    AllocationFailed,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroSlots => {
                write!(f, "a table needs at least one slot")
            }
            TableError::AllocationFailed => {
                write!(f, "the allocator refused to produce a record")
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::TableError;

    #[test]
    fn errors_say_something_useful() {
        assert_eq!(
            "a table needs at least one slot",
            TableError::ZeroSlots.to_string()
        );
        assert_eq!(
            "the allocator refused to produce a record",
            TableError::AllocationFailed.to_string()
        );
    }
}
