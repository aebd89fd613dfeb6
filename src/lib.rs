//! A quick and dirty fixed-slot hashtable with separately chained buckets.
//!
//! [`ChainedTable`] never rehashes: you pick a slot count up front and live
//! with it for the life of the table. In exchange, every record the table
//! creates flows through a pluggable [`Alloc`] strategy and flows back out
//! through it, which makes arenas, pools, and counted allocations first-class
//! rather than something bolted on afterwards.

mod alloc;
mod chain;
mod chained_table;
mod counting_alloc;
mod error;
#[cfg(test)]
mod ident_hasher;
#[cfg(feature = "shared_table")]
mod shared_table;
mod table;

pub use crate::alloc::{Alloc, HeapAlloc};
pub use crate::chained_table::{ChainedTable, Iter};
pub use crate::counting_alloc::CountingAlloc;
pub use crate::error::TableError;
#[cfg(feature = "shared_table")]
pub use crate::shared_table::SharedTable;
pub use crate::table::{AddOutcome, Table};
