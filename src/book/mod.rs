//! Provides the address book itself: the sorted collection of entries.

mod address_book;

pub use address_book::*;
