//! Provides the `AddressBook` collection and its entry-level operations.
//!
//! The book owns an ordered sequence of `Entry` values and keeps it sorted
//! in non-decreasing order of `name` (plain byte-wise `str` comparison) on
//! every insertion. All position-based operations are 1-based at this API
//! boundary; the 0-based indices stay internal.

use crate::error::{AppError, Result};
use crate::import;
use crate::models::Entry;
use std::cmp::Ordering;
use std::io::Read;
use tracing::{debug, info};

/// A collection of contact entries, always sorted by name.
///
/// Entries with equal names are kept in insertion order (sorted insertion
/// places a new entry after every existing entry whose name is less than
/// or equal to it).
#[derive(Debug, Default)]
pub struct AddressBook {
    entries: Vec<Entry>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The entries in their current sorted order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a new entry, keeping the book sorted by name.
    ///
    /// Scans from the front for the first entry whose name is strictly
    /// greater than the new name and inserts there, so an entry with a
    /// duplicate name lands after the existing ones. Always succeeds.
    pub fn add_entry(&mut self, name: &str, phone_number: &str, email: &str) {
        self.insert_sorted(Entry::new(name, phone_number, email));
    }

    fn insert_sorted(&mut self, entry: Entry) {
        let index = self
            .entries
            .iter()
            .position(|existing| entry.name.as_str() < existing.name.as_str())
            .unwrap_or(self.entries.len());
        debug!("Inserting entry for {:?} at index {}", entry.name, index);
        self.entries.insert(index, entry);
    }

    /// Converts a 1-based entry number to a 0-based index.
    ///
    /// Pure arithmetic with no bounds checking: `position <= 0` yields a
    /// negative result, which the position-based lookups reject as out of
    /// range.
    pub fn get_index(position: i64) -> i64 {
        position - 1
    }

    /// Bounds-checks a 1-based position against the current entry count.
    ///
    /// Uses `checked_sub` so even `i64::MIN` degrades to `OutOfRange`
    /// instead of an arithmetic overflow.
    fn checked_index(&self, position: i64) -> Result<usize> {
        match position.checked_sub(1) {
            Some(index) if index >= 0 && (index as usize) < self.entries.len() => {
                Ok(index as usize)
            },
            _ => Err(AppError::OutOfRange {
                position,
                count: self.entries.len(),
            }),
        }
    }

    /// Returns the entry at the given 1-based position.
    ///
    /// # Errors
    ///
    /// `AppError::OutOfRange` if `position` is outside `[1, len]`.
    pub fn view_entry_number(&self, position: i64) -> Result<&Entry> {
        let index = self.checked_index(position)?;
        Ok(&self.entries[index])
    }

    /// Returns a mutable reference to the entry at the given 1-based
    /// position, for in-place edits.
    ///
    /// Renaming an entry through this reference does not re-sort the book;
    /// the order is only re-established by subsequent insertions.
    ///
    /// # Errors
    ///
    /// `AppError::OutOfRange` if `position` is outside `[1, len]`.
    pub fn entry_mut(&mut self, position: i64) -> Result<&mut Entry> {
        let index = self.checked_index(position)?;
        Ok(&mut self.entries[index])
    }

    /// Removes and returns the entry at the given 1-based position. Later
    /// entries shift down by one position.
    ///
    /// # Errors
    ///
    /// `AppError::OutOfRange` if `position` is outside `[1, len]`.
    pub fn remove_entry(&mut self, position: i64) -> Result<Entry> {
        let index = self.checked_index(position)?;
        let removed = self.entries.remove(index);
        info!("Removed entry {} ({})", position, removed.name);
        Ok(removed)
    }

    /// Finds the first entry whose name equals `name` exactly.
    ///
    /// Case-sensitive, no normalization. `None` means no match, which is a
    /// normal outcome rather than an error. O(n).
    pub fn linear_search(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Finds an entry whose name equals `name` exactly, by binary search
    /// over the sorted sequence. O(log n).
    ///
    /// When several entries share the target name this returns whichever
    /// one the probe sequence lands on first, unlike `linear_search` which
    /// always returns the first in order. That weaker guarantee is kept
    /// as-is; callers that need the first duplicate must use
    /// `linear_search`.
    pub fn binary_search(&self, name: &str) -> Option<&Entry> {
        let mut lower: isize = 0;
        let mut upper: isize = self.entries.len() as isize - 1;

        while lower <= upper {
            let mid = (lower + upper) / 2;
            let entry = &self.entries[mid as usize];
            match name.cmp(entry.name.as_str()) {
                Ordering::Equal => return Some(entry),
                Ordering::Less => upper = mid - 1,
                Ordering::Greater => lower = mid + 1,
            }
        }

        None
    }

    /// Imports every entry from a CSV source, adding each row through the
    /// sorted insertion path. The final order therefore comes from the
    /// sort, not from the file order.
    ///
    /// Returns the number of entries added.
    ///
    /// # Errors
    ///
    /// Propagates `AppError::Io`, `AppError::Csv`, and
    /// `AppError::MissingColumns` from the CSV adapter; the book is left
    /// unchanged when the source fails to parse.
    pub fn import_from_csv<R: Read>(&mut self, source: R) -> Result<usize> {
        let imported = import::read_entries(source)?;
        let added = imported.len();
        for entry in imported {
            self.insert_sorted(entry);
        }
        info!("Imported {} entries from CSV", added);
        Ok(added)
    }

    /// Removes every entry, leaving an empty book.
    pub fn purge(&mut self) {
        info!("Purging all {} entries", self.entries.len());
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn book_with_names(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_entry(name, "010.012.1815", "noname@noone.com");
        }
        book
    }

    /// Bill/Bob/Joe/Sally/Sussie, already in alphabetical order.
    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_entry("Bill", "555-555-4854", "bill@blocmail.com");
        book.add_entry("Bob", "555-555-5415", "bob@blocmail.com");
        book.add_entry("Joe", "555-555-3660", "joe@blocmail.com");
        book.add_entry("Sally", "555-555-4646", "sally@blocmail.com");
        book.add_entry("Sussie", "555-555-2036", "sussie@blocmail.com");
        book
    }

    fn names_of(book: &AddressBook) -> Vec<&str> {
        book.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn starts_empty() {
        let book = AddressBook::new();
        assert_eq!(book.len(), 0);
        assert!(book.is_empty());
    }

    #[test]
    fn add_entry_keeps_the_given_fields() {
        let mut book = AddressBook::new();
        book.add_entry("Ada Lovelace", "010.012.1815", "augusta.king@lovelace.com");
        assert_eq!(book.len(), 1);
        let entry = &book.entries()[0];
        assert_eq!(entry.name, "Ada Lovelace");
        assert_eq!(entry.phone_number, "010.012.1815");
        assert_eq!(entry.email, "augusta.king@lovelace.com");
    }

    #[test]
    fn add_entry_sorts_by_name() {
        let book = book_with_names(&["d", "b", "c", "e", "a"]);
        assert_eq!(names_of(&book), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn sorted_invariant_holds_after_every_add() {
        let mut book = AddressBook::new();
        for name in ["d", "b", "c", "e", "a"] {
            book.add_entry(name, "010.012.1815", "noname@noone.com");
            let names = names_of(&book);
            let mut sorted = names.clone();
            sorted.sort_unstable();
            assert_eq!(names, sorted, "order broken after adding {:?}", name);
        }
    }

    #[test]
    fn equal_names_keep_insertion_order() {
        let mut book = AddressBook::new();
        book.add_entry("Ada", "first", "first@ada.com");
        book.add_entry("Zed", "zed", "zed@zed.com");
        book.add_entry("Ada", "second", "second@ada.com");
        book.add_entry("Ada", "third", "third@ada.com");
        let phones: Vec<&str> = book
            .entries()
            .iter()
            .filter(|e| e.name == "Ada")
            .map(|e| e.phone_number.as_str())
            .collect();
        assert_eq!(phones, ["first", "second", "third"]);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(5, 4)]
    #[case(0, -1)]
    #[case(-3, -4)]
    fn get_index_is_position_minus_one(#[case] position: i64, #[case] expected: i64) {
        assert_eq!(AddressBook::get_index(position), expected);
    }

    #[test]
    fn view_entry_number_is_one_based() {
        let book = book_with_names(&["d", "b", "c", "e", "a"]);
        for (position, expected) in [(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")] {
            assert_eq!(book.view_entry_number(position).unwrap().name, expected);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(6)]
    fn view_entry_number_rejects_out_of_range_positions(#[case] position: i64) {
        let book = sample_book();
        let err = book.view_entry_number(position).unwrap_err();
        match err {
            AppError::OutOfRange { position: p, count } => {
                assert_eq!(p, position);
                assert_eq!(count, 5);
            },
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn extreme_positions_are_out_of_range_not_a_panic() {
        let mut book = sample_book();
        assert!(matches!(
            book.view_entry_number(i64::MIN),
            Err(AppError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.entry_mut(i64::MIN),
            Err(AppError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.remove_entry(i64::MIN),
            Err(AppError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.view_entry_number(i64::MAX),
            Err(AppError::OutOfRange { .. })
        ));
    }

    #[test]
    fn remove_entry_shifts_later_entries_down() {
        let mut book = sample_book();
        let was_at_three = book.view_entry_number(3).unwrap().clone();
        let was_at_four = book.view_entry_number(4).unwrap().clone();

        let removed = book.remove_entry(3).unwrap();
        assert_eq!(removed, was_at_three);
        assert_eq!(book.len(), 4);
        assert_eq!(book.view_entry_number(3).unwrap(), &was_at_four);
    }

    #[test]
    fn remove_entry_rejects_out_of_range_positions() {
        let mut book = sample_book();
        assert!(matches!(
            book.remove_entry(0),
            Err(AppError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.remove_entry(6),
            Err(AppError::OutOfRange { .. })
        ));
        assert_eq!(book.len(), 5);
    }

    #[test]
    fn entry_mut_allows_in_place_edits() {
        let mut book = sample_book();
        let entry = book.entry_mut(3).unwrap();
        entry.phone_number = "555-555-0000".to_string();
        assert_eq!(book.view_entry_number(3).unwrap().phone_number, "555-555-0000");
    }

    #[test]
    fn in_place_rename_does_not_resort_the_book() {
        let mut book = sample_book();
        book.entry_mut(1).unwrap().name = "Zed".to_string();

        // The renamed entry stays at position 1 even though "Zed" no
        // longer belongs there.
        assert_eq!(names_of(&book), ["Zed", "Bob", "Joe", "Sally", "Sussie"]);
        assert_eq!(book.view_entry_number(1).unwrap().name, "Zed");

        // Later insertions still scan for the first strictly-greater
        // name, so the stray "Zed" at the front captures them.
        book.add_entry("Sam", "555-555-7777", "sam@blocmail.com");
        assert_eq!(
            names_of(&book),
            ["Sam", "Zed", "Bob", "Joe", "Sally", "Sussie"]
        );
    }

    #[test]
    fn linear_search_returns_first_match() {
        let mut book = AddressBook::new();
        book.add_entry("Ada", "first", "first@ada.com");
        book.add_entry("Ada", "second", "second@ada.com");
        let found = book.linear_search("Ada").unwrap();
        assert_eq!(found.phone_number, "first");
    }

    #[test]
    fn linear_search_misses_are_none() {
        let book = sample_book();
        assert!(book.linear_search("Dan").is_none());
        // Case-sensitive: no normalization of the target.
        assert!(book.linear_search("joe").is_none());
    }

    #[test]
    fn binary_search_finds_an_exact_entry() {
        let book = sample_book();
        let joe = book.binary_search("Joe").unwrap();
        assert_eq!(joe.name, "Joe");
        assert_eq!(joe.phone_number, "555-555-3660");
        assert_eq!(joe.email, "joe@blocmail.com");
    }

    #[test]
    fn binary_search_misses_are_none() {
        let book = sample_book();
        assert!(book.binary_search("Dan").is_none());
        assert!(book.binary_search("Aaron").is_none());
        assert!(book.binary_search("Zed").is_none());
        assert!(AddressBook::new().binary_search("Joe").is_none());
    }

    #[rstest]
    #[case("Bill")]
    #[case("Bob")]
    #[case("Joe")]
    #[case("Sally")]
    #[case("Sussie")]
    #[case("Dan")]
    #[case("")]
    fn binary_and_linear_search_agree_on_membership(#[case] name: &str) {
        let book = sample_book();
        assert_eq!(
            book.binary_search(name).is_some(),
            book.linear_search(name).is_some()
        );
    }

    #[test]
    fn binary_search_agrees_on_membership_under_duplicates() {
        let mut book = sample_book();
        book.add_entry("Joe", "555-555-9999", "other.joe@blocmail.com");
        // Which duplicate comes back is unspecified, but it must be a Joe.
        assert_eq!(book.binary_search("Joe").unwrap().name, "Joe");
        assert!(book.linear_search("Joe").is_some());
    }

    #[test]
    fn import_from_csv_adds_rows_through_sorted_insertion() {
        let csv = "\
name,phone_number,email
Sussie,555-555-2036,sussie@blocmail.com
Bill,555-555-4854,bill@blocmail.com
Sally,555-555-4646,sally@blocmail.com
Bob,555-555-5415,bob@blocmail.com
Joe,555-555-3660,joe@blocmail.com
";
        let mut book = AddressBook::new();
        let added = book.import_from_csv(csv.as_bytes()).unwrap();
        assert_eq!(added, 5);
        assert_eq!(book.len(), 5);
        // File order was unsorted; resting order comes from insertion.
        assert_eq!(names_of(&book), ["Bill", "Bob", "Joe", "Sally", "Sussie"]);
        assert_eq!(
            book.view_entry_number(1).unwrap().email,
            "bill@blocmail.com"
        );
        assert_eq!(
            book.view_entry_number(5).unwrap().phone_number,
            "555-555-2036"
        );
    }

    #[test]
    fn import_from_csv_merges_into_existing_entries() {
        let mut book = book_with_names(&["Aaron", "Zed"]);
        let csv = "\
name,phone_number,email
Joe,555-555-3660,joe@blocmail.com
";
        book.import_from_csv(csv.as_bytes()).unwrap();
        assert_eq!(names_of(&book), ["Aaron", "Joe", "Zed"]);
    }

    #[test]
    fn import_from_csv_rejects_sources_without_required_headers() {
        let mut book = AddressBook::new();
        let err = book
            .import_from_csv("name,email\nAda,ada@lovelace.com\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, AppError::MissingColumns(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn purge_leaves_an_empty_book() {
        let mut book = sample_book();
        book.purge();
        assert_eq!(book.len(), 0);
        assert!(matches!(
            book.view_entry_number(1),
            Err(AppError::OutOfRange { .. })
        ));
    }
}
