//! Memoization cell for derived project state

use std::cell::OnceCell;

/// A lazily computed value with an explicit invalidation contract
///
/// Reads go through [`Memo::get_or_compute`] and only run the computation
/// when the cell is empty. Writers that change the inputs call
/// [`Memo::invalidate`]; the next read recomputes.
#[derive(Debug)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Create a cell that already holds `value`
    pub fn with_value(value: T) -> Self {
        Self {
            cell: OnceCell::from(value),
        }
    }

    /// Return the memoized value, computing it first if needed
    pub fn get_or_compute<F>(&self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(compute)
    }

    /// Return the value if it is currently memoized
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Take the value out, leaving the cell invalidated
    pub fn take(&mut self) -> Option<T> {
        self.cell.take()
    }

    /// Store a freshly computed value
    pub fn set(&mut self, value: T) {
        self.cell = OnceCell::from(value);
    }

    /// Drop the memoized value; the next read recomputes
    pub fn invalidate(&mut self) {
        self.cell.take();
    }

    pub fn is_valid(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
