//! Inclusive index ranges over borrowed arrays.

use std::ops::RangeInclusive;

use crate::error::{Result, UtilError};

/// Validate `start <= end < len` and return the inclusive range.
pub fn check_range(len: usize, start: usize, end: usize) -> Result<RangeInclusive<usize>> {
    if start > end || end >= len {
        return Err(UtilError::InvalidRange { start, end, len });
    }
    Ok(start..=end)
}

/// Read-only view of `data[start..=end]`.
#[derive(Debug)]
pub struct ArrayView<'a, T> {
    data: &'a [T],
    start: usize,
    end: usize,
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<'a, T> ArrayView<'a, T> {
    pub fn new(data: &'a [T], start: usize, end: usize) -> Result<Self> {
        check_range(data.len(), start, end)?;
        Ok(Self { data, start, end })
    }

    /// View over the whole array. Fails on an empty array.
    pub fn full(data: &'a [T]) -> Result<Self> {
        Self::new(data, 0, data.len().saturating_sub(1))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements in range. Never zero.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// The elements in range only.
    pub fn as_slice(&self) -> &'a [T] {
        &self.data[self.start..=self.end]
    }

    /// Elements in range paired with their absolute index.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let start = self.start;
        self.as_slice()
            .iter()
            .enumerate()
            .map(move |(i, value)| (start + i, value))
    }
}

/// Mutable view of `data[start..=end]`.
#[derive(Debug)]
pub struct ArrayViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
    end: usize,
}

impl<'a, T> ArrayViewMut<'a, T> {
    pub fn new(data: &'a mut [T], start: usize, end: usize) -> Result<Self> {
        check_range(data.len(), start, end)?;
        Ok(Self { data, start, end })
    }

    /// View over the whole array. Fails on an empty array.
    pub fn full(data: &'a mut [T]) -> Result<Self> {
        let end = data.len().saturating_sub(1);
        Self::new(data, 0, end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Shorter-lived mutable view over the same range.
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T> {
        ArrayViewMut {
            data: &mut *self.data,
            start: self.start,
            end: self.end,
        }
    }

    /// Read-only view over the same range.
    pub fn view(&self) -> ArrayView<'_, T> {
        ArrayView {
            data: &*self.data,
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[self.start..=self.end]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[self.start..=self.end]
    }

    /// Consume the view, keeping the borrow of the range.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        &mut self.data[self.start..=self.end]
    }
}
