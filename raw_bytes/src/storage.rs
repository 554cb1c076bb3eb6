use alloc::vec::Vec;
use bytemuck::Pod;

use crate::ContainerError;

/// The low-level storage backend for words.
///
/// - `Inline` holds exactly one word without touching the heap
/// - `InMemory` is a heap vector of any length
#[derive(Debug)]
pub enum Storage<T: Pod> {
    /// Single word stored by value
    Inline(T),

    /// Standard in-memory vector
    InMemory(Vec<T>),
}

impl<T: Pod> Storage<T> {
    /// Allocate `len` zeroed words, picking the inline backend for a single word.
    ///
    /// Heap words come from `bytemuck::allocation::zeroed_vec`, which asks the allocator for
    /// zeroed memory instead of writing every element.
    pub fn zeroed(len: usize) -> Self {
        if len == 1 {
            Storage::Inline(<T as bytemuck::Zeroable>::zeroed())
        } else {
            Storage::InMemory(bytemuck::allocation::zeroed_vec(len))
        }
    }

    /// Return element count
    pub fn len(&self) -> usize {
        match self {
            Storage::Inline(_) => 1,
            Storage::InMemory(vec) => vec.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a reference to element i
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::OutOfBounds(index))
    }

    /// Read a mutable reference to element i
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds(index))
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Storage::Inline(word) => core::slice::from_ref(word),
            Storage::InMemory(vec) => vec.as_slice(),
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Inline(word) => core::slice::from_mut(word),
            Storage::InMemory(vec) => vec.as_mut_slice(),
        }
    }

    /// Bytes held on the heap, including spare capacity.
    pub fn heap_bytes(&self) -> usize {
        match self {
            Storage::Inline(_) => 0,
            Storage::InMemory(vec) => vec.capacity() * core::mem::size_of::<T>(),
        }
    }
}
