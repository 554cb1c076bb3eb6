use crate::{ContainerError, Storage};
use bytemuck::Pod;

/// Fixed-size run of typed words.
///
/// `Container<T>` hides which [`Storage`] backend holds the words. `T` must
/// implement [`bytemuck::Pod`] so that a zeroed allocation is a valid value.
///
/// # Examples
///
/// ```
/// use raw_bytes::Container;
///
/// let mut words = Container::<u64>::zeroed(4);
/// assert_eq!(words.len(), 4);
///
/// *words.get_mut(2).unwrap() = 0xFF;
/// assert_eq!(words.get(2).unwrap(), &0xFF);
/// assert!(words.get(4).is_err());
/// ```
///
/// ```
/// use raw_bytes::Container;
/// use bytemuck_derive::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Point { x: f32, y: f32 }
///
/// let mut points = Container::<Point>::zeroed(2);
/// points.get_mut(1).unwrap().x = 3.0;
///
/// let sum_x: f32 = points.as_slice().iter().map(|p| p.x).sum();
/// assert_eq!(sum_x, 3.0);
/// ```
#[derive(Debug)]
pub struct Container<T: Pod> {
    storage: Storage<T>,
}

impl<T: Pod> Container<T> {
    /// Creates a container of `len` zeroed words.
    ///
    /// A single word is kept inline. Larger containers are allocated zeroed,
    /// so untouched pages of a very large container cost no resident memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let small = Container::<u64>::zeroed(1);
    /// assert_eq!(small.heap_bytes(), 0);
    ///
    /// let large = Container::<u64>::zeroed(1024);
    /// assert!(large.as_slice().iter().all(|&w| w == 0));
    /// ```
    pub fn zeroed(len: usize) -> Self {
        Container {
            storage: Storage::zeroed(len),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a reference to the word at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.storage.get(index)
    }

    /// Returns a mutable reference to the word at `index`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.storage.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Bytes currently held on the heap.
    pub fn heap_bytes(&self) -> usize {
        self.storage.heap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
    struct Packet {
        id: u32,
        value: f32,
    }

    #[test]
    fn zeroed_basic_operations() -> Result<(), ContainerError> {
        let mut c = Container::<Packet>::zeroed(2);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert_eq!(c.get(0)?, &Packet { id: 0, value: 0.0 });

        let p = Packet { id: 3, value: 30.0 };
        *c.get_mut(1)? = p;
        assert_eq!(c.get(1)?, &p);

        c.get_mut(0)?.value = 99.0;
        assert_eq!(c.get(0)?.value, 99.0);

        Ok(())
    }

    #[test]
    fn out_of_bounds_leaves_contents() {
        let mut c = Container::<u64>::zeroed(2);
        assert_eq!(c.get_mut(2), Err(ContainerError::OutOfBounds(2)));
        assert_eq!(c.get(5), Err(ContainerError::OutOfBounds(5)));
        assert_eq!(c.as_slice(), &[0, 0]);
    }

    #[test]
    fn inline_word_round_trip() -> Result<(), ContainerError> {
        let mut c = Container::<u64>::zeroed(1);
        assert_eq!(c.heap_bytes(), 0);
        *c.get_mut(0)? |= 1 << 5;
        assert_eq!(c.as_slice(), &[1 << 5]);
        Ok(())
    }

    #[test]
    fn heap_bytes_cover_words() {
        let c = Container::<u64>::zeroed(16);
        assert!(c.heap_bytes() >= 16 * 8);
    }

    #[test]
    fn empty_container() {
        let c = Container::<u8>::zeroed(0);
        assert!(c.is_empty());
        assert!(c.get(0).is_err());
    }
}
