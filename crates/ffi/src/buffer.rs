//! Call-scoped views over caller owned memory.
use core::slice;

/// Borrowed view over a caller buffer.
///
/// The view lives no longer than the call that created it. The gateway never
/// keeps, copies or frees the memory behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> RawBuffer<'a> {
    /// Wraps an already borrowed slice.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Creates a view from a pointer and length handed over a C boundary.
    ///
    /// A null pointer is only accepted together with a zero length, and means
    /// the empty buffer. Returns `None` for a null pointer with a non-zero
    /// length or a length that cannot describe a Rust slice.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must point to `len` initialized bytes that stay
    /// valid and are not mutated for `'a`.
    pub unsafe fn from_raw(ptr: *const u8, len: usize) -> Option<Self> {
        if ptr.is_null() {
            return (len == 0).then_some(Self::new(&[]));
        }
        if len > isize::MAX as usize {
            return None;
        }
        // SAFETY: non-null and valid for `len` bytes per the caller contract.
        Some(Self::new(unsafe { slice::from_raw_parts(ptr, len) }))
    }

    /// Returns the viewed bytes.
    pub const fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the length of the view.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the view is empty.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for RawBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
