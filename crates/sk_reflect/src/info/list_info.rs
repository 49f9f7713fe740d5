use crate::info::{Type, TypeInfo};

// -----------------------------------------------------------------------------
// ListInfo

/// Type information for growable sequences such as `Vec<T>`.
#[derive(Debug, Clone, Copy)]
pub struct ListInfo {
    ty: Type,
    item: fn() -> TypeInfo,
}

impl ListInfo {
    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new(ty: Type, item: fn() -> TypeInfo) -> Self {
        Self { ty, item }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item(&self) -> TypeInfo {
        (self.item)()
    }
}

// -----------------------------------------------------------------------------
// ArrayInfo

/// Type information for fixed-size arrays `[T; N]`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayInfo {
    ty: Type,
    item: fn() -> TypeInfo,
    len: usize,
}

impl ArrayInfo {
    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub const fn new(ty: Type, item: fn() -> TypeInfo, len: usize) -> Self {
        Self { ty, item, len }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item(&self) -> TypeInfo {
        (self.item)()
    }

    /// Returns the fixed length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }
}
