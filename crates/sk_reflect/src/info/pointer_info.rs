use crate::info::{Type, TypeInfo};

/// Type information for a nullable or owning indirection
/// (`Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Reflect>`).
#[derive(Debug, Clone, Copy)]
pub struct PointerInfo {
    ty: Type,
    pointee: fn() -> TypeInfo,
}

impl PointerInfo {
    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new(ty: Type, pointee: fn() -> TypeInfo) -> Self {
        Self { ty, pointee }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the pointed-to type.
    #[inline]
    pub fn pointee(&self) -> TypeInfo {
        (self.pointee)()
    }
}
