use crate::info::Type;

/// Type information for values without reachable inner structure,
/// such as numbers, strings and `dyn Reflect`.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new(ty: Type) -> Self {
        Self { ty }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
