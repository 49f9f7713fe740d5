use crate::info::{Type, TypeInfo};

/// Type information for maps such as `BTreeMap<K, V>`.
#[derive(Debug, Clone, Copy)]
pub struct MapInfo {
    ty: Type,
    key: fn() -> TypeInfo,
    value: fn() -> TypeInfo,
}

impl MapInfo {
    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new(ty: Type, key: fn() -> TypeInfo, value: fn() -> TypeInfo) -> Self {
        Self { ty, key, value }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key(&self) -> TypeInfo {
        (self.key)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value(&self) -> TypeInfo {
        (self.value)()
    }
}
