use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::{ArrayInfo, ListInfo, MapInfo, OpaqueInfo, PointerInfo, ReflectKind, StructInfo};

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and full path.
///
/// Equality and hashing only use the [`TypeId`].
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// # use sk_reflect::info::Type;
/// let ty = Type::of::<String>();
///
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full path of the type, as given by [`core::any::type_name`].
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// A `TypeInfo` is a small `Copy` value. Composite kinds refer to the types
/// they contain through function pointers, call them to walk deeper.
///
/// Scalars are described as [`OpaqueInfo`]: nothing inside them is
/// reachable through reflection.
///
/// # Examples
///
/// ```
/// use sk_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(<i32 as Typed>::type_info().kind(), ReflectKind::Opaque);
/// assert_eq!(<[u8; 4] as Typed>::type_info().kind(), ReflectKind::Array);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        /// Check infomation kind, can be used in const function.
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_list: List);
    impl_is_method!(is_array: Array);
    impl_is_method!(is_map: Map);
    impl_is_method!(is_pointer: Pointer);
    impl_is_method!(is_opaque: Opaque);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// Scalars report `Opaque` here, their runtime kind is only known
    /// through [`Reflect::reflect_kind`](crate::Reflect::reflect_kind).
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Removes one level of pointer indirection.
    ///
    /// Returns the pointee info for `Pointer`, `self` for every other kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use sk_reflect::info::{ReflectKind, Typed};
    ///
    /// let info = <Option<Box<u8>> as Typed>::type_info();
    /// assert_eq!(info.strip_pointer().kind(), ReflectKind::Pointer);
    /// assert_eq!(info.strip_pointer().strip_pointer().kind(), ReflectKind::Opaque);
    /// ```
    #[inline]
    pub fn strip_pointer(self) -> TypeInfo {
        match self {
            Self::Pointer(info) => info.pointee(),
            other => other,
        }
    }

    /// Returns the item info of a list or array.
    #[inline]
    pub fn list_item(&self) -> Option<TypeInfo> {
        match self {
            Self::List(info) => Some(info.item()),
            Self::Array(info) => Some(info.item()),
            _ => None,
        }
    }
}
