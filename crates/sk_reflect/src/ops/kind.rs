use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, by kind.
///
/// Arrays share the [`List`] view with lists. Scalars are `Opaque`.
///
/// # Examples
///
/// ```
/// use sk_reflect::{Reflect, ops::ReflectRef};
///
/// let value = vec![1, 2, 3];
/// let ReflectRef::List(list) = value.reflect_ref() else { unreachable!() };
///
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    ///
    /// `Opaque` views report `Opaque` even for scalars, use
    /// [`Reflect::reflect_kind`] for the precise runtime kind.
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

    /// Returns the [`Struct`] view, if any.
    #[inline]
    pub const fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`List`] view of a list or array, if any.
    #[inline]
    pub const fn as_list(self) -> Option<&'a dyn List> {
        match self {
            Self::List(value) | Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Map`] view, if any.
    #[inline]
    pub const fn as_map(self) -> Option<&'a dyn Map> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Pointer`] view, if any.
    #[inline]
    pub const fn as_pointer(self) -> Option<&'a dyn Pointer> {
        match self {
            Self::Pointer(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, by kind.
///
/// See [`ReflectRef`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
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

    /// Returns the [`Struct`] view, if any.
    #[inline]
    pub fn as_struct(self) -> Option<&'a mut dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`List`] view of a list or array, if any.
    #[inline]
    pub fn as_list(self) -> Option<&'a mut dyn List> {
        match self {
            Self::List(value) | Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Pointer`] view, if any.
    #[inline]
    pub fn as_pointer(self) -> Option<&'a mut dyn Pointer> {
        match self {
            Self::Pointer(value) => Some(value),
            _ => None,
        }
    }
}
