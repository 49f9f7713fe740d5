use crate::info::TypeInfo;

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use sk_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<Option<u8>> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.list_item().unwrap();
/// assert_eq!(item.kind(), ReflectKind::Pointer);
/// assert!(item.strip_pointer().ty().is::<u8>());
/// ```
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> TypeInfo;
}

/// Dynamic dispatch for [`Typed`].
///
/// Since [`Typed`] contains static methods, it cannot be made into a trait object.
/// This trait provides an object-safe alternative through a blanket impl
/// for all types that implement [`Typed`].
///
/// It's a supertrait of [`Reflect`](crate::Reflect), so `dyn Reflect` can
/// always report the info of its underlying type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> TypeInfo {
        T::type_info()
    }
}
