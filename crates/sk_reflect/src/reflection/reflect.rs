use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, OpaqueInfo, ReflectKind, Type, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime introspection in [`sk_reflect`].
///
/// Rust types carry no runtime field information, so every type that can be
/// walked by structkit describes itself through this trait. It is object safe,
/// the engine only ever works with `&dyn Reflect` and `&mut dyn Reflect`.
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] for structs. It implements this trait
/// together with [`Typed`] and [`Struct`], and records the per-field metadata
/// (visibility, embedded flag, tag tables).
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on `Box<dyn Reflect>`
/// returns the container's type ID, not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use sk_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).ty_id() == TypeId::of::<i32>());   // Preferred method
/// ```
///
/// `Box<dyn Reflect>` is itself a [`Pointer`] to its content, so call
/// methods through `*x` when the content is meant.
///
/// # Kinds
///
/// [`reflect_kind`] distinguishes scalar kinds (`Int`, `String`, ...) from
/// composite ones, while [`reflect_ref`] and [`reflect_mut`] hand out the
/// matching view ([`Struct`], [`List`], [`Map`], [`Pointer`]). Scalars are
/// viewed as `Opaque`.
///
/// # Manual Implementation
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind  // e.g., ReflectKind::Struct, ReflectKind::List
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Kind(self)
/// }
///
/// fn reflect_zero(&self) -> Box<dyn Reflect> {
///     Box::new(Self::default())
/// }
/// ```
///
/// [`reflect_is_zero`], [`to_value`] and [`reflect_debug`] have default
/// implementations for every non-opaque kind.
///
/// [`sk_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Map`]: crate::ops::Map
/// [`Pointer`]: crate::ops::Pointer
/// [`reflect_kind`]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_is_zero`]: Reflect::reflect_is_zero
/// [`to_value`]: Reflect::to_value
/// [`reflect_debug`]: Reflect::reflect_debug
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use sk_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use sk_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// When you call `Box<dyn Reflect>::type_id`, it will return
    /// the [`TypeId`] of the entire container, instead of `dyn Reflect`.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full path of the underlying type, as given by
    /// [`core::any::type_name`].
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().ty().path()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the value back if its type differs from `Self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let mut x = 1_i32;
    ///
    /// assert!(x.set(Box::new(5_i32)).is_ok());
    /// assert!(x.set(Box::new(5_u8)).is_err());
    /// assert_eq!(x, 5);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the runtime [`ReflectKind`] of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(vec![1, 2, 3].reflect_kind(), ReflectKind::List);
    /// assert_eq!(String::new().reflect_kind(), ReflectKind::String);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view matching the kind of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view matching the kind of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns `true` if this value equals the zero value of its type.
    ///
    /// Numbers are zero when `== 0`, strings, lists and maps when empty,
    /// `Option` when `None`, and arrays and structs when every element is
    /// zero (private struct fields included). `Box` and `Arc` are transparent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// assert!(0_u8.reflect_is_zero());
    /// assert!(Vec::<i32>::new().reflect_is_zero());
    /// assert!(!Some(0_u8).reflect_is_zero());
    /// assert!([0, 0].reflect_is_zero());
    /// ```
    fn reflect_is_zero(&self) -> bool {
        match self.reflect_ref() {
            ReflectRef::Struct(s) => s.iter_fields().all(Reflect::reflect_is_zero),
            ReflectRef::List(l) => l.is_empty(),
            ReflectRef::Array(a) => a.iter().all(Reflect::reflect_is_zero),
            ReflectRef::Map(m) => m.is_empty(),
            ReflectRef::Pointer(p) => p.pointee().is_none_or(Reflect::reflect_is_zero),
            ReflectRef::Opaque(_) => false,
        }
    }

    /// Returns a new zero value of the same type.
    ///
    /// The returned box always holds a `Self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let zero = 17_i64.reflect_zero();
    ///
    /// assert_eq!(zero.downcast_ref::<i64>(), Some(&0));
    /// ```
    fn reflect_zero(&self) -> Box<dyn Reflect>;

    /// Takes a raw [`Value`] snapshot of this value.
    ///
    /// Structs become [`Value::Record`], lists and arrays [`Value::List`],
    /// maps [`Value::Map`] with their keys rendered as strings, and a null
    /// pointer becomes [`Value::Null`].
    fn to_value(&self) -> Value {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_to_value(data),
            ReflectRef::List(data) | ReflectRef::Array(data) => impls::list_to_value(data),
            ReflectRef::Map(data) => impls::map_to_value(data),
            ReflectRef::Pointer(data) => data.pointee().map_or(Value::Null, Reflect::to_value),
            ReflectRef::Opaque(_) => Value::Null,
        }
    }

    /// Returns the custom string conversion of this value, if it has one.
    ///
    /// Only types that opt in expose one: derived structs with
    /// `#[reflect(display)]`. `Option`, `Box` and `Arc` forward to their
    /// pointee. Built-in scalars and strings return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// assert!(42_u8.reflect_display().is_none());
    /// assert!(vec![1].reflect_display().is_none());
    /// ```
    #[inline]
    fn reflect_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_path)"` by default.
    ///
    /// For other types, see:
    /// - [`crate::impls::struct_debug`]
    /// - [`crate::impls::list_debug`]
    /// - [`crate::impls::map_debug`]
    /// - [`crate::impls::pointer_debug`]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) | ReflectRef::Array(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x: Box<i32> = x.downcast::<i32>().unwrap();
    /// assert_eq!(*x, 10);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl Typed for dyn Reflect {
    /// This is the [`TypeInfo`] of [`dyn Reflect`],
    /// not the [`TypeInfo`] of the underlying data.
    ///
    /// Use [`DynamicTyped::reflect_type_info`] to get underlying [`TypeInfo`].
    ///
    /// [`dyn Reflect`]: crate::Reflect
    fn type_info() -> TypeInfo {
        TypeInfo::Opaque(OpaqueInfo::new(Type::of::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement some common methos like `reflect_kind` and `reflect_ref`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn downcast_and_take() {
        let boxed: Box<dyn Reflect> = Box::new(String::from("a"));
        assert!(boxed.is::<String>());

        let boxed = boxed.downcast::<i32>().unwrap_err();
        assert_eq!(boxed.take::<String>().unwrap(), "a");
    }

    #[test]
    fn set_checks_type() {
        let mut v = vec![1_u8];
        let rejected = v.set(Box::new(3_u8)).unwrap_err();
        assert_eq!(rejected.downcast_ref::<u8>(), Some(&3));

        v.set(Box::new(vec![4_u8, 5])).unwrap();
        assert_eq!(v, [4, 5]);
    }

    #[test]
    fn debug_dyn() {
        let v = vec![1_i32, 2];
        let r: &dyn Reflect = &v;
        assert_eq!(alloc::format!("{r:?}"), "[1, 2]");
        assert_eq!(r.reflect_kind().to_string(), "List");
        assert_eq!(r.reflect_kind(), ReflectKind::List);
    }
}
