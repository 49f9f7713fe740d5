use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::zero_of;
use crate::info::{PointerInfo, ReflectKind, Type, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectMut, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Box<T>

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new(Type::of::<Self>(), T::type_info))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        Box::new(Box::new(zero_of::<T>(self)))
    }

    #[inline]
    fn reflect_display(&self) -> Option<&dyn fmt::Display> {
        T::reflect_display(self)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(T::as_reflect(self))
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(T::as_reflect_mut(self))
    }
}

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

// A placeholder that can hold any value. Its static pointee is opaque, so
// only the value it holds at runtime tells what it is.

impl Typed for Box<dyn Reflect> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new(
            Type::of::<Self>(),
            <dyn Reflect as Typed>::type_info,
        ))
    }
}

impl Reflect for Box<dyn Reflect> {
    /// Accepts a value of any type, a boxed placeholder is unwrapped first.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = match value.take::<Box<dyn Reflect>>() {
            Ok(inner) => inner,
            Err(value) => value,
        };
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        (**self).reflect_is_zero()
    }

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        let zero: Box<dyn Reflect> = (**self).reflect_zero();
        Box::new(zero)
    }

    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    #[inline]
    fn reflect_display(&self) -> Option<&dyn fmt::Display> {
        (**self).reflect_display()
    }
}

impl Pointer for Box<dyn Reflect> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::value::Value;

    #[test]
    fn box_is_transparent() {
        assert!(Box::new(0_u8).reflect_is_zero());
        assert!(!Box::new(1_u8).reflect_is_zero());
        assert_eq!(Box::new(1_u8).to_value(), Value::Uint(1));

        let zero = Box::new(String::from("a")).reflect_zero();
        assert_eq!(zero.take::<Box<String>>().unwrap().as_str(), "");
    }

    #[test]
    fn placeholder() {
        let mut holder: Box<dyn Reflect> = Box::new(7_i32);
        let holder_ref: &dyn Reflect = &holder;
        assert_eq!(holder_ref.reflect_kind(), ReflectKind::Pointer);

        Reflect::set(&mut holder, Box::new(String::from("now a string"))).unwrap();
        assert!((*holder).is::<String>());

        let info = <Box<dyn Reflect> as Typed>::type_info();
        assert_eq!(info.strip_pointer().kind(), ReflectKind::Opaque);

        let zero = Reflect::reflect_zero(&holder);
        let zero = zero.take::<Box<dyn Reflect>>().unwrap();
        assert!((*zero).is::<String>());
    }
}
