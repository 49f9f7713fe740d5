use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{PointerInfo, Type, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;
use crate::value::Value;

// `Option<T>` is the nullable pointer: `None` is its zero value,
// `Some(zero)` is not.

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new(Type::of::<Self>(), T::type_info))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        Box::new(None::<T>)
    }

    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Reflect::to_value)
    }

    #[inline]
    fn reflect_display(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().and_then(Reflect::reflect_display)
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Pointer;
    use crate::value::Value;

    #[test]
    fn none_is_zero() {
        assert!(None::<u8>.reflect_is_zero());
        assert!(!Some(0_u8).reflect_is_zero());
        assert_eq!(Some(1_u8).reflect_kind(), ReflectKind::Pointer);

        let zero = Some(String::from("x")).reflect_zero();
        assert!(zero.downcast_ref::<Option<String>>().unwrap().is_none());
    }

    #[test]
    fn forwards_to_pointee() {
        let mut value = Some(3_i32);
        assert_eq!(value.to_value(), Value::Int(3));
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert!(value.reflect_display().is_none());

        *value.pointee_mut().unwrap().downcast_mut::<i32>().unwrap() = 4;
        assert_eq!(value, Some(4));
    }
}
