use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::{OpaqueInfo, ReflectKind, Type, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::value::Value;

/// Implement [`Reflect`] for `Default + PartialEq + Display` leaf types.
///
/// `$to_value` turns `&Self` into a [`Value`].
macro_rules! impl_scalar_reflect {
    ($kind:ident, $to_value:expr => $($ty:ty),+ $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> TypeInfo {
                TypeInfo::Opaque(OpaqueInfo::new(Type::of::<Self>()))
            }
        }

        impl Reflect for $ty {
            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::$kind
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Opaque(self)
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                *self == <$ty as Default>::default()
            }

            #[inline]
            fn reflect_zero(&self) -> Box<dyn Reflect> {
                Box::new(<$ty as Default>::default())
            }

            #[inline]
            fn to_value(&self) -> Value {
                let to_value: fn(&$ty) -> Value = $to_value;
                to_value(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )+};
}

impl_scalar_reflect!(Bool, |v| Value::Bool(*v) => bool);
impl_scalar_reflect!(Char, |v| Value::Char(*v) => char);
impl_scalar_reflect!(Int, |v| Value::from(*v) => i8, i16, i32, i64, isize);
impl_scalar_reflect!(Uint, |v| Value::from(*v) => u8, u16, u32, u64, usize);
impl_scalar_reflect!(Float, |v| Value::from(*v) => f32, f64);
impl_scalar_reflect!(String, |v| Value::from(v.as_str()) => String);
impl_scalar_reflect!(String, |v| Value::from(*v) => &'static str);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::value::Value;

    #[test]
    fn zero_values() {
        assert!(0_i64.reflect_is_zero());
        assert!(!(-1_i8).reflect_is_zero());
        assert!((-0.0_f64).reflect_is_zero());
        assert!(!f32::NAN.reflect_is_zero());
        assert!('\0'.reflect_is_zero());
        assert!(String::new().reflect_is_zero());
        assert!("".reflect_is_zero());
        assert!(!"a".reflect_is_zero());
    }

    #[test]
    fn kinds_and_values() {
        assert_eq!(true.reflect_kind(), ReflectKind::Bool);
        assert_eq!(3_usize.reflect_kind(), ReflectKind::Uint);
        assert_eq!("s".reflect_kind(), ReflectKind::String);

        assert_eq!(3_usize.to_value(), Value::Uint(3));
        assert_eq!((-2_isize).to_value(), Value::Int(-2));
        assert_eq!(String::from("x").to_value(), Value::from("x"));
        assert_eq!(1.5_f32.to_value(), Value::Float(1.5));
    }

    #[test]
    fn display() {
        assert!('c'.reflect_display().is_none());
        assert!(String::from("x").reflect_display().is_none());
    }
}
