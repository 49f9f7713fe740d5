use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::zero_of;
use crate::info::{ArrayInfo, Type, TypeInfo, Typed};
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::Array(ArrayInfo::new(Type::of::<Self>(), T::type_info, N))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        Box::new(self.each_ref().map(zero_of))
    }
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::impls::zero_of;
    use crate::value::Value;

    #[test]
    fn array_zero() {
        assert!([0_u8; 3].reflect_is_zero());
        assert!(![0_u8, 1].reflect_is_zero());
        assert!(<[u8; 0]>::default().reflect_is_zero());

        let zero = zero_of(&[String::from("a"), String::from("b")]);
        assert_eq!(zero, [String::new(), String::new()]);
    }

    #[test]
    fn array_value() {
        assert_eq!(
            [1_u8, 2].to_value(),
            Value::List(alloc::vec![Value::Uint(1), Value::Uint(2)])
        );
    }
}
