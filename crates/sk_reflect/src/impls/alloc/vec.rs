use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{ListInfo, Type, TypeInfo, Typed};
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_for_list {
    ($ty:ident, |$list:ident| $slices:expr, |$list_mut:ident| $slices_mut:expr) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> TypeInfo {
                TypeInfo::List(ListInfo::new(Type::of::<Self>(), T::type_info))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                $ty::is_empty(self)
            }

            #[inline]
            fn reflect_zero(&self) -> Box<dyn Reflect> {
                Box::new($ty::<T>::new())
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                let $list = self;
                $slices.get(index).map(Reflect::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                let $list_mut = self;
                $slices_mut.get_mut(index).map(Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }
    };
}

// `Vec` only reaches `get` through its slice, name the slice explicitly so
// the call cannot resolve to `List::get`.
impl_reflect_for_list!(Vec, |v| v.as_slice(), |v| v.as_mut_slice());
impl_reflect_for_list!(VecDeque, |v| v, |v| v);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::List;

    #[test]
    fn empty_is_zero() {
        assert!(Vec::<u8>::new().reflect_is_zero());
        assert!(!vec![0_u8].reflect_is_zero());
        assert!(VecDeque::<u8>::new().reflect_is_zero());
    }

    #[test]
    fn list_access() {
        let mut deque = VecDeque::from([1_u32, 2]);
        *List::get_mut(&mut deque, 1).unwrap().downcast_mut::<u32>().unwrap() = 5;

        assert_eq!(List::len(&deque), 2);
        assert_eq!(deque, [1, 5]);

        let info = <Vec<VecDeque<u8>> as Typed>::type_info();
        assert_eq!(info.list_item().map(|i| i.kind()), Some(ReflectKind::List));
    }
}
