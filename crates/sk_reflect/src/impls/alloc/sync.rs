use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::impls::zero_of;
use crate::info::{PointerInfo, Type, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed> Typed for Arc<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new(Type::of::<Self>(), T::type_info))
    }
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        Box::new(Arc::new(zero_of::<T>(self)))
    }

    #[inline]
    fn reflect_display(&self) -> Option<&dyn fmt::Display> {
        T::reflect_display(self)
    }
}

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(T::as_reflect(self))
    }

    /// Returns `None` while the value is shared.
    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(Reflect::as_reflect_mut)
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn shared_arc_is_read_only() {
        let mut value = Arc::new(1_u16);
        assert!(value.pointee_mut().is_some());

        let other = Arc::clone(&value);
        assert!(value.pointee_mut().is_none());
        assert!(!other.reflect_is_zero());
    }
}
