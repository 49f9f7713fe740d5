// -----------------------------------------------------------------------------
// For normal HashMap

macro_rules! impl_reflect_for_hashmap {
    ($ty:path) => {
        impl<K, V, S> $crate::info::Typed for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: ::core::hash::BuildHasher + Default + Send + Sync + 'static,
        {
            fn type_info() -> $crate::info::TypeInfo {
                $crate::info::TypeInfo::Map($crate::info::MapInfo::new(
                    $crate::info::Type::of::<Self>(),
                    <K as $crate::info::Typed>::type_info,
                    <V as $crate::info::Typed>::type_info,
                ))
            }
        }

        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: ::core::hash::BuildHasher + Default + Send + Sync + 'static,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                Self::is_empty(self)
            }

            #[inline]
            fn reflect_zero(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(Self::default())
            }
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: ::core::hash::BuildHasher + Default + Send + Sync + 'static,
        {
            #[inline]
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(|key| Self::get(self, key))
                    .map(|value| value as &dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> $crate::ops::MapIter<'_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(key, value)| {
                    (key as &dyn $crate::Reflect, value as &dyn $crate::Reflect)
                }))
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
