use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::info::{MapInfo, Type, TypeInfo, Typed};
use crate::ops::{Map, MapIter};
use crate::reflection::impl_reflect_cast_fn;

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> TypeInfo {
        TypeInfo::Map(MapInfo::new(
            Type::of::<Self>(),
            K::type_info,
            V::type_info,
        ))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    #[inline]
    fn reflect_zero(&self) -> Box<dyn Reflect> {
        Box::new(BTreeMap::<K, V>::new())
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    #[inline]
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(|key| BTreeMap::get(self, key))
            .map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            BTreeMap::iter(self)
                .map(|(key, value)| (key.as_reflect(), value.as_reflect())),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::value::{Value, ValueMap};

    #[test]
    fn map_value_renders_keys() {
        let mut map = BTreeMap::new();
        map.insert(2_u8, 'b');
        map.insert(1_u8, 'a');

        let mut expected = ValueMap::new();
        expected.insert(String::from("1"), Value::Char('a'));
        expected.insert(String::from("2"), Value::Char('b'));

        assert_eq!(map.to_value(), Value::Map(expected));
        assert!(!map.reflect_is_zero());
        assert!(BTreeMap::<u8, u8>::new().reflect_is_zero());
    }
}
