use super::utils::impl_reflect_for_hashmap;

impl_reflect_for_hashmap!(::std::collections::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Map;

    #[test]
    fn std_hash_map() {
        let mut map: HashMap<String, u8> = HashMap::new();
        assert!(map.reflect_is_zero());

        map.insert(String::from("a"), 1);
        let key = String::from("a");
        assert_eq!(Map::get(&map, &key).and_then(|v| v.downcast_ref::<u8>()), Some(&1));
        assert!(Map::get(&map, &1_u8).is_none());

        let info = <HashMap<String, u8> as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Map);
    }
}
