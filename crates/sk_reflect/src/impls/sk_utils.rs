use super::utils::impl_reflect_for_hashmap;

impl_reflect_for_hashmap!(::sk_utils::hash::hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use sk_utils::hash::HashMap;

    use crate::Reflect;
    use crate::value::Value;

    #[test]
    fn fixed_hash_map() {
        let mut map: HashMap<u32, String> = HashMap::default();
        map.insert(7, String::from("x"));

        assert_eq!(map.to_value().get("7"), Some(&Value::from("x")));
        assert!(!map.reflect_is_zero());
    }
}
