use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, SerializeStruct, Serializer};

use crate::value::{RecordValue, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Char(v) => serializer.serialize_char(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser.serialize_entry(key, value)?;
                }
                ser.end()
            }
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for RecordValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut ser = serializer.serialize_struct(self.type_ident(), self.len())?;
        for (name, value) in self.fields() {
            ser.serialize_field(*name, value)?;
        }
        ser.end()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use crate::value::{RecordValue, Value, ValueMap};

    #[test]
    fn to_json() {
        let mut map = ValueMap::new();
        map.insert(String::from("name"), Value::from("A"));
        map.insert(String::from("tags"), Value::from(vec!["x", "y"]));
        map.insert(String::from("ratio"), Value::from(0.5_f64));
        map.insert(String::from("none"), Value::Null);
        map.insert(
            String::from("point"),
            Value::from(RecordValue::new("Point").with_field("x", Value::from(-1_i8))),
        );

        let json = serde_json::to_value(Value::Map(map)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "none": null,
                "point": { "x": -1 },
                "ratio": 0.5,
                "tags": ["x", "y"],
            })
        );
    }
}
