use proptest::prelude::*;
use scarf_core::json::{encode_properties, to_json};
use scarf_core::{Properties, PropertyValue};

fn scalar() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        Just(PropertyValue::Null),
        any::<bool>().prop_map(PropertyValue::Bool),
        any::<i64>().prop_map(PropertyValue::Int),
        any::<u64>().prop_map(PropertyValue::UInt),
        any::<f64>().prop_map(PropertyValue::Float),
        ".{0,20}".prop_map(PropertyValue::Text),
    ]
}

fn nested() -> impl Strategy<Value = PropertyValue> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(PropertyValue::List),
            prop::collection::vec((".{0,8}", inner), 0..4)
                .prop_map(|entries| PropertyValue::map(entries)),
            prop::collection::vec(any::<u8>(), 0..6).prop_map(PropertyValue::Bytes),
        ]
    })
}

fn properties() -> impl Strategy<Value = Properties> {
    prop::collection::vec(("[a-z_]{1,10}", nested()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn top_level_output_is_a_valid_object(props in properties()) {
        let json = encode_properties(&props);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = parsed.as_object().unwrap();
        prop_assert_eq!(object.len(), props.len());
    }

    #[test]
    fn top_level_values_are_strings_or_null(props in properties()) {
        let json = encode_properties(&props);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        for (key, value) in props.iter() {
            let wire = &parsed[key];
            if value.is_null() {
                prop_assert!(wire.is_null());
            } else {
                let expected = value.to_string();
                prop_assert_eq!(wire.as_str(), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn key_order_matches_insertion_order(props in properties()) {
        let json = encode_properties(&props);
        let mut cursor = 0;
        for key in props.keys() {
            let needle = format!("{}:", serde_json::to_string(key).unwrap());
            let found = json[cursor..].find(&needle);
            prop_assert!(found.is_some(), "key {} missing or out of order in {}", key, json);
            cursor += found.unwrap() + needle.len();
        }
    }

    #[test]
    fn encoding_is_deterministic(props in properties()) {
        prop_assert_eq!(encode_properties(&props), encode_properties(&props.clone()));
    }

    #[test]
    fn general_encoder_output_parses(value in nested()) {
        let json = to_json(&value);
        prop_assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok(), "invalid: {}", json);
    }

    #[test]
    fn text_roundtrips_through_a_json_parser(s in "\\PC*|[\\x00-\\x1f\"\\\\]{0,10}") {
        let props = Properties::new().with("s", s.as_str());
        let parsed: serde_json::Value = serde_json::from_str(&encode_properties(&props)).unwrap();
        prop_assert_eq!(parsed["s"].as_str(), Some(s.as_str()));
    }
}
