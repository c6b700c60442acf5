//! Property and value encoders.

use super::escape::push_quoted;
use crate::properties::{Properties, PropertyValue};

/// Encode a top-level event object.
///
/// Keys follow the map's insertion order. `Null` is written as JSON `null`;
/// every other value is written as a JSON string of its display form, so
/// `1` becomes `"1"`, `true` becomes `"true"` and NaN becomes `"NaN"`.
pub fn encode_properties(props: &Properties) -> String {
    let mut out = String::with_capacity(2 + props.len() * 16);
    out.push('{');
    for (i, (key, value)) in props.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_quoted(&mut out, key);
        out.push(':');
        match value {
            PropertyValue::Null => out.push_str("null"),
            PropertyValue::Text(s) => push_quoted(&mut out, s),
            v => push_quoted(&mut out, &v.to_string()),
        }
    }
    out.push('}');
    out
}

/// Encode any value with native JSON structure.
pub fn to_json(value: &PropertyValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Canonical text of a finite float. Integral values keep a `.0`; very
/// large or small magnitudes use exponent notation (`1e21`).
pub fn format_float(x: f64) -> String {
    format!("{x:?}")
}

fn write_value(out: &mut String, value: &PropertyValue) {
    match value {
        PropertyValue::Null => out.push_str("null"),
        PropertyValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        PropertyValue::Int(i) => out.push_str(&i.to_string()),
        PropertyValue::UInt(u) => out.push_str(&u.to_string()),
        PropertyValue::Float(x) if x.is_finite() => out.push_str(&format_float(*x)),
        PropertyValue::Float(_) => out.push_str("null"),
        PropertyValue::Text(s) => push_quoted(out, s),
        PropertyValue::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        PropertyValue::Bytes(bytes) => {
            out.push('[');
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&b.to_string());
            }
            out.push(']');
        }
        PropertyValue::Map(entries) => {
            out.push('{');
            let mut first = true;
            for (key, v) in entries {
                // Non-text keys have no JSON form; drop the entry.
                let PropertyValue::Text(key) = key else {
                    continue;
                };
                if !first {
                    out.push(',');
                }
                first = false;
                push_quoted(out, key);
                out.push(':');
                write_value(out, v);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_properties() {
        assert_eq!(encode_properties(&Properties::new()), "{}");
    }

    #[test]
    fn top_level_values_are_stringified() {
        let props = Properties::new().with("a", 1).with("b", true).with("c", 12.5);
        assert_eq!(
            encode_properties(&props),
            r#"{"a":"1","b":"true","c":"12.5"}"#
        );
    }

    #[test]
    fn top_level_null_stays_null() {
        let props = Properties::new()
            .with("n", PropertyValue::Null)
            .with("none", None::<i32>)
            .with("s", "x");
        assert_eq!(encode_properties(&props), r#"{"n":null,"none":null,"s":"x"}"#);
    }

    #[test]
    fn top_level_non_finite_floats_use_display_text() {
        let props = Properties::new()
            .with("nan", f64::NAN)
            .with("inf", f64::INFINITY)
            .with("ninf", f64::NEG_INFINITY);
        assert_eq!(
            encode_properties(&props),
            r#"{"nan":"NaN","inf":"Infinity","ninf":"-Infinity"}"#
        );
    }

    #[test]
    fn top_level_f32_is_not_widened() {
        let props = Properties::new().with("f32", 0.1f32);
        assert_eq!(encode_properties(&props), r#"{"f32":"0.1"}"#);
    }

    #[test]
    fn top_level_containers_are_stringified_json() {
        let props = Properties::new().with("tags", vec!["a", "b"]);
        assert_eq!(encode_properties(&props), r#"{"tags":"[\"a\",\"b\"]"}"#);
    }

    #[test]
    fn general_encoder_keeps_native_types() {
        let value = PropertyValue::map([
            ("n", PropertyValue::from(1)),
            ("f", PropertyValue::from(2.0)),
            ("b", PropertyValue::from(false)),
            ("l", PropertyValue::from(vec![PropertyValue::Null, "x".into()])),
        ]);
        assert_eq!(to_json(&value), r#"{"n":1,"f":2.0,"b":false,"l":[null,"x"]}"#);
    }

    #[test]
    fn general_encoder_drops_non_text_keys() {
        let value = PropertyValue::Map(vec![
            (PropertyValue::Int(1), PropertyValue::from("dropped")),
            (PropertyValue::from("kept"), PropertyValue::from("yes")),
            (PropertyValue::Null, PropertyValue::from("dropped")),
        ]);
        assert_eq!(to_json(&value), r#"{"kept":"yes"}"#);
    }

    #[test]
    fn general_encoder_non_finite_is_null() {
        let value = PropertyValue::from(vec![f64::INFINITY, f64::NAN, 0.5]);
        assert_eq!(to_json(&value), "[null,null,0.5]");
    }

    #[test]
    fn bytes_encode_as_number_array() {
        assert_eq!(to_json(&PropertyValue::bytes(vec![0u8, 127, 255])), "[0,127,255]");
        assert_eq!(to_json(&PropertyValue::bytes(Vec::new())), "[]");
    }
}
