use serde::{Deserialize, Deserializer};

/// Rows of a list endpoint.
///
/// The backend wraps lists three different ways depending on the endpoint:
/// a bare array, `{"items": [...]}` or `{"ok": true, "data": [...], "params": {...}}`.
/// All three decode into the same `Listing`, so callers only ever see rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T>(pub Vec<T>);

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for Listing<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<T> {
            Bare(Vec<T>),
            Items { items: Vec<T> },
            Data { data: Vec<T> },
        }

        let rows = match Wire::<T>::deserialize(deserializer)? {
            Wire::Bare(rows) => rows,
            Wire::Items { items } => items,
            Wire::Data { data } => data,
        };
        Ok(Listing(rows))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::Listing;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Row {
        customer_city: String,
    }

    fn rows(body: serde_json::Value) -> Vec<Row> {
        serde_json::from_value::<Listing<Row>>(body).unwrap().into_vec()
    }

    #[test]
    fn all_wire_shapes_decode_to_the_same_rows() {
        let expected = vec![Row { customer_city: "sao_paulo".into() }];

        assert_eq!(rows(serde_json::json!([{"customer_city": "sao_paulo"}])), expected);
        assert_eq!(rows(serde_json::json!({"items": [{"customer_city": "sao_paulo"}]})), expected);
        assert_eq!(
            rows(serde_json::json!({
                "ok": true,
                "params": {"limit": 10},
                "data": [{"customer_city": "sao_paulo"}]
            })),
            expected
        );
    }

    #[test]
    fn error_envelope_is_not_a_listing() {
        let outcome = serde_json::from_value::<Listing<Row>>(serde_json::json!({
            "ok": false,
            "error": "limit must be between 1 and 100"
        }));
        assert!(outcome.is_err());
    }
}
