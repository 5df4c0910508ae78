use serde::{Deserialize, Deserializer, Serialize};

/// A purchase receipt as submitted by clients.
///
/// Every field may be absent on the wire; absent fields decode to empty values
/// and empty values are left out again when serialized.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub retailer: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub purchase_date: String, // YYYY-MM-DD
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub purchase_time: String, // HH:MM, 24h
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub total: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
}

// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointsResponse {
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer":"Target"}"#).expect("decode");
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.total.is_empty());
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(
            r#"{"retailer":null,"total":null,"items":[{"shortDescription":null,"price":"1.00"}]}"#,
        )
        .expect("decode");
        assert!(receipt.retailer.is_empty());
        assert!(receipt.total.is_empty());
        assert!(receipt.items[0].short_description.is_empty());
        assert_eq!(receipt.items[0].price, "1.00");

        let receipt: Receipt = serde_json::from_str(r#"{"items":null}"#).expect("decode");
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn empty_fields_are_omitted_when_serialized() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&receipt).expect("encode");
        assert_eq!(json, serde_json::json!({ "retailer": "Walgreens" }));
    }

    #[test]
    fn camel_case_field_names() {
        let receipt: Receipt = serde_json::from_str(
            r#"{"purchaseDate":"2022-01-02","purchaseTime":"08:13","items":[{"shortDescription":"Pepsi","price":"1.25"}]}"#,
        )
        .expect("decode");
        assert_eq!(receipt.purchase_date, "2022-01-02");
        assert_eq!(receipt.purchase_time, "08:13");
        assert_eq!(receipt.items[0].short_description, "Pepsi");
        assert_eq!(receipt.items[0].price, "1.25");
    }
}
