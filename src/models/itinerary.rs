use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

// Missing and null fields both decode to the empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user's multi-day plan. Stored verbatim, one document per submission.
///
/// Missing or null fields decode to empty values; a field of the wrong JSON
/// type is a decode error.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_plans: Vec<DayPlan>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DayPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: EventLocation,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EventLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_uses_camel_case_keys() {
        let itinerary: Itinerary = serde_json::from_value(json!({
            "startDate": "2024-05-01",
            "dayPlans": [
                {"time": "10:00", "location": {"name": "Park", "url": "x"}},
                {"time": "13:00", "location": {"name": "Museum", "url": "y"}}
            ]
        }))
        .unwrap();

        assert_eq!(itinerary.start_date, "2024-05-01");
        assert_eq!(itinerary.day_plans.len(), 2);
        // Caller order is kept
        assert_eq!(itinerary.day_plans[0].location.name, "Park");
        assert_eq!(itinerary.day_plans[1].location.name, "Museum");
        assert!(itinerary.id.is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let itinerary: Itinerary = serde_json::from_value(json!({})).unwrap();
        assert_eq!(itinerary, Itinerary::default());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let itinerary: Itinerary = serde_json::from_value(json!({
            "startDate": null,
            "dayPlans": [{"time": null, "location": null}, {"time": "9:00", "location": {"name": null, "url": "u"}}]
        }))
        .unwrap();

        assert_eq!(itinerary.start_date, "");
        assert_eq!(itinerary.day_plans[0], DayPlan::default());
        assert_eq!(itinerary.day_plans[1].location.name, "");
        assert_eq!(itinerary.day_plans[1].location.url, "u");

        let empty: Itinerary = serde_json::from_value(json!({"dayPlans": null})).unwrap();
        assert!(empty.day_plans.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = serde_json::from_value::<Itinerary>(json!({"dayPlans": "not-an-array"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_missing_id() {
        let itinerary = Itinerary {
            id: None,
            start_date: "2024-05-01".to_string(),
            day_plans: vec![],
        };
        let value = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(value, json!({"startDate": "2024-05-01", "dayPlans": []}));
    }
}
