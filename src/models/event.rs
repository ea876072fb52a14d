use serde::{Deserialize, Serialize};

/// Envelope returned by the Ticketmaster Discovery events endpoint.
/// Searches with no hits omit `_embedded` entirely.
#[derive(Debug, Deserialize, Default)]
pub struct EventResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: EventList,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Event {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub dates: EventDates,
    #[serde(rename = "_embedded", default)]
    pub embedded: EventVenues,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EventDates {
    #[serde(default)]
    pub start: EventStart,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub status: EventStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventStart {
    #[serde(default)]
    pub local_date: String,
    #[serde(rename = "dateTBD", default)]
    pub date_tbd: bool,
    #[serde(rename = "timeTBA", default)]
    pub time_tba: bool,
    #[serde(default)]
    pub no_specific_time: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EventStatus {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EventVenues {
    #[serde(default)]
    pub venues: Vec<Venue>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub city: NamedPlace,
    #[serde(default)]
    pub state: NamedPlace,
    #[serde(default)]
    pub address: VenueAddress,
    #[serde(default)]
    pub location: VenueCoordinates,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct NamedPlace {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VenueAddress {
    #[serde(default)]
    pub line1: String,
}

// Ticketmaster sends coordinates as strings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VenueCoordinates {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}
