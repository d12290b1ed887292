use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// One row of a journey-history CSV export, all fields as raw text.
///
/// Ephemeral: created while loading source files and consumed entirely by the
/// cleaner. Empty cells deserialize to `None`, never to sentinel strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Travel date, day-first (`DD/MM/YYYY` or `DD-Mon-YYYY`).
    #[serde(rename = "Date")]
    pub date: Option<String>,
    /// Touch-in clock time, no date component.
    #[serde(rename = "Start Time")]
    pub start_time: Option<String>,
    /// Touch-out clock time, no date component.
    #[serde(rename = "End Time")]
    pub end_time: Option<String>,
    /// Free text: `"<Origin> to <Destination>"`, a bus-journey phrase, or a
    /// non-journey ledger event.
    #[serde(rename = "Journey/Action")]
    pub action: Option<String>,
    /// Currency-formatted fare, symbol optional.
    #[serde(rename = "Charge")]
    pub charge: Option<String>,
    /// Currency-formatted credit amount.
    #[serde(rename = "Credit")]
    pub credit: Option<String>,
    /// Card balance after the row's event.
    #[serde(rename = "Balance")]
    pub balance: Option<String>,
    /// Free-text annotation.
    #[serde(rename = "Note")]
    pub note: Option<String>,
}

/// A single cleaned travel event.
///
/// Produced at most once per surviving raw row and never mutated afterwards.
/// A journey is in exactly one of two shapes: rail/underground (`origin` and
/// `destination` present, `bus_route` absent) or bus (`bus_route` present,
/// `origin` absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    /// Touch-in timestamp, always present.
    pub start_time: NaiveDateTime,
    /// Touch-out timestamp, corrected for midnight rollover.
    pub end_time: Option<NaiveDateTime>,
    /// `end_time - start_time` when both are present. Non-negative.
    #[serde(with = "duration_seconds")]
    pub duration: Option<TimeDelta>,
    /// Origin station name. Absent for bus journeys.
    pub origin: Option<String>,
    /// Destination station or stop name.
    pub destination: Option<String>,
    /// Bus route code extracted from the action text.
    pub bus_route: Option<String>,
    /// Fare charged, in pounds.
    pub charge: Option<f64>,
    /// Free-text annotation carried over from the source row.
    pub note: Option<String>,
}

impl Journey {
    /// Whether this journey was reclassified as a bus journey.
    pub fn is_bus(&self) -> bool {
        self.bus_route.is_some()
    }
}

/// Serialize `Option<TimeDelta>` as whole seconds.
mod duration_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(|d| d.num_seconds()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeDelta>, D::Error> {
        let secs = Option::<i64>::deserialize(deserializer)?;
        Ok(secs.map(TimeDelta::seconds))
    }
}
