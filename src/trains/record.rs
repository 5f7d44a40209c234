//! Train records and the in-memory operations on them

use serde::{Deserialize, Serialize};

/// One registered train. Field names are the on-disk keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    #[serde(default)]
    pub departure_point: String,
    #[serde(default)]
    pub number_train: String,
    #[serde(default)]
    pub time_departure: String,
    #[serde(default)]
    pub destination: String,
}

impl Train {
    pub fn new(
        departure_point: impl Into<String>,
        number_train: impl Into<String>,
        time_departure: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            departure_point: departure_point.into(),
            number_train: number_train.into(),
            time_departure: time_departure.into(),
            destination: destination.into(),
        }
    }
}

pub fn add_train(trains: &mut Vec<Train>, train: Train) {
    trains.push(train);
}

/// Trains whose destination equals `point`, ignoring case on both sides.
pub fn select_trains<'a>(trains: &'a [Train], point: &str) -> Vec<&'a Train> {
    let wanted = point.to_lowercase();
    trains
        .iter()
        .filter(|t| t.destination.to_lowercase() == wanted)
        .collect()
}
