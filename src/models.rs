use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of the API root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

/// ISO3 code → country display name.
pub type CountryNames = BTreeMap<String, String>;

/// One available indicator series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Short identifier accepted by `get_country_data`, e.g. `M2_LCU`.
    pub name: String,
    /// World Bank series code, e.g. `FM.LBL.BMNY.CN`.
    pub code: String,
    pub description: String,
    pub unit: String,
}

/// Yearly observations of one indicator for one country.
///
/// `values[i]` is the observation for `years[i]`; `None` marks a missing year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryData {
    /// ISO3 code.
    pub country: String,
    pub country_name: String,
    pub indicator: String,
    pub description: String,
    pub unit: String,
    pub years: Vec<i32>,
    pub values: Vec<Option<f64>>,
}

impl CountryData {
    /// `(year, value)` pairs in server order.
    pub fn observations(&self) -> impl Iterator<Item = (i32, Option<f64>)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }

    /// Value for a single year. `None` if the year is not covered or has no data.
    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.observations()
            .find(|(y, _)| *y == year)
            .and_then(|(_, v)| v)
    }

    pub fn is_aligned(&self) -> bool {
        self.years.len() == self.values.len()
    }

    /// Years increase by exactly one from first to last.
    pub fn is_contiguous(&self) -> bool {
        self.years
            .windows(2)
            .all(|w| w[0].checked_add(1) == Some(w[1]))
    }
}
