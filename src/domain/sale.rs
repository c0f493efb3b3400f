// Sale record and filter criteria domain models
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One transaction as loaded from the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub category: String,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub salesperson: String,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Region {
    #[default]
    Brasil,
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Brasil,
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Brasil => "Brasil",
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    /// Value sent as `regiao`; the whole country means no constraint.
    pub fn query_value(&self) -> String {
        match self {
            Region::Brasil => String::new(),
            other => other.name().to_lowercase(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region '{}'", self.0)
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("all") {
            return Ok(Region::Brasil);
        }
        Region::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRegion(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearFilter {
    #[default]
    AllTime,
    Year(i32),
}

impl YearFilter {
    pub fn query_value(&self) -> String {
        match self {
            YearFilter::AllTime => String::new(),
            YearFilter::Year(year) => year.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterCriteria {
    pub region: Region,
    pub year: YearFilter,
    pub salespeople: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new(region: Region, year: YearFilter, salespeople: BTreeSet<String>) -> Self {
        Self {
            region,
            year,
            salespeople,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!("sudeste".parse::<Region>().unwrap(), Region::Sudeste);
        assert_eq!("CENTRO-OESTE".parse::<Region>().unwrap(), Region::CentroOeste);
        assert_eq!("Brasil".parse::<Region>().unwrap(), Region::Brasil);
        assert_eq!("all".parse::<Region>().unwrap(), Region::Brasil);
        assert_eq!("".parse::<Region>().unwrap(), Region::Brasil);
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_query_value() {
        assert_eq!(Region::Brasil.query_value(), "");
        assert_eq!(Region::CentroOeste.query_value(), "centro-oeste");
        assert_eq!(Region::Sul.query_value(), "sul");
    }

    #[test]
    fn test_region_serializes_by_display_name() {
        assert_eq!(serde_json::to_string(&Region::CentroOeste).unwrap(), "\"Centro-Oeste\"");
        for region in Region::ALL {
            assert_eq!(serde_json::to_value(region).unwrap(), region.name());
        }
    }

    #[test]
    fn test_year_query_value() {
        assert_eq!(YearFilter::AllTime.query_value(), "");
        assert_eq!(YearFilter::Year(2022).query_value(), "2022");
    }
}
