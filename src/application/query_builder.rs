// Translates filter selections into data source query parameters
use crate::domain::sale::{Region, YearFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    pub regiao: String,
    pub ano: String,
}

impl SalesQuery {
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("regiao", self.regiao.as_str()), ("ano", self.ano.as_str())]
    }
}

pub fn build_query(region: Region, year: YearFilter) -> SalesQuery {
    SalesQuery {
        regiao: region.query_value(),
        ano: year.query_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_unconstrained() {
        let query = build_query(Region::Brasil, YearFilter::AllTime);
        assert_eq!(query.pairs(), [("regiao", ""), ("ano", "")]);
    }

    #[test]
    fn test_build_query_region_and_year() {
        let query = build_query("NORDESTE".parse().unwrap(), YearFilter::Year(2021));
        assert_eq!(query.regiao, "nordeste");
        assert_eq!(query.ano, "2021");
    }
}
