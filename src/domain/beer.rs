use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerStyle::Lager),
            "PILSNER" => Ok(BeerStyle::Pilsner),
            "STOUT" => Ok(BeerStyle::Stout),
            "GOSE" => Ok(BeerStyle::Gose),
            "PORTER" => Ok(BeerStyle::Porter),
            "ALE" => Ok(BeerStyle::Ale),
            "WHEAT" => Ok(BeerStyle::Wheat),
            "IPA" => Ok(BeerStyle::Ipa),
            "PALE_ALE" => Ok(BeerStyle::PaleAle),
            "SAISON" => Ok(BeerStyle::Saison),
            other => Err(DomainError::Internal(format!("unknown beer style '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Beer {
    pub id: Uuid,
    pub version: i32,
    pub name: String,
    pub style: BeerStyle,
    pub upc: i64,
    pub price: BigDecimal,
    pub quantity_on_hand: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_its_own_name() {
        for style in [BeerStyle::Lager, BeerStyle::Ipa, BeerStyle::PaleAle, BeerStyle::Saison] {
            assert_eq!(style.as_str().parse::<BeerStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_style_is_internal_error() {
        let err = "DUNKEL".parse::<BeerStyle>().unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[test]
    fn style_serializes_upper_snake_case() {
        let json = serde_json::to_string(&BeerStyle::PaleAle).unwrap();
        assert_eq!(json, "\"PALE_ALE\"");
    }
}
