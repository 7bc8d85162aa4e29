use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An astrological house, 1 through 12.
///
/// Serialized as a JSON number. The model answers with `NUMBER`, so whole
/// floats such as `10.0` are accepted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct House(u8);

impl House {
    pub const FIRST: House = House(1);

    pub fn new(value: u8) -> Option<Self> {
        (1..=12).contains(&value).then_some(House(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for House {
    fn default() -> Self {
        House::FIRST
    }
}

impl TryFrom<f64> for House {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let invalid = || format!("house must be a whole number from 1 to 12, got {value}");
        if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
            return Err(invalid());
        }
        House::new(value as u8).ok_or_else(invalid)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.get()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    pub planet: String,
    pub sign: String,
    pub house: House,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

/// Geocentric (personality) and heliocentric (soul) placements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPositions {
    pub geocentric: Vec<PlanetaryPosition>,
    pub heliocentric: Vec<PlanetaryPosition>,
}

/// The partial birth record sent to the ephemeris estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    pub birth_day: u32,
    pub birth_month: u32,
    pub birth_year: i32,
    pub birth_hour: u32,
    pub birth_minute: u32,
    pub city: String,
    pub country: String,
}

/// Everything the intake form collected, packaged at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalData {
    pub name: String,
    pub vocation: String,
    pub city: String,
    pub country: String,
    pub birth_day: u32,
    pub birth_month: u32,
    pub birth_year: i32,
    pub birth_hour: u32,
    pub birth_minute: u32,
    pub geocentric: Vec<PlanetaryPosition>,
    pub heliocentric: Vec<PlanetaryPosition>,
    #[serde(default)]
    pub asteroids: Vec<String>,
    #[serde(default)]
    pub fixed_stars: Vec<String>,
}

impl NatalData {
    /// The birth date, if day/month/year form a real calendar date.
    /// Impossible dates (31/2) are still accepted everywhere else.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
    }
}

/// The model's reading, exactly as declared in the response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AkashicAnalysis {
    pub past_life_origin: String,
    pub incarnation_talents: String,
    pub spiritual_dormant_talents: String,
    pub starseed_legacy: String,
    pub asteroid_insights: String,
    pub vocation_alignment: String,
    pub esoteric_path: String,
    pub primary_ray: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_accepts_whole_float() {
        let pos: PlanetaryPosition =
            serde_json::from_str(r#"{"planet":"Sol","sign":"Piscis","house":10.0}"#).unwrap();
        assert_eq!(pos.house.get(), 10);
        assert!(pos.degree.is_none());
    }

    #[test]
    fn test_house_rejects_fraction_and_range() {
        assert!(serde_json::from_str::<House>("10.5").is_err());
        assert!(serde_json::from_str::<House>("0").is_err());
        assert!(serde_json::from_str::<House>("13").is_err());
    }

    #[test]
    fn test_house_serializes_as_integer() {
        let pos = PlanetaryPosition {
            planet: "Luna".into(),
            sign: "Tauro".into(),
            house: House::new(4).unwrap(),
            degree: None,
        };
        assert_eq!(
            serde_json::to_string(&pos).unwrap(),
            r#"{"planet":"Luna","sign":"Tauro","house":4}"#
        );
    }

    #[test]
    fn test_natal_data_uses_camel_case_and_empty_lists() {
        let data = NatalData {
            name: "Ana".into(),
            vocation: String::new(),
            city: "Cusco".into(),
            country: "Peru".into(),
            birth_day: 14,
            birth_month: 3,
            birth_year: 1990,
            birth_hour: 8,
            birth_minute: 30,
            geocentric: vec![],
            heliocentric: vec![],
            asteroids: vec![],
            fixed_stars: vec![],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["birthDay"], 14);
        assert_eq!(json["fixedStars"], serde_json::json!([]));
        assert_eq!(json["asteroids"], serde_json::json!([]));
    }

    #[test]
    fn test_calendar_date_flags_impossible_day() {
        let mut data: NatalData = serde_json::from_value(serde_json::json!({
            "name": "", "vocation": "", "city": "", "country": "",
            "birthDay": 31, "birthMonth": 2, "birthYear": 1990,
            "birthHour": 0, "birthMinute": 0,
            "geocentric": [], "heliocentric": []
        }))
        .unwrap();
        assert!(data.calendar_date().is_none());
        assert!(data.asteroids.is_empty());

        data.birth_day = 28;
        assert_eq!(
            data.calendar_date(),
            NaiveDate::from_ymd_opt(1990, 2, 28)
        );
    }
}
