// Prompt templates and response schemas for the two gateway calls.
// Caller data is substituted verbatim; nothing is escaped.

use crate::llm_client::schema::Schema;
use crate::models::{BirthInfo, NatalData};

/// Ephemeris estimation prompt.
/// Placeholders: {day}, {month}, {year}, {hour}, {minute}, {city}, {country},
///               {planets}, {signs}
pub const ESTIMATE_POSITIONS_PROMPT_TEMPLATE: &str = r#"Como un astrónomo experto en efemérides y astrología esotérica, estima con la mayor precisión posible las posiciones planetarias (Signo y Casa) para el siguiente nacimiento.
Fecha: {day}/{month}/{year}
Hora: {hour}:{minute}
Lugar: {city}, {country}

Genera posiciones geocéntricas completas y una carta heliocéntrica para el análisis del alma.

Devuelve un JSON con:
1. geocentric: Lista de objetos { planet, sign, house } para los 10 planetas + Quirón y Nodos.
2. heliocentric: Lista de objetos { planet, sign, house } para los planetas (usando el Sol como centro).

Usa los nombres en español: planetas {planets}; signos {signs}. La casa es un número entero del 1 al 12."#;

/// Full reading prompt.
/// Placeholders: {name}, {vocation}, {day}, {month}, {year}, {city}, {country},
///               {geocentric_json}, {heliocentric_json}, {asteroids}, {fixed_stars}, {rays}
pub const AKASHIC_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Actúa como un Maestro Supremo en Astrología Esotérica, Registros Akáshicos y Conexiones Galácticas.
Usa la metodología "Astrodiest" para el análisis de asteroides y "Starseed Origins" para las estrellas fijas.

PERFIL DEL ALMA: {name}
MISIÓN ACTUAL: {vocation}
COORDENADAS ESPACIO-TIEMPO: {day}/{month}/{year} | {city}, {country}.

DATOS GEOCÉNTRICOS (Vehículo Terrestre): {geocentric_json}
DATOS HELIOCÉNTRICOS (Esencia Solar): {heliocentric_json}
ASTEROIDES ACTIVOS (Metodología Astrodiest): {asteroids}
ESTRELLAS FIJAS (Marcadores Starseed): {fixed_stars}

Tu misión es revelar:
1. Origen Akáshico: El punto de partida galáctico y las memorias de vidas pasadas predominantes.
2. Talentos de Encarnación: Capacidades tangibles en esta vida (foco geocéntrico).
3. Talentos Dormidos: Capacidades del alma que esperan ser activadas (foco heliocéntrico).
4. Legado Starseed: Basado en las Estrellas Fijas seleccionadas, identifica de qué sistema estelar proviene su linaje (Sirio, Pléyades, Arcturus, etc.).
5. Sabiduría de Asteroides: Talentos de interpretación astrológica y sanación según los asteroides Astrodiest.
6. Alineación Vocacional: Cómo su vocación declarada encaja en el Plan Divino.
7. Sendero Esotérico y Rayo Primario de los Siete Rayos. Para primaryRay usa exactamente una de estas etiquetas: {rays}

Responde en formato JSON detallado."#;

pub fn estimate_positions_prompt(birth: &BirthInfo) -> String {
    let day = birth.birth_day.to_string();
    let month = birth.birth_month.to_string();
    let year = birth.birth_year.to_string();
    let hour = birth.birth_hour.to_string();
    let minute = birth.birth_minute.to_string();
    let planets = crate::catalog::PLANETS.join(", ");
    let signs = crate::catalog::ZODIAC_SIGNS.join(", ");

    fill_template(
        ESTIMATE_POSITIONS_PROMPT_TEMPLATE,
        &[
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
            ("hour", hour.as_str()),
            ("minute", minute.as_str()),
            ("city", birth.city.as_str()),
            ("country", birth.country.as_str()),
            ("planets", planets.as_str()),
            ("signs", signs.as_str()),
        ],
    )
}

pub fn akashic_analysis_prompt(data: &NatalData) -> String {
    let day = data.birth_day.to_string();
    let month = data.birth_month.to_string();
    let year = data.birth_year.to_string();
    let geocentric = serde_json::to_string(&data.geocentric).unwrap_or_else(|_| "[]".into());
    let heliocentric = serde_json::to_string(&data.heliocentric).unwrap_or_else(|_| "[]".into());
    let asteroids = data.asteroids.join(", ");
    let fixed_stars = data.fixed_stars.join(", ");
    let rays = crate::catalog::SEVEN_RAYS
        .iter()
        .map(|r| r.label)
        .collect::<Vec<_>>()
        .join(" | ");

    fill_template(
        AKASHIC_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("name", data.name.as_str()),
            ("vocation", data.vocation.as_str()),
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
            ("city", data.city.as_str()),
            ("country", data.country.as_str()),
            ("geocentric_json", geocentric.as_str()),
            ("heliocentric_json", heliocentric.as_str()),
            ("asteroids", asteroids.as_str()),
            ("fixed_stars", fixed_stars.as_str()),
            ("rays", rays.as_str()),
        ],
    )
}

/// Fills `{key}` placeholders in a single left-to-right pass over the
/// template. Inserted values are never scanned again, and braces that do not
/// name a known key are copied through unchanged.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let hit = after.find('}').and_then(|close| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..close])
                .map(|(_, value)| (close, *value))
        });

        match hit {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn position_schema() -> Schema {
    Schema::object(vec![
        ("planet", Schema::String),
        ("sign", Schema::String),
        ("house", Schema::Number),
    ])
}

/// `{geocentric: [position], heliocentric: [position]}`, all fields required.
pub fn positions_schema() -> Schema {
    Schema::object(vec![
        ("geocentric", Schema::array_of(position_schema())),
        ("heliocentric", Schema::array_of(position_schema())),
    ])
}

/// The eight string fields of an `AkashicAnalysis`, all required.
pub fn analysis_schema() -> Schema {
    Schema::object(vec![
        ("pastLifeOrigin", Schema::String),
        ("incarnationTalents", Schema::String),
        ("spiritualDormantTalents", Schema::String),
        ("starseedLegacy", Schema::String),
        ("asteroidInsights", Schema::String),
        ("vocationAlignment", Schema::String),
        ("esotericPath", Schema::String),
        ("primaryRay", Schema::String),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{House, PlanetaryPosition};

    fn cusco() -> BirthInfo {
        BirthInfo {
            birth_day: 14,
            birth_month: 3,
            birth_year: 1990,
            birth_hour: 8,
            birth_minute: 30,
            city: "Cusco".into(),
            country: "Peru".into(),
        }
    }

    #[test]
    fn test_estimate_prompt_embeds_birth_fields() {
        let prompt = estimate_positions_prompt(&cusco());
        assert!(prompt.contains("Fecha: 14/3/1990"));
        assert!(prompt.contains("Hora: 8:30"));
        assert!(prompt.contains("Lugar: Cusco, Peru"));
        assert!(!prompt.contains("{city}"));
    }

    #[test]
    fn test_analysis_prompt_embeds_lists() {
        let data = NatalData {
            name: "Ana {city}".into(),
            vocation: "Sanadora".into(),
            city: "Cusco".into(),
            country: "Peru".into(),
            birth_day: 14,
            birth_month: 3,
            birth_year: 1990,
            birth_hour: 8,
            birth_minute: 30,
            geocentric: vec![PlanetaryPosition {
                planet: "Sol".into(),
                sign: "Piscis".into(),
                house: House::new(10).unwrap(),
                degree: None,
            }],
            heliocentric: vec![],
            asteroids: vec!["Pallas".into(), "Ceres".into()],
            fixed_stars: vec![],
        };

        let prompt = akashic_analysis_prompt(&data);
        assert!(prompt.contains("PERFIL DEL ALMA: Ana {city}"));
        assert!(prompt.contains(r#"[{"planet":"Sol","sign":"Piscis","house":10}]"#));
        assert!(prompt.contains("DATOS HELIOCÉNTRICOS (Esencia Solar): []"));
        assert!(prompt.contains("ASTEROIDES ACTIVOS (Metodología Astrodiest): Pallas, Ceres"));
        assert!(prompt.contains("Séptimo Rayo: Orden Ceremonial o Magia"));
    }

    #[test]
    fn test_estimate_prompt_keeps_braces_in_place_names() {
        let mut birth = cusco();
        birth.city = "Villa {country}".into();
        let prompt = estimate_positions_prompt(&birth);
        assert!(prompt.contains("Lugar: Villa {country}, Peru"));
    }

    #[test]
    fn test_analysis_prompt_does_not_expand_inserted_values() {
        let data = NatalData {
            name: "Ana".into(),
            vocation: "{name}".into(),
            city: "Cusco".into(),
            country: "Peru".into(),
            birth_day: 14,
            birth_month: 3,
            birth_year: 1990,
            birth_hour: 8,
            birth_minute: 30,
            geocentric: vec![PlanetaryPosition {
                planet: "{name}".into(),
                sign: "Aries".into(),
                house: House::FIRST,
                degree: None,
            }],
            heliocentric: vec![],
            asteroids: vec!["{city}".into()],
            fixed_stars: vec!["{rays}".into()],
        };

        let prompt = akashic_analysis_prompt(&data);
        assert!(prompt.contains(r#"[{"planet":"{name}","sign":"Aries","house":1}]"#));
        assert!(prompt.contains("MISIÓN ACTUAL: {name}"));
        assert!(prompt.contains("ASTEROIDES ACTIVOS (Metodología Astrodiest): {city}"));
        assert!(prompt.contains("ESTRELLAS FIJAS (Marcadores Starseed): {rays}"));
    }

    #[test]
    fn test_fill_template_passes_unknown_braces_through() {
        let out = fill_template("{ planet } {a}{b} {", &[("a", "1"), ("b", "{a}")]);
        assert_eq!(out, "{ planet } 1{a} {");
    }

    #[test]
    fn test_analysis_schema_requires_all_fields() {
        let rendered = analysis_schema().to_gemini();
        assert_eq!(rendered["required"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_positions_schema_requires_house() {
        let rendered = positions_schema().to_gemini();
        assert_eq!(
            rendered["properties"]["geocentric"]["items"]["required"],
            serde_json::json!(["planet", "sign", "house"])
        );
    }
}
