//! Static domain catalog: zodiac signs, planets, asteroid and starseed
//! categories, and the seven rays.
//!
//! Pure data. The intake form reads it to validate choices and the display
//! layer reads it to render the reference view.

use serde::Serialize;

pub const ZODIAC_SIGNS: &[&str] = &[
    "Aries",
    "Tauro",
    "Géminis",
    "Cáncer",
    "Leo",
    "Virgo",
    "Libra",
    "Escorpio",
    "Sagitario",
    "Capricornio",
    "Acuario",
    "Piscis",
];

pub const PLANETS: &[&str] = &[
    "Sol",
    "Luna",
    "Mercurio",
    "Venus",
    "Marte",
    "Júpiter",
    "Saturno",
    "Urano",
    "Neptuno",
    "Plutón",
    "Quirón",
    "Nodo Norte",
    "Nodo Sur",
];

/// Asteroids grouped by interpretive theme (talent, karma, healing, love).
pub const ASTEROID_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Talento y Sabiduría",
        &["Pallas", "Urania", "Minerva", "Sapiéntia", "Sophy", "Musa"],
    ),
    (
        "Kármicos y Vidas Pasadas",
        &["Kaali", "Shiva", "Karma", "Nemesis", "Leto", "Mnemosyne"],
    ),
    (
        "Sanación y Nutrición",
        &["Ceres", "Higea", "Panacea", "Aesculapius", "Chiron", "Salacia"],
    ),
    (
        "Amor y Alma",
        &["Juno", "Vesta", "Psyche", "Eros", "Amor", "Anteros"],
    ),
];

/// Fixed stars grouped by claimed starseed lineage.
/// A star may belong to more than one lineage (Antares).
pub const STARSEED_STARS: &[(&str, &[&str])] = &[
    ("Sirianos", &["Sirio", "Murzim", "Muliphein"]),
    (
        "Pleyadianos",
        &["Alcyone", "Maia", "Electra", "Merope", "Taygeta"],
    ),
    ("Arcturianos", &["Arturo"]),
    ("Andromedanos", &["Alpheratz", "Mirach", "Almach"]),
    (
        "Orionitas",
        &["Rigel", "Betelgeuse", "Bellatrix", "Mintaka"],
    ),
    ("Lirianos", &["Vega", "Sheliak"]),
    ("Antarianos/Marcianos", &["Antares"]),
    (
        "Reales (Persas)",
        &["Regulus", "Aldebarán", "Fomalhaut", "Antares"],
    ),
];

/// One of the seven archetypal rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ray {
    pub id: u8,
    /// Short name shown on the reference card.
    pub name: &'static str,
    /// Full label, the vocabulary the model is expected to answer with.
    pub label: &'static str,
    pub description: &'static str,
}

pub static SEVEN_RAYS: [Ray; 7] = [
    Ray {
        id: 1,
        name: "Voluntad o Poder",
        label: "Primer Rayo: Voluntad o Poder",
        description: "La fuerza de propósito y la iniciativa divina.",
    },
    Ray {
        id: 2,
        name: "Amor-Sabiduría",
        label: "Segundo Rayo: Amor-Sabiduría",
        description: "La capacidad de atraer, nutrir y comprender.",
    },
    Ray {
        id: 3,
        name: "Inteligencia Activa",
        label: "Tercer Rayo: Inteligencia Activa",
        description: "La adaptabilidad creativa y el uso de la materia.",
    },
    Ray {
        id: 4,
        name: "Armonía / Conflicto",
        label: "Cuarto Rayo: Armonía a través del Conflicto",
        description: "El arte de encontrar equilibrio a través de la lucha.",
    },
    Ray {
        id: 5,
        name: "Ciencia / Conocimiento",
        label: "Quinto Rayo: Conocimiento Concreto o Ciencia",
        description: "El análisis detallado y la investigación de la verdad.",
    },
    Ray {
        id: 6,
        name: "Devoción / Idealismo",
        label: "Sexto Rayo: Idealismo Abstracto o Devoción",
        description: "La entrega a una visión o un ideal superior.",
    },
    Ray {
        id: 7,
        name: "Orden / Magia",
        label: "Séptimo Rayo: Orden Ceremonial o Magia",
        description: "La manifestación del espíritu en la forma ritualizada.",
    },
];

const ORDINALS: [&str; 7] = [
    "primer", "segundo", "tercer", "cuarto", "quinto", "sexto", "séptimo",
];

/// All asteroids, flattened in category order.
pub fn asteroids() -> Vec<&'static str> {
    ASTEROID_CATEGORIES
        .iter()
        .flat_map(|(_, items)| items.iter().copied())
        .collect()
}

/// All fixed stars, flattened in lineage order with duplicates removed.
pub fn fixed_stars() -> Vec<&'static str> {
    let mut stars: Vec<&'static str> = Vec::new();
    for star in STARSEED_STARS.iter().flat_map(|(_, items)| items.iter()) {
        if !stars.contains(star) {
            stars.push(star);
        }
    }
    stars
}

pub fn is_planet(name: &str) -> bool {
    PLANETS.contains(&name)
}

pub fn is_sign(name: &str) -> bool {
    ZODIAC_SIGNS.contains(&name)
}

pub fn is_asteroid(name: &str) -> bool {
    ASTEROID_CATEGORIES
        .iter()
        .any(|(_, items)| items.contains(&name))
}

pub fn is_fixed_star(name: &str) -> bool {
    STARSEED_STARS.iter().any(|(_, items)| items.contains(&name))
}

/// Matches a model-returned primary ray label back to a catalog ray.
///
/// Accepts the full label, the short name, or a label that opens with the
/// Spanish ordinal ("Segundo Rayo..."). Comparison ignores case.
pub fn ray_for_label(label: &str) -> Option<&'static Ray> {
    let needle = label.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    SEVEN_RAYS
        .iter()
        .find(|ray| {
            ray.label.to_lowercase() == needle || ray.name.to_lowercase() == needle
        })
        .or_else(|| {
            ORDINALS
                .iter()
                .position(|ordinal| needle.starts_with(&format!("{ordinal} rayo")))
                .map(|idx| &SEVEN_RAYS[idx])
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// Serializable snapshot of the catalog, used to populate choice controls.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub zodiac_signs: &'static [&'static str],
    pub planets: &'static [&'static str],
    pub asteroid_categories: Vec<Category>,
    pub starseed_categories: Vec<Category>,
    pub asteroids: Vec<&'static str>,
    pub fixed_stars: Vec<&'static str>,
    pub rays: &'static [Ray],
}

impl Catalog {
    pub fn snapshot() -> Self {
        let categories = |groups: &'static [(&'static str, &'static [&'static str])]| -> Vec<Category> {
            groups
                .iter()
                .map(|&(name, items)| Category { name, items })
                .collect()
        };

        Catalog {
            zodiac_signs: ZODIAC_SIGNS,
            planets: PLANETS,
            asteroid_categories: categories(ASTEROID_CATEGORIES),
            starseed_categories: categories(STARSEED_STARS),
            asteroids: asteroids(),
            fixed_stars: fixed_stars(),
            rays: &SEVEN_RAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(ZODIAC_SIGNS.len(), 12);
        assert_eq!(PLANETS.len(), 13);
        assert_eq!(asteroids().len(), 24);
        assert_eq!(SEVEN_RAYS.len(), 7);
    }

    #[test]
    fn test_fixed_stars_dedupes_antares() {
        let stars = fixed_stars();
        assert_eq!(stars.iter().filter(|s| **s == "Antares").count(), 1);
        assert_eq!(stars.first(), Some(&"Sirio"));
        assert_eq!(stars.last(), Some(&"Fomalhaut"));
    }

    #[test]
    fn test_membership_helpers() {
        assert!(is_planet("Quirón"));
        assert!(!is_planet("Pallas"));
        assert!(is_sign("Piscis"));
        assert!(is_asteroid("Mnemosyne"));
        assert!(!is_asteroid("Sirio"));
        assert!(is_fixed_star("Aldebarán"));
    }

    #[test]
    fn test_ray_for_full_label() {
        let ray = ray_for_label("Segundo Rayo: Amor-Sabiduría").unwrap();
        assert_eq!(ray.id, 2);
    }

    #[test]
    fn test_ray_for_short_name_case_insensitive() {
        let ray = ray_for_label("orden / magia").unwrap();
        assert_eq!(ray.id, 7);
    }

    #[test]
    fn test_ray_for_ordinal_prefix() {
        let ray = ray_for_label("Quinto Rayo (Ciencia concreta)").unwrap();
        assert_eq!(ray.id, 5);
    }

    #[test]
    fn test_ray_for_unknown_label() {
        assert!(ray_for_label("Rayo Violeta").is_none());
        assert!(ray_for_label("   ").is_none());
    }

    #[test]
    fn test_snapshot_serializes_categories() {
        let json = serde_json::to_value(Catalog::snapshot()).unwrap();
        assert_eq!(json["asteroid_categories"].as_array().unwrap().len(), 4);
        assert_eq!(json["starseed_categories"][0]["name"], "Sirianos");
        assert_eq!(json["rays"][6]["id"], 7);
        assert_eq!(json["fixed_stars"].as_array().unwrap().len(), 22);
    }
}
