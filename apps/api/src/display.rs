//! Presentational views of an analysis and of the seven-rays reference.
//!
//! Pure rendering. No computation happens here beyond matching the primary
//! ray label back to the catalog.

use std::fmt;

use serde::Serialize;

use crate::catalog::{ray_for_label, Ray, SEVEN_RAYS};
use crate::models::AkashicAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: &'static str,
    pub icon: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RayHeadline {
    pub caption: &'static str,
    pub primary_ray: String,
    /// Catalog ray matching `primary_ray`, when the model used a known label.
    pub ray: Option<Ray>,
}

/// The result screen: headline, six insight panels, and the closing path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub headline: RayHeadline,
    pub panels: Vec<Panel>,
    pub path: Panel,
}

impl From<&AkashicAnalysis> for ResultView {
    fn from(analysis: &AkashicAnalysis) -> Self {
        let panel = |title, icon, content: &String| Panel {
            title,
            icon,
            content: content.clone(),
        };

        ResultView {
            headline: RayHeadline {
                caption: "Esencia Dominante",
                primary_ray: analysis.primary_ray.clone(),
                ray: ray_for_label(&analysis.primary_ray).copied(),
            },
            panels: vec![
                panel("Origen Akáshico", "🌌", &analysis.past_life_origin),
                panel("Legado Starseed", "✨", &analysis.starseed_legacy),
                panel("Sabiduría Asteroidal", "☄️", &analysis.asteroid_insights),
                panel("Talentos Geocéntricos", "🌍", &analysis.incarnation_talents),
                panel("Talentos Heliocéntricos", "☀️", &analysis.spiritual_dormant_talents),
                panel("Alineación Vocacional", "💼", &analysis.vocation_alignment),
            ],
            path: panel("Sendero de Ascensión Esotérica", "", &analysis.esoteric_path),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline.caption.to_uppercase())?;
        writeln!(f, "{}", self.headline.primary_ray)?;
        for panel in &self.panels {
            writeln!(f)?;
            writeln!(f, "{} {}", panel.icon, panel.title)?;
            writeln!(f, "{}", panel.content)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.path.title.to_uppercase())?;
        write!(f, "{}", self.path.content)
    }
}

/// The static seven-rays reference screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaysView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rays: &'static [Ray],
}

impl RaysView {
    pub fn new() -> Self {
        RaysView {
            title: "Los Siete Rayos de la Manifestación",
            subtitle: "Las siete fuerzas de la creación que estructuran el desarrollo del alma humana.",
            rays: &SEVEN_RAYS,
        }
    }
}

impl Default for RaysView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RaysView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", self.subtitle)?;
        for ray in self.rays {
            write!(f, "\n\nRAYO {}: {}\n{}", ray.id, ray.name, ray.description)?;
        }
        Ok(())
    }
}
