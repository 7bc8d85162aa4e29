//! Intake form state and its reducer.
//!
//! Every transition is `FormState × FormAction → FormState`. The HTTP layer
//! validates user actions first (`FormAction::validate`); the reducer itself
//! never fails and treats stale indices as no-ops.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog;
use crate::errors::AppError;
use crate::models::{BirthInfo, ChartPositions, House, NatalData, PlanetaryPosition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
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
    pub asteroids: Vec<String>,
    pub fixed_stars: Vec<String>,
    /// Set while an autofill request is in flight.
    pub autofilling: bool,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            name: String::new(),
            vocation: String::new(),
            city: String::new(),
            country: String::new(),
            birth_day: 1,
            birth_month: 1,
            birth_year: 1990,
            birth_hour: 12,
            birth_minute: 0,
            geocentric: Vec::new(),
            heliocentric: Vec::new(),
            asteroids: Vec::new(),
            fixed_stars: Vec::new(),
            autofilling: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Vocation,
    City,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl DateField {
    /// Inclusive bounds of the input widget.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            DateField::Day => (1, 31),
            DateField::Month => (1, 12),
            DateField::Year => (1800, 2100),
            DateField::Hour => (0, 23),
            DateField::Minute => (0, 59),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Asteroids,
    FixedStars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chart {
    Geocentric,
    Heliocentric,
}

/// One editable field of a position row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PositionUpdate {
    Planet(String),
    Sign(String),
    House(House),
}

/// User edits to the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormAction {
    SetText {
        field: TextField,
        value: String,
    },
    SetDate {
        field: DateField,
        value: i32,
    },
    Toggle {
        selection: Selection,
        item: String,
    },
    AddPosition {
        chart: Chart,
    },
    UpdatePosition {
        chart: Chart,
        index: usize,
        update: PositionUpdate,
    },
    RemovePosition {
        chart: Chart,
        index: usize,
    },
}

/// Lifecycle of an autofill request. Not exposed to clients.
#[derive(Debug, Clone, PartialEq)]
pub enum AutofillEvent {
    Started,
    Succeeded(ChartPositions),
    Failed,
}

impl FormAction {
    /// Range and catalog checks mirroring the choices the form offers.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            FormAction::SetDate { field, value } => {
                let (min, max) = field.bounds();
                if !(min..=max).contains(value) {
                    return Err(AppError::Validation(format!(
                        "{field:?} must be between {min} and {max}, got {value}"
                    )));
                }
            }
            FormAction::Toggle { selection, item } => {
                let known = match selection {
                    Selection::Asteroids => catalog::is_asteroid(item),
                    Selection::FixedStars => catalog::is_fixed_star(item),
                };
                if !known {
                    return Err(AppError::Validation(format!(
                        "'{item}' is not a known {selection:?} entry"
                    )));
                }
            }
            FormAction::UpdatePosition {
                update: PositionUpdate::Planet(planet),
                ..
            } if !catalog::is_planet(planet) => {
                return Err(AppError::Validation(format!("Unknown planet '{planet}'")));
            }
            FormAction::UpdatePosition {
                update: PositionUpdate::Sign(sign),
                ..
            } if !catalog::is_sign(sign) => {
                return Err(AppError::Validation(format!("Unknown sign '{sign}'")));
            }
            _ => {}
        }
        Ok(())
    }
}

impl FormState {
    fn chart_mut(&mut self, chart: Chart) -> &mut Vec<PlanetaryPosition> {
        match chart {
            Chart::Geocentric => &mut self.geocentric,
            Chart::Heliocentric => &mut self.heliocentric,
        }
    }

    /// The partial record the ephemeris estimation call needs.
    pub fn birth_info(&self) -> BirthInfo {
        BirthInfo {
            birth_day: self.birth_day,
            birth_month: self.birth_month,
            birth_year: self.birth_year,
            birth_hour: self.birth_hour,
            birth_minute: self.birth_minute,
            city: self.city.clone(),
            country: self.country.clone(),
        }
    }

    /// Birth year and city are the minimum the model needs to estimate a chart.
    pub fn autofill_ready(&self) -> bool {
        self.birth_year != 0 && !self.city.trim().is_empty()
    }

    /// Packages the current form into a submission. Everything is copied, so
    /// later edits never reach an already-submitted record.
    pub fn to_natal_data(&self) -> NatalData {
        NatalData {
            name: self.name.clone(),
            vocation: self.vocation.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            birth_day: self.birth_day,
            birth_month: self.birth_month,
            birth_year: self.birth_year,
            birth_hour: self.birth_hour,
            birth_minute: self.birth_minute,
            geocentric: self.geocentric.clone(),
            heliocentric: self.heliocentric.clone(),
            asteroids: self.asteroids.clone(),
            fixed_stars: self.fixed_stars.clone(),
        }
    }
}

/// Impossible day/month combinations are accepted and forwarded; they are
/// only logged.
pub fn flag_impossible_date(data: &NatalData) {
    if data.calendar_date().is_none() {
        warn!(
            "Birth date {}/{}/{} is not a calendar date; forwarding as entered",
            data.birth_day, data.birth_month, data.birth_year
        );
    }
}

fn new_position() -> PlanetaryPosition {
    PlanetaryPosition {
        planet: catalog::PLANETS[0].to_string(),
        sign: catalog::ZODIAC_SIGNS[0].to_string(),
        house: House::FIRST,
        degree: None,
    }
}

fn toggle(list: &mut Vec<String>, item: String) {
    if list.contains(&item) {
        list.retain(|existing| *existing != item);
    } else {
        list.push(item);
    }
}

pub fn reduce(mut state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetText { field, value } => match field {
            TextField::Name => state.name = value,
            TextField::Vocation => state.vocation = value,
            TextField::City => state.city = value,
            TextField::Country => state.country = value,
        },
        FormAction::SetDate { field, value } => {
            if field == DateField::Year {
                state.birth_year = value;
            } else if let Ok(value) = u32::try_from(value) {
                match field {
                    DateField::Day => state.birth_day = value,
                    DateField::Month => state.birth_month = value,
                    DateField::Hour => state.birth_hour = value,
                    DateField::Minute => state.birth_minute = value,
                    DateField::Year => {}
                }
            }
        }
        FormAction::Toggle { selection, item } => match selection {
            Selection::Asteroids => toggle(&mut state.asteroids, item),
            Selection::FixedStars => toggle(&mut state.fixed_stars, item),
        },
        FormAction::AddPosition { chart } => state.chart_mut(chart).push(new_position()),
        FormAction::UpdatePosition {
            chart,
            index,
            update,
        } => {
            if let Some(position) = state.chart_mut(chart).get_mut(index) {
                match update {
                    PositionUpdate::Planet(planet) => position.planet = planet,
                    PositionUpdate::Sign(sign) => position.sign = sign,
                    PositionUpdate::House(house) => position.house = house,
                }
            }
        }
        FormAction::RemovePosition { chart, index } => {
            let list = state.chart_mut(chart);
            if index < list.len() {
                list.remove(index);
            }
        }
    }
    state
}

pub fn reduce_autofill(mut state: FormState, event: AutofillEvent) -> FormState {
    match event {
        AutofillEvent::Started => state.autofilling = true,
        AutofillEvent::Succeeded(positions) => {
            state.geocentric = positions.geocentric;
            state.heliocentric = positions.heliocentric;
            state.autofilling = false;
        }
        AutofillEvent::Failed => state.autofilling = false,
    }
    state
}
