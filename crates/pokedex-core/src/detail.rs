//! Detail Formatting
//!
//! Presentation helpers for the detail page: localized description,
//! stat bars and unit conversions.

use crate::models::PokemonSpecies;

/// Shown when no flavor text exists in any preferred language
pub const NO_DESCRIPTION: &str = "Aucune description disponible.";

/// Highest base stat in the games, used as 100% of a stat bar
pub const MAX_BASE_STAT: u32 = 255;

/// First flavor text in the first preferred language that has one.
///
/// Form feeds embedded by the API are replaced with spaces.
pub fn description(species: Option<&PokemonSpecies>, languages: &[String]) -> String {
    let Some(species) = species else {
        return NO_DESCRIPTION.to_string();
    };

    languages
        .iter()
        .find_map(|lang| {
            species
                .flavor_text_entries
                .iter()
                .find(|entry| entry.language.name == *lang && !entry.flavor_text.is_empty())
        })
        .map(|entry| entry.flavor_text.replace('\u{c}', " "))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Width of a stat bar in percent, capped at 100
pub fn stat_percentage(base_stat: u32) -> f64 {
    (f64::from(base_stat) / f64::from(MAX_BASE_STAT) * 100.0).min(100.0)
}

/// `special-attack` -> `special attack` (first hyphen only)
pub fn stat_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Heart,
    Sword,
    Shield,
    Zap,
}

impl StatIcon {
    pub fn for_stat(name: &str) -> Self {
        match name {
            "hp" => StatIcon::Heart,
            "attack" => StatIcon::Sword,
            "defense" | "special-defense" => StatIcon::Shield,
            _ => StatIcon::Zap,
        }
    }
}

/// Decimetres to metres
pub fn format_height(decimetres: u32) -> String {
    format!("{} m", tenths(decimetres))
}

/// Hectograms to kilograms
pub fn format_weight(hectograms: u32) -> String {
    format!("{} kg", tenths(hectograms))
}

/// `#001` style national dex number
pub fn format_number(id: u32) -> String {
    format!("#{:03}", id)
}

fn tenths(value: u32) -> String {
    match value % 10 {
        0 => (value / 10).to_string(),
        rem => format!("{}.{}", value / 10, rem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(entries: &[(&str, &str)]) -> PokemonSpecies {
        let entries: Vec<serde_json::Value> = entries
            .iter()
            .map(|(text, lang)| {
                serde_json::json!({
                    "flavor_text": text,
                    "language": { "name": lang, "url": "" },
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "bulbasaur",
            "flavor_text_entries": entries,
        }))
        .unwrap()
    }

    fn langs() -> Vec<String> {
        vec!["fr".to_string(), "en".to_string()]
    }

    #[test]
    fn test_description_prefers_first_language() {
        let s = species(&[("A strange seed", "en"), ("Une graine", "fr"), ("Autre", "fr")]);
        assert_eq!(description(Some(&s), &langs()), "Une graine");
    }

    #[test]
    fn test_description_falls_back_to_next_language() {
        let s = species(&[("Ein Samen", "de"), ("A strange seed", "en")]);
        assert_eq!(description(Some(&s), &langs()), "A strange seed");
    }

    #[test]
    fn test_description_skips_empty_text() {
        let s = species(&[("", "fr"), ("A strange seed", "en")]);
        assert_eq!(description(Some(&s), &langs()), "A strange seed");
    }

    #[test]
    fn test_description_replaces_form_feeds() {
        let s = species(&[("A strange\u{c}seed", "en")]);
        assert_eq!(description(Some(&s), &langs()), "A strange seed");
    }

    #[test]
    fn test_description_fallback() {
        let s = species(&[("Ein Samen", "de")]);
        assert_eq!(description(Some(&s), &langs()), NO_DESCRIPTION);
        assert_eq!(description(None, &langs()), NO_DESCRIPTION);
    }

    #[test]
    fn test_stat_percentage_is_capped() {
        assert_eq!(stat_percentage(0), 0.0);
        assert_eq!(stat_percentage(255), 100.0);
        assert_eq!(stat_percentage(300), 100.0);
        assert!((stat_percentage(51) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_label_replaces_first_hyphen() {
        assert_eq!(stat_label("special-attack"), "special attack");
        assert_eq!(stat_label("hp"), "hp");
        assert_eq!(stat_label("a-b-c"), "a b-c");
    }

    #[test]
    fn test_stat_icons() {
        assert_eq!(StatIcon::for_stat("hp"), StatIcon::Heart);
        assert_eq!(StatIcon::for_stat("attack"), StatIcon::Sword);
        assert_eq!(StatIcon::for_stat("special-defense"), StatIcon::Shield);
        assert_eq!(StatIcon::for_stat("speed"), StatIcon::Zap);
        assert_eq!(StatIcon::for_stat("accuracy"), StatIcon::Zap);
    }

    #[test]
    fn test_units() {
        assert_eq!(format_height(7), "0.7 m");
        assert_eq!(format_height(20), "2 m");
        assert_eq!(format_weight(69), "6.9 kg");
        assert_eq!(format_weight(9050), "905 kg");
    }

    #[test]
    fn test_number_padding() {
        assert_eq!(format_number(1), "#001");
        assert_eq!(format_number(25), "#025");
        assert_eq!(format_number(1025), "#1025");
    }
}
