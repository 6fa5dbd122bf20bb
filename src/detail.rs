//! Detail loader: one entity record plus its species record
//!
//! Also holds the display derivations the detail screen needs (unit
//! conversion, stat labels, stat severity).

use serde::{Deserialize, Serialize};

use crate::api::wire::{in_language, SpeciesResponse};
use crate::api::{Endpoints, FetchError, Phase, Upstream};
use crate::mapper;
use crate::state::{EntityDetail, SpeciesInfo};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Fetch detail and species concurrently; either failing fails the load.
pub async fn fetch_detail<U>(
    upstream: &U,
    endpoints: &Endpoints,
    name: &str,
    language: &str,
) -> Result<(EntityDetail, SpeciesInfo), FetchError>
where
    U: Upstream + ?Sized,
{
    let detail_url = endpoints.detail(name);
    let species_url = endpoints.species(name);
    tracing::debug!(name, "loading detail");

    let (detail, species) = futures_util::join!(
        upstream.get_json(&detail_url),
        upstream.get_json(&species_url)
    );
    let detail = detail.map_err(|err| err.in_phase(Phase::Detail))?;
    let species = species.map_err(|err| err.in_phase(Phase::Species))?;

    let detail = mapper::map_detail(&detail).map_err(|err| err.in_phase(Phase::Detail))?;
    let species = map_species(species, name, language).map_err(|err| err.in_phase(Phase::Species))?;
    Ok((detail, species))
}

pub fn map_species(
    raw: serde_json::Value,
    fallback_name: &str,
    language: &str,
) -> Result<SpeciesInfo, FetchError> {
    let response: SpeciesResponse =
        serde_json::from_value(raw).map_err(|err| FetchError::MalformedData(err.to_string()))?;
    let description = response
        .flavor_text_entries
        .iter()
        .flatten()
        .filter(|entry| in_language(entry.language.as_ref(), language))
        .find_map(|entry| entry.flavor_text.as_deref())
        .map(clean_flavor_text)
        .unwrap_or_default();
    let category = response
        .genera
        .iter()
        .flatten()
        .filter(|entry| in_language(entry.language.as_ref(), language))
        .find_map(|entry| entry.genus.clone());
    Ok(SpeciesInfo {
        name: response
            .name
            .unwrap_or_else(|| fallback_name.to_string()),
        description,
        category,
        habitat: response.habitat.and_then(|habitat| habitat.name),
    })
}

/// Form feeds and line breaks become spaces.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\u{000C}', '\n', '\r'], " ")
}

pub fn decimeters_to_meters(height: u32) -> f32 {
    height as f32 / 10.0
}

pub fn hectograms_to_kilograms(weight: u32) -> f32 {
    weight as f32 / 10.0
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Fair,
    Good,
    Great,
    Excellent,
}

pub fn stat_severity(value: u32) -> Severity {
    match value {
        0..=49 => Severity::Low,
        50..=79 => Severity::Fair,
        80..=99 => Severity::Good,
        100..=119 => Severity::Great,
        _ => Severity::Excellent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flavor_text_loses_control_characters() {
        let cleaned = clean_flavor_text("Likes to\u{000C}play.\nVery friendly.");
        assert_eq!(cleaned, "Likes to play. Very friendly.");
        assert!(!cleaned.contains('\n'));
        assert!(!cleaned.contains('\u{000C}'));
    }

    #[test]
    fn units_divide_by_ten() {
        assert_eq!(decimeters_to_meters(7), 0.7);
        assert_eq!(hectograms_to_kilograms(690), 69.0);
        assert_eq!(format!("{:.1}", hectograms_to_kilograms(690)), "69.0");
    }

    #[test]
    fn stat_labels_fall_back_to_raw_key() {
        assert_eq!(stat_label("special-attack"), "Sp. Atk");
        assert_eq!(stat_label("hp"), "HP");
        assert_eq!(stat_label("accuracy"), "accuracy");
    }

    #[test]
    fn severity_thresholds() {
        assert_eq!(stat_severity(0), Severity::Low);
        assert_eq!(stat_severity(49), Severity::Low);
        assert_eq!(stat_severity(50), Severity::Fair);
        assert_eq!(stat_severity(99), Severity::Good);
        assert_eq!(stat_severity(100), Severity::Great);
        assert_eq!(stat_severity(255), Severity::Excellent);
    }

    #[test]
    fn species_picks_first_entry_in_language() {
        let raw = json!({
            "name": "bulbasaur",
            "flavor_text_entries": [
                { "flavor_text": "Une graine.", "language": { "name": "fr" } },
                { "flavor_text": "A strange seed\nwas planted.", "language": { "name": "en" } },
                { "flavor_text": "Second english.", "language": { "name": "en" } }
            ],
            "genera": [
                { "genus": "Seed Pokémon", "language": { "name": "en" } }
            ],
            "habitat": { "name": "grassland" }
        });
        let species = map_species(raw, "bulbasaur", "en").unwrap();
        assert_eq!(species.description, "A strange seed was planted.");
        assert_eq!(species.category.as_deref(), Some("Seed Pokémon"));
        assert_eq!(species.habitat.as_deref(), Some("grassland"));
    }

    #[test]
    fn species_without_language_match_is_blank() {
        let raw = json!({
            "flavor_text_entries": [
                { "flavor_text": "Une graine.", "language": { "name": "fr" } }
            ],
            "habitat": null
        });
        let species = map_species(raw, "bulbasaur", "en").unwrap();
        assert_eq!(species.name, "bulbasaur");
        assert_eq!(species.description, "");
        assert_eq!(species.category, None);
        assert_eq!(species.habitat, None);
    }

    #[test]
    fn species_tolerates_malformed_entries() {
        let raw = json!({
            "name": "bulbasaur",
            "flavor_text_entries": [
                { "flavor_text": null, "language": { "name": "en" } },
                { "flavor_text": "Une graine.", "language": null },
                { "flavor_text": "A strange seed.", "language": { "name": "en" } },
                { "flavor_text": null, "language": { "name": "fr" } }
            ],
            "genera": [
                { "genus": null, "language": { "name": "en" } },
                { "language": { "name": "en" } },
                { "genus": "Seed Pokémon", "language": { "url": "" } }
            ],
            "habitat": { "url": "https://pokeapi.co/api/v2/pokemon-habitat/3/" }
        });
        let species = map_species(raw, "bulbasaur", "en").unwrap();
        assert_eq!(species.description, "A strange seed.");
        assert_eq!(species.category, None);
        assert_eq!(species.habitat, None);
    }

    #[test]
    fn species_with_null_lists_is_blank() {
        let raw = json!({ "flavor_text_entries": null, "genera": null, "name": null });
        let species = map_species(raw, "ditto", "en").unwrap();
        assert_eq!(species.name, "ditto");
        assert_eq!(species.description, "");
    }
}
