//! Raw `/pokemon/{name}` JSON into list and detail records
//!
//! Missing fields coalesce to empty values; only a missing `name` fails.

use serde_json::Value;

use crate::api::{pointer_string, pointer_u32, FetchError};
use crate::state::{Ability, EntityDetail, EntitySummary, ImageVariants, StatValue};

const OFFICIAL_ARTWORK: &str = "/other/official-artwork/front_default";
const OFFICIAL_ARTWORK_SHINY: &str = "/other/official-artwork/front_shiny";

pub fn map_summary(raw: &Value) -> Result<EntitySummary, FetchError> {
    let name = required_name(raw)?;
    let images = image_variants(raw);
    Ok(EntitySummary {
        name,
        id: pointer_u32(raw, "/id").unwrap_or_default(),
        image_url: images.preferred(false).to_string(),
        categories: type_names(raw),
    })
}

pub fn map_detail(raw: &Value) -> Result<EntityDetail, FetchError> {
    let name = required_name(raw)?;
    Ok(EntityDetail {
        id: pointer_u32(raw, "/id").unwrap_or_default(),
        name,
        height: pointer_u32(raw, "/height").unwrap_or_default(),
        weight: pointer_u32(raw, "/weight").unwrap_or_default(),
        base_experience: pointer_u32(raw, "/base_experience"),
        categories: type_names(raw),
        stats: slots(raw, "/stats")
            .filter_map(|slot| {
                Some(StatValue {
                    name: pointer_string(slot, "/stat/name")?,
                    base_value: pointer_u32(slot, "/base_stat").unwrap_or_default(),
                })
            })
            .collect(),
        abilities: slots(raw, "/abilities")
            .filter_map(|slot| {
                Some(Ability {
                    name: pointer_string(slot, "/ability/name")?,
                    is_hidden: slot
                        .get("is_hidden")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                })
            })
            .collect(),
        images: image_variants(raw),
    })
}

fn required_name(raw: &Value) -> Result<String, FetchError> {
    pointer_string(raw, "/name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| FetchError::MalformedData("record has no name".to_string()))
}

/// Upstream order, as returned
fn type_names(raw: &Value) -> Vec<String> {
    slots(raw, "/types")
        .filter_map(|slot| pointer_string(slot, "/type/name"))
        .collect()
}

fn image_variants(raw: &Value) -> ImageVariants {
    let Some(sprites) = raw.get("sprites") else {
        return ImageVariants::default();
    };
    ImageVariants {
        front_default: pointer_string(sprites, "/front_default"),
        back_default: pointer_string(sprites, "/back_default"),
        front_shiny: pointer_string(sprites, "/front_shiny"),
        back_shiny: pointer_string(sprites, "/back_shiny"),
        official_artwork: pointer_string(sprites, OFFICIAL_ARTWORK),
        official_artwork_shiny: pointer_string(sprites, OFFICIAL_ARTWORK_SHINY),
    }
}

fn slots<'a>(raw: &'a Value, pointer: &str) -> impl Iterator<Item = &'a Value> {
    raw.pointer(pointer)
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}
