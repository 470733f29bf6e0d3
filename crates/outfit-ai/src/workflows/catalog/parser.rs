use super::normalizer::normalize_cell;
use crate::workflows::outfit::{ColorPalette, Item, ItemId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_items<R: Read>(reader: R) -> Result<Vec<Item>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        items.push(record?.into_item());
    }

    Ok(items)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u64,
    #[serde(rename = "productDisplayName", default)]
    display_name: String,
    #[serde(rename = "dress_type", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    occasion: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    colors: Option<String>,
}

impl CatalogRow {
    fn into_item(self) -> Item {
        Item {
            id: ItemId(self.id),
            display_name: normalize_cell(&self.display_name),
            category: normalized(self.category),
            gender: normalized(self.gender),
            occasion: normalized(self.occasion),
            colors: normalized(self.colors)
                .map(|raw| ColorPalette::parse(&raw))
                .unwrap_or_default(),
        }
    }
}

/// Cells made only of invisible marks are as absent as blank ones.
fn normalized(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(normalize_cell)
        .filter(|cleaned| !cleaned.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
