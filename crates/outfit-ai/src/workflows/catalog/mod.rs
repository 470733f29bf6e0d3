mod corrections;
mod normalizer;
mod parser;

pub use corrections::{standard_corrections, AppliedCorrection, CatalogCorrection};

use crate::workflows::outfit::{Catalog, CatalogError};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Catalog(CatalogError),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Catalog(err) => write!(f, "inconsistent catalog data: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Catalog(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<CatalogError> for CatalogImportError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// Catalog plus the record corrections applied while loading it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub corrections: Vec<AppliedCorrection>,
}

/// Loads the fashion attribute CSV export into a read-only [`Catalog`].
///
/// Expected columns are `id`, `productDisplayName`, `dress_type`, `gender`,
/// `occasion`, and `colors`; other columns are ignored and blank cells are
/// treated as absent values.
#[derive(Debug, Clone)]
pub struct CatalogImporter {
    corrections: Vec<CatalogCorrection>,
}

impl CatalogImporter {
    pub fn standard() -> Self {
        Self::with_corrections(standard_corrections())
    }

    pub fn without_corrections() -> Self {
        Self::with_corrections(Vec::new())
    }

    pub fn with_corrections(corrections: Vec<CatalogCorrection>) -> Self {
        Self { corrections }
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadedCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        self.load_reader(file)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadedCatalog, CatalogImportError> {
        let items = parser::parse_items(reader)?;
        let mut catalog = Catalog::from_items(items)?;
        let applied = corrections::apply_corrections(&mut catalog, &self.corrections);

        for correction in &applied {
            info!(
                item_id = %correction.item_id,
                from = %correction.previous_category,
                to = %correction.category,
                "corrected catalog category"
            );
        }
        info!(items = catalog.len(), "catalog loaded");

        Ok(LoadedCatalog {
            catalog,
            corrections: applied,
        })
    }
}

impl Default for CatalogImporter {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::outfit::ItemId;
    use std::io::Cursor;

    const HEADER: &str = "id,gender,masterCategory,productDisplayName,dress_type,occasion,colors\n";

    fn load(body: &str) -> LoadedCatalog {
        CatalogImporter::standard()
            .load_reader(Cursor::new(format!("{HEADER}{body}")))
            .expect("catalog imports")
    }

    #[test]
    fn normalize_cell_strips_marks_and_collapses_whitespace() {
        let normalized = normalizer::normalize_for_tests("\u{feff}Track   Pants\u{200b} ");
        assert_eq!(normalized, "Track Pants");
    }

    #[test]
    fn blank_cells_become_absent_values() {
        let loaded = load("7,,Apparel,Plain Tee,, Casual ,\n");
        let item = loaded.catalog.get(ItemId(7)).expect("item loaded");
        assert_eq!(item.display_name, "Plain Tee");
        assert!(item.category.is_none());
        assert!(item.gender.is_none());
        assert_eq!(item.occasion.as_deref(), Some("Casual"));
        assert!(item.colors.is_empty());
    }

    #[test]
    fn cells_with_only_invisible_marks_are_absent() {
        let loaded = load("9,\u{200b},Apparel,Plain Tee,\u{feff},\u{200b}\u{feff},\u{200b}\n");
        let item = loaded.catalog.get(ItemId(9)).expect("item loaded");
        assert!(item.gender.is_none());
        assert!(item.category.is_none());
        assert!(item.occasion.is_none());
        assert!(item.colors.is_empty());
    }

    #[test]
    fn colors_are_split_and_keep_catalog_casing() {
        let loaded = load("8,Men,Apparel,Check Shirt,shirt,Casual,\"Navy Blue, White\"\n");
        let item = loaded.catalog.get(ItemId(8)).expect("item loaded");
        assert_eq!(item.colors.colors(), ["Navy Blue", "White"]);
    }

    #[test]
    fn known_mislabelled_record_is_corrected() {
        let loaded = load(
            "21379,Men,Apparel,Manchester United Men Solid Black Track Pants,Shirt,Sports,Black\n",
        );
        let item = loaded.catalog.get(ItemId(21379)).expect("item loaded");
        assert_eq!(item.category.as_deref(), Some("track pants"));
        assert_eq!(loaded.corrections.len(), 1);
        assert_eq!(loaded.corrections[0].previous_category, "Shirt");
    }

    #[test]
    fn correction_is_skipped_once_data_is_fixed_upstream() {
        let loaded = load("21379,Men,Apparel,Track Pants,Track Pants,Sports,Black\n");
        assert!(loaded.corrections.is_empty());
        let item = loaded.catalog.get(ItemId(21379)).expect("item loaded");
        assert_eq!(item.category.as_deref(), Some("Track Pants"));
    }

    #[test]
    fn corrections_can_be_disabled() {
        let csv = format!("{HEADER}21379,Men,Apparel,Track Pants,shirt,Sports,Black\n");
        let loaded = CatalogImporter::without_corrections()
            .load_reader(Cursor::new(csv))
            .expect("catalog imports");
        assert!(loaded.corrections.is_empty());
        let item = loaded.catalog.get(ItemId(21379)).expect("item loaded");
        assert_eq!(item.category.as_deref(), Some("shirt"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let csv = format!("{HEADER}1,Men,Apparel,A,shirt,Casual,Red\n1,Men,Apparel,B,jeans,Casual,Blue\n");
        let error = CatalogImporter::standard()
            .load_reader(Cursor::new(csv))
            .expect_err("duplicate rejected");
        assert!(matches!(
            error,
            CatalogImportError::Catalog(CatalogError::DuplicateId(ItemId(1)))
        ));
    }

    #[test]
    fn malformed_id_is_a_csv_error() {
        let csv = format!("{HEADER}abc,Men,Apparel,A,shirt,Casual,Red\n");
        let error = CatalogImporter::standard()
            .load_reader(Cursor::new(csv))
            .expect_err("bad id rejected");
        assert!(matches!(error, CatalogImportError::Csv(_)));
    }

    #[test]
    fn load_path_propagates_io_errors() {
        let error = CatalogImporter::standard()
            .load_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            CatalogImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
