use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Fish, Product};
use crate::error::CatalogError;

pub const PRODUCTS_SOURCE: &str = "products.json";
pub const FISH_SOURCE: &str = "fish-database.json";

/// Products in source order plus the fish lookup table.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    products: Vec<Product>,
    fish: HashMap<String, Fish>,
}

impl DataStore {
    /// Later fish with an already-seen `fish_id` replace the earlier record.
    pub fn new(products: Vec<Product>, fish: Vec<Fish>) -> Self {
        let mut index = HashMap::with_capacity(fish.len());
        for record in fish {
            index.insert(record.fish_id.clone(), record);
        }

        Self {
            products,
            fish: index,
        }
    }

    /// Parses both source documents. Either failing fails the whole load.
    pub fn from_json(products_json: &str, fish_json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(products_json).map_err(|source| CatalogError::Parse {
                source_name: PRODUCTS_SOURCE.to_string(),
                source,
            })?;
        let fish: Vec<Fish> =
            serde_json::from_str(fish_json).map_err(|source| CatalogError::Parse {
                source_name: FISH_SOURCE.to_string(),
                source,
            })?;

        debug!(
            products = products.len(),
            fish = fish.len(),
            "catalog data parsed"
        );

        Ok(Self::new(products, fish))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub const fn fish_index(&self) -> &HashMap<String, Fish> {
        &self.fish
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.product_id == product_id)
    }

    pub fn fish(&self, fish_id: &str) -> Option<&Fish> {
        self.fish.get(fish_id)
    }
}

/// Reads both data files concurrently and builds the store.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_files(
    products_path: &std::path::Path,
    fish_path: &std::path::Path,
) -> Result<DataStore, CatalogError> {
    let read = |path: &std::path::Path| {
        let path = path.to_path_buf();
        async move {
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| CatalogError::Read {
                    source_name: path.display().to_string(),
                    source,
                })
        }
    };

    let (products_json, fish_json) = tokio::try_join!(read(products_path), read(fish_path))?;

    DataStore::from_json(&products_json, &fish_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PRODUCTS: &str = r#"[
        {"product_id": "B2", "product_name": "透抽", "Category": "頭足類", "Price": 420},
        {"product_id": "A1", "product_name": "白帶魚", "Category": "魚類", "Price": "380", "related_fish_id": "F1"}
    ]"#;

    const FISH: &str = r#"[
        {"fish_id": "F1", "peakSeason": "11月至2月", "name": "白帶魚"},
        {"fish_id": "F2", "peakSeason": "夏季"},
        {"fish_id": "F1", "peakSeason": "全年"}
    ]"#;

    #[test]
    fn test_products_keep_source_order() -> Result<(), Box<dyn std::error::Error>> {
        let store = DataStore::from_json(PRODUCTS, FISH)?;

        let ids: Vec<&str> = store
            .products()
            .iter()
            .map(|product| product.product_id.as_str())
            .collect();
        assert_eq!(ids, ["B2", "A1"]);
        assert_eq!(store.product("A1").map(|p| p.product_name.as_str()), Some("白帶魚"));
        assert!(store.product("missing").is_none());

        Ok(())
    }

    #[test]
    fn test_duplicate_fish_id_overwrites_earlier_entry() -> Result<(), Box<dyn std::error::Error>> {
        let store = DataStore::from_json(PRODUCTS, FISH)?;

        assert_eq!(store.fish_index().len(), 2);
        assert_eq!(
            store.fish("F1").and_then(|fish| fish.peak_season.as_deref()),
            Some("全年")
        );

        Ok(())
    }

    #[test]
    fn test_parse_failure_names_the_source() {
        let products_error = DataStore::from_json("{not json", FISH).err();
        let fish_error = DataStore::from_json(PRODUCTS, r#"{"fish_id": "F1"}"#).err();

        assert_eq!(
            products_error.as_ref().map(CatalogError::source_name),
            Some(PRODUCTS_SOURCE)
        );
        assert_eq!(
            fish_error.as_ref().map(CatalogError::source_name),
            Some(FISH_SOURCE)
        );
    }

    fn write_temp(contents: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[tokio::test]
    async fn test_load_files() -> Result<(), Box<dyn std::error::Error>> {
        let products = write_temp(PRODUCTS)?;
        let fish = write_temp(FISH)?;

        let store = load_files(products.path(), fish.path()).await?;
        assert_eq!(store.products().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_files_fails_when_either_source_is_missing() -> Result<(), Box<dyn std::error::Error>> {
        let products = write_temp(PRODUCTS)?;
        let missing = std::path::Path::new("does/not/exist.json");

        let result = load_files(products.path(), missing).await;
        assert!(matches!(result, Err(CatalogError::Read { .. })));

        let result = load_files(missing, products.path()).await;
        assert!(matches!(result, Err(CatalogError::Read { .. })));

        Ok(())
    }
}
