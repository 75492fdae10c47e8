//! Backups exported through the storage crate and restored into a fresh
//! data directory.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use rust_decimal::Decimal;
use shoplist_core::backup::{self, BackupData, PreferencesRecord, ProductRecord, ShoppingRecord};
use shoplist_core::config::GeneralConfig;
use shoplist_core::models::{Product, Shopping};
use shoplist_core::types::{FontSize, NightTheme};
use shoplist_storage::{
    BackupService, ConfigStores, JsonRecordRepository, RecordRepository, RecordSet,
};

fn groceries() -> RecordSet {
    RecordSet {
        shoppings: vec![ShoppingRecord {
            id: "s1".to_owned(),
            name: "Groceries".to_owned(),
            ..ShoppingRecord::default()
        }],
        products: vec![ProductRecord {
            id: "p1".to_owned(),
            directory: "s1".to_owned(),
            name: "Milk".to_owned(),
            ..ProductRecord::default()
        }],
        autocompletes: Vec::new(),
    }
}

async fn service_in(dir: &Path) -> BackupService<JsonRecordRepository> {
    let stores = ConfigStores::open(&dir.join("settings")).await.unwrap();
    let repository = JsonRecordRepository::new(dir.join("records.json"));
    BackupService::new(repository, stores, dir.join("Documents/ShoppingList"))
}

#[tokio::test]
async fn test_groceries_backup_roundtrip() {
    let source_dir = tempfile::tempdir().unwrap();
    let source = service_in(source_dir.path()).await;
    source.repository().replace_all(groceries()).await.unwrap();

    let path = source.export().await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.ends_with('\n'));
    assert_eq!(
        backup::decode(&text).unwrap(),
        BackupData {
            shoppings: groceries().shoppings,
            products: groceries().products,
            autocompletes: Vec::new(),
            preferences: PreferencesRecord::default(),
        }
    );

    let target_dir = tempfile::tempdir().unwrap();
    let target = service_in(target_dir.path()).await;
    target.import(&path).await.unwrap();

    assert_eq!(target.repository().load_all().await.unwrap(), groceries());
    assert_eq!(target.stores().general.get(), GeneralConfig::default());
}

#[tokio::test]
async fn test_settings_travel_with_backup() {
    let source_dir = tempfile::tempdir().unwrap();
    let source = service_in(source_dir.path()).await;

    let mut general = GeneralConfig::default();
    general.night_theme = NightTheme::Enabled;
    general.font_size = FontSize::Large;
    general.currency = "₽".to_owned();
    general.display_currency_to_left = false;
    general.tax_rate = Decimal::new(20, 0);
    source.stores().general.set(&general).await.unwrap();

    let path = source.export().await.unwrap();

    let target_dir = tempfile::tempdir().unwrap();
    let target = service_in(target_dir.path()).await;
    target.import(&path).await.unwrap();

    // Restored settings survive reopening the stores from disk.
    let reopened = ConfigStores::open(&target_dir.path().join("settings"))
        .await
        .unwrap();
    assert_eq!(reopened.general.get(), general);
}

#[tokio::test]
async fn test_import_replaces_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("groceries.backup");
    let source = service_in(&dir.path().join("source")).await;
    source.repository().replace_all(groceries()).await.unwrap();
    source.export_to(&backup_path).await.unwrap();

    let target = service_in(&dir.path().join("target")).await;
    target
        .repository()
        .replace_all(RecordSet {
            shoppings: vec![ShoppingRecord {
                id: "old".to_owned(),
                name: "Old list".to_owned(),
                ..ShoppingRecord::default()
            }],
            ..RecordSet::default()
        })
        .await
        .unwrap();

    target.import(&backup_path).await.unwrap();

    let records = target.repository().load_all().await.unwrap();
    assert_eq!(records, groceries());
}

#[tokio::test]
async fn test_hand_written_backup_imports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manual.backup");
    let text = concat!(
        "shopping:{\"id\":\"s1\",\"name\":\"product: and preferences: in a name\",\"location\":\"ARCHIVE\"}\r\n",
        "\r\n",
        "# comment line\r\n",
        "product:{\"id\":\"p1\",\"directory\":\"s1\",\"name\":\"Cheese\",\"price\":\"4.50\",\"quantity\":\"2\",",
        "\"discount\":\"1\",\"discountAsPercent\":\"false\",\"total\":\"8.00\"}\r\n",
        "preferences:{\"currency\":\"€\",\"displayCurrencyToLeft\":\"false\",\"fontSize\":\"GIGANTIC\"}"
    );
    std::fs::write(&path, text).unwrap();

    let service = service_in(&dir.path().join("data")).await;
    let data = service.import(&path).await.unwrap();
    assert_eq!(data.shoppings.len(), 1);
    assert_eq!(data.products.len(), 1);
    assert_eq!(data.shoppings[0].name, "product: and preferences: in a name");

    let general = service.stores().general.get();
    assert_eq!(general.currency, "€");
    assert!(!general.display_currency_to_left);
    assert_eq!(general.font_size, FontSize::Medium);

    let currency = general.currency();
    let products: Vec<Product> = data
        .products
        .iter()
        .map(|record| Product::from_record(record, &currency))
        .collect();
    let shopping = Shopping::from_record(&data.shoppings[0], &currency);
    assert_eq!(products[0].calculate_total(2).value(), Decimal::new(800, 2));
    assert_eq!(shopping.calculate_total(&products).format(2), "8.00 €");
}

#[tokio::test]
async fn test_corrupt_backup_leaves_data_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.backup");
    std::fs::write(&path, "shopping:{\"id\":\"s9\"}\nproduct:not json").unwrap();

    let service = service_in(&dir.path().join("data")).await;
    service.repository().replace_all(groceries()).await.unwrap();

    let err = service.import(&path).await.unwrap_err();
    assert!(err.to_string().starts_with("line 2: invalid product record"));
    assert_eq!(service.repository().load_all().await.unwrap(), groceries());
    assert!(service.stores().general.raw().is_empty());
}

#[tokio::test]
async fn test_out_of_range_values_import_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extreme.backup");
    let text = concat!(
        "shopping:{\"id\":\"s1\",\"name\":\"Yacht\",\"created\":\"1709647620000\"}\n",
        "product:{\"id\":\"p1\",\"directory\":\"s1\",\"name\":\"Hull\",",
        "\"price\":\"79228162514264337593543950335\",\"quantity\":\"2\",",
        "\"taxRate\":\"20\",\"taxRateAsPercent\":\"true\"}\n",
        "preferences:{\"dateFormat\":\"%Q\",\"timeFormat\":\"%H:%M\"}"
    );
    std::fs::write(&path, text).unwrap();

    let service = service_in(&dir.path().join("data")).await;
    let data = service.import(&path).await.unwrap();

    let general = service.stores().general.get();
    assert_eq!(general, GeneralConfig::default());

    let currency = general.currency();
    let mut products: Vec<Product> = data
        .products
        .iter()
        .map(|record| Product::from_record(record, &currency))
        .collect();
    products[0].total = products[0].calculate_total(general.money_fraction_digits);
    assert_eq!(products[0].total.value(), Decimal::MAX);

    let shopping = Shopping::from_record(&data.shoppings[0], &currency);
    assert_eq!(shopping.calculate_total(&products).value(), Decimal::MAX);
    assert!(!shopping.created.format_local(&general.date_format).is_empty());
}
