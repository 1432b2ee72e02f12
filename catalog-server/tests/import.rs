//! CSV import integration tests

mod common;

use std::io::Write;

use catalog_server::db::products;
use catalog_server::import::import_products_from_csv;
use common::test_pool;

const HEADER: &str = "title,manufacturer,price,code,warranty,link,category,description,image,store";

#[tokio::test]
async fn test_import_inserts_rows() {
    let pool = test_pool().await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "Ryzen 7,AMD,30000,R7-5800X,24,https://example.com/r7,cpu,8 cores,img.png,PartsHouse").unwrap();
    writeln!(file, "Core i5,Intel,25000,I5-12400,36,,cpu,,,TechStore").unwrap();

    let imported = import_products_from_csv(&pool, file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(imported, 2);

    let all = products::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Ryzen 7");
    assert_eq!(all[0].price, 30000);
    assert_eq!(all[1].store, "TechStore");
}

#[tokio::test]
async fn test_malformed_numeric_fields_default_to_zero() {
    let pool = test_pool().await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "Mystery Part,Acme,not-a-price,X1,soon,,misc,,,Shop").unwrap();

    let imported = import_products_from_csv(&pool, file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(imported, 1);

    let all = products::list_all(&pool).await.unwrap();
    assert_eq!(all[0].price, 0);
    assert_eq!(all[0].warranty, 0);
}

#[tokio::test]
async fn test_wrong_column_count_aborts() {
    let pool = test_pool().await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "Too,few,columns").unwrap();

    let result = import_products_from_csv(&pool, file.path().to_str().unwrap()).await;
    assert!(result.is_err());
}
