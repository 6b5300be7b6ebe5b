use ecofrete::models::{EnergyPrices, RouteRecord, TripContext, COLUMN_COUNT, DATASET_COLUMNS};
use ecofrete::services::report_builder::ReportBuilder;
use ecofrete::AppError;

mod common;

fn routes(distances_km: &[f64]) -> Vec<RouteRecord> {
    distances_km
        .iter()
        .map(|&distance_km| RouteRecord {
            distance_km,
            duration: "1 Horas e 0 minutos".to_string(),
            encoded_path: common::SAMPLE_POLYLINE.to_string(),
        })
        .collect()
}

#[test]
fn test_two_appends_write_one_header() {
    let store = common::temp_store();
    let builder = ReportBuilder::default();
    let prices = EnergyPrices::default();

    let first = builder
        .build(&routes(&[30.0, 35.0, 40.0]), &TripContext::new("A", "B", 2.0, 6.0), &prices)
        .unwrap();
    let second = builder
        .build(&routes(&[100.0, 100.0, 100.0]), &TripContext::new("C", "D", 0.0, 5.5), &prices)
        .unwrap();

    assert_eq!(store.append(&first).unwrap(), 3);
    assert_eq!(store.append(&second).unwrap(), 3);

    let content = std::fs::read_to_string(store.path()).unwrap();
    let header = DATASET_COLUMNS.join(",");
    assert_eq!(content.matches(&header).count(), 1, "header written once");
    assert!(content.starts_with(&header));
    assert_eq!(content.lines().count(), 7);

    let dataset = store.load().unwrap();
    assert_eq!(dataset.columns.len(), COLUMN_COUNT);
    assert_eq!(dataset.len(), 6);

    // Call order is preserved
    assert_eq!(dataset.rows[0].origin, "A");
    assert_eq!(dataset.rows[2].distance_km, 40.0);
    assert_eq!(dataset.rows[3].origin, "C");
    assert_eq!(dataset.rows[3].route, "Rota 1");
    assert_eq!(dataset.rows[5].route, "Rota 3");

    common::cleanup(&store);
}

#[test]
fn test_numbers_are_written_in_brazilian_format() {
    let store = common::temp_store();
    let rows = ReportBuilder::default()
        .build(&routes(&[1234.5]), &TripContext::new("A", "B", 0.0, 6.0), &EnergyPrices::default())
        .unwrap();

    store.append(&rows).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let data_line = content.lines().nth(1).unwrap();

    // Comma decimal separators force quoting
    assert!(data_line.starts_with("Rota 1,A,B,\"1.234,50\",1 Horas e 0 minutos,\"6,00\",\"0,00\""));

    let dataset = store.load().unwrap();
    assert_eq!(dataset.rows, rows);

    common::cleanup(&store);
}

#[test]
fn test_load_rejects_ragged_rows() {
    let store = common::temp_store();
    let mut content = DATASET_COLUMNS.join(",");
    content.push_str("\nRota 1,A,B\n");
    std::fs::write(store.path(), content).unwrap();

    match store.load() {
        Err(AppError::MalformedDataset(_)) => {}
        other => panic!("expected MalformedDataset, got {:?}", other),
    }

    common::cleanup(&store);
}

#[test]
fn test_load_rejects_unparseable_numbers() {
    let store = common::temp_store();
    let mut content = DATASET_COLUMNS.join(",");
    content.push('\n');
    content.push_str(&["Rota 1", "A", "B", "abc"].join(","));
    content.push_str(&",x".repeat(COLUMN_COUNT - 4));
    content.push('\n');
    std::fs::write(store.path(), content).unwrap();

    match store.load() {
        Err(AppError::MalformedDataset(msg)) => assert!(msg.contains("Distância (km)")),
        other => panic!("expected MalformedDataset, got {:?}", other),
    }

    common::cleanup(&store);
}

#[test]
fn test_empty_file_gets_header_on_append() {
    let store = common::temp_store();
    std::fs::write(store.path(), "").unwrap();
    assert!(store.load().unwrap().is_empty());

    let rows = ReportBuilder::default()
        .build(&routes(&[10.0]), &TripContext::new("A", "B", 1.0, 6.0), &EnergyPrices::default())
        .unwrap();
    store.append(&rows).unwrap();

    let dataset = store.load().unwrap();
    assert_eq!(dataset.len(), 1);

    common::cleanup(&store);
}
