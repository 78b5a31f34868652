use tempfile::TempDir;
use terrane::{CliConfig, GenerationPipeline, LocalStorage, ModelEngine};

fn cli_config(output_path: String) -> CliConfig {
    CliConfig {
        x_start: 0.0,
        x_end: 5.0,
        x_step: Some(1.0),
        y_start: 0.0,
        y_end: 4.0,
        y_step: Some(1.0),
        model_name: "integration_model".to_string(),
        output_path,
        formats: vec!["json".to_string()],
        compress: false,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn end_to_end_generation_writes_json() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = GenerationPipeline::new(storage, config);

    let engine = ModelEngine::new_with_monitoring(pipeline, false);
    let result = engine.run().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), output_path);

    let full_path = std::path::Path::new(&output_path).join("integration_model.json");
    assert!(full_path.exists());

    let document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&full_path).unwrap()).unwrap();

    assert_eq!(document["name"], "integration_model");
    assert_eq!(document["params3d"]["axis_x"]["blocks_count"], 5);
    assert_eq!(document["params3d"]["axis_y"]["blocks_count"], 4);

    // Default borders: 2 surfaces, each 4 rows of 5 cells.
    let borders = document["borders"].as_array().unwrap();
    assert_eq!(borders.len(), 2);
    assert_eq!(borders[0].as_array().unwrap().len(), 4);
    assert_eq!(borders[0][0].as_array().unwrap().len(), 5);

    for depth in borders[0].as_array().unwrap().iter().flat_map(|row| row.as_array().unwrap()) {
        let depth = depth.as_u64().unwrap();
        assert!((5..=10).contains(&depth));
    }
}

#[tokio::test]
async fn end_to_end_generation_with_compression() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(output_path.clone());
    config.formats = vec!["json".to_string(), "csv".to_string()];
    config.compress = true;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = GenerationPipeline::new(storage, config);
    let engine = ModelEngine::new(pipeline);

    let result_path = engine.run().await.unwrap();
    assert!(result_path.ends_with("integration_model.zip"));

    let full_path = std::path::Path::new(&output_path).join("integration_model.zip");
    assert!(full_path.exists());

    let zip_data = std::fs::read(&full_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    assert_eq!(archive.len(), 2);

    let mut file_names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    file_names.sort();

    assert_eq!(
        file_names,
        vec!["integration_model.borders.csv", "integration_model.json"]
    );

    // The loose files must not exist next to the archive.
    assert!(!std::path::Path::new(&output_path)
        .join("integration_model.json")
        .exists());

    let mut csv_file = archive.by_name("integration_model.borders.csv").unwrap();
    let mut csv_content = String::new();
    std::io::Read::read_to_string(&mut csv_file, &mut csv_content).unwrap();

    assert!(csv_content.starts_with("border,y,x,depth"));
    // Header plus 2 borders * 4 rows * 5 columns.
    assert_eq!(csv_content.trim_end().split('\n').count(), 1 + 2 * 4 * 5);
}

#[tokio::test]
async fn end_to_end_generation_rejects_invalid_axis() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(output_path.clone());
    config.x_start = 5.0;
    config.x_end = 0.0;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = GenerationPipeline::new(storage, config);
    let engine = ModelEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_err());

    // Nothing gets written when prepare fails.
    assert_eq!(std::fs::read_dir(&output_path).unwrap().count(), 0);
}
