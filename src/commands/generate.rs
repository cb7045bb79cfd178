//! Schema-driven generate command handler.

use anyhow::Context;
use std::path::Path;
use synth_core::Schema;
use synth_populate_csv::CsvPopulator;

/// Run the generate command: populate datasets declared in a schema file.
pub fn run(
    schema_path: &Path,
    dataset: Option<&str>,
    seed: u64,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let schema = Schema::from_file(schema_path)
        .with_context(|| format!("Failed to load schema from {}", schema_path.display()))?;

    let populator = CsvPopulator::new(schema, seed);

    match dataset {
        Some(name) => {
            let definition = populator
                .schema()
                .get_dataset(name)
                .with_context(|| format!("Dataset '{name}' not found in schema"))?;

            std::fs::create_dir_all(output_dir).with_context(|| {
                format!("Failed to create output directory {}", output_dir.display())
            })?;
            let path = output_dir.join(definition.output_file());

            let metrics = populator.populate(name, &path)?;
            tracing::info!(
                "Dataset '{}': {} rows ({:.0} rows/sec)",
                name,
                metrics.rows_written,
                metrics.rows_per_second()
            );
        }
        None => {
            for (name, metrics) in populator.populate_all(output_dir)? {
                tracing::info!(
                    "Dataset '{}': {} rows ({:.0} rows/sec)",
                    name,
                    metrics.rows_written,
                    metrics.rows_per_second()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEMA: &str = r#"
seed: 42
datasets:
  - name: ids
    column: id
    rows: 25
    generator:
      type: pattern
      pattern: "id-{index}"

  - name: scores
    column: score
    rows: 10
    output: scores_out.csv
    generator:
      type: int_range
      min: 0
      max: 100
"#;

    #[test]
    fn test_generate_all_datasets() {
        let temp_dir = TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("schema.yaml");
        std::fs::write(&schema_path, SCHEMA).unwrap();

        let out = temp_dir.path().join("out");
        run(&schema_path, None, 42, &out).unwrap();

        assert!(out.join("ids.csv").exists());
        assert!(out.join("scores_out.csv").exists());

        let ids = std::fs::read_to_string(out.join("ids.csv")).unwrap();
        assert_eq!(ids.lines().count(), 26);
    }

    #[test]
    fn test_generate_single_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("schema.yaml");
        std::fs::write(&schema_path, SCHEMA).unwrap();

        let out = temp_dir.path().join("out");
        run(&schema_path, Some("scores"), 42, &out).unwrap();

        assert!(out.join("scores_out.csv").exists());
        assert!(!out.join("ids.csv").exists());
    }

    #[test]
    fn test_missing_dataset_fails() {
        let temp_dir = TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("schema.yaml");
        std::fs::write(&schema_path, SCHEMA).unwrap();

        let result = run(&schema_path, Some("nope"), 42, temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_schema_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = run(
            &temp_dir.path().join("absent.yaml"),
            None,
            42,
            temp_dir.path(),
        );
        assert!(result.is_err());
    }
}
