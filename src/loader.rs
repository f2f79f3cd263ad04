use crate::arff;
use crate::dataset::{parse_number, Attribute, Dataset, Value};
use crate::error::LoadError;
use log::debug;
use std::path::Path;

/// Training schema a file of new records is read against.
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    pub attributes: &'a [Attribute],
    pub class_index: usize,
}

/// Loads a dataset, picking the reader by file extension.
///
/// Supported formats:
/// * `.arff` – attribute-relation file
/// * `.csv`  – header row with attribute names, one row per instance
///
/// When the file does not declare a class attribute the last attribute
/// becomes the class.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    load(path, None)
}

/// Like [`load_file`], but CSV columns take their kinds and labels from
/// `schema` instead of being inferred, and the class index is the schema's.
pub fn load_file_with_schema(path: &Path, schema: Schema<'_>) -> Result<Dataset, LoadError> {
    load(path, Some(schema))
}

fn load(path: &Path, schema: Option<Schema<'_>>) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mut dataset = match ext.as_str() {
        "arff" => load_arff(path)?,
        "csv" => load_csv(path, schema.map(|s| s.attributes))?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if let Some(schema) = schema {
        dataset.class_index = Some(schema.class_index);
    } else if dataset.class_index.is_none() {
        dataset.class_index = dataset.num_attributes().checked_sub(1);
    }
    debug!(
        "read {} rows, {} attributes, class index {:?} from {}",
        dataset.num_rows(),
        dataset.num_attributes(),
        dataset.class_index,
        path.display()
    );

    Ok(dataset)
}

fn load_arff(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(arff::parse(&text)?)
}

/// Without a schema, columns whose non-missing cells all parse as numbers
/// become numeric and the rest become nominal with labels in order of first
/// appearance. With one, columns are matched to attributes by name.
fn load_csv(path: &Path, schema: Option<&[Attribute]>) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::CsvLayout("missing header row".to_string()));
    }

    let mut cells: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|cell| {
                let cell = cell.trim();
                if cell.is_empty() || cell == "?" {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        cells.push(row);
    }

    // Column of the file feeding each attribute:
    let (attributes, columns): (Vec<Attribute>, Vec<usize>) = match schema {
        Some(attributes) => {
            if headers.len() != attributes.len() {
                return Err(LoadError::CsvLayout(format!(
                    "expected {} columns, found {}",
                    attributes.len(),
                    headers.len()
                )));
            }
            let columns = attributes
                .iter()
                .map(|attribute| {
                    headers
                        .iter()
                        .position(|h| *h == attribute.name)
                        .ok_or_else(|| {
                            let message = format!("missing column {:?}", attribute.name);
                            LoadError::CsvLayout(message)
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            (attributes.to_vec(), columns)
        }
        None => {
            let attributes = headers
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    infer_attribute(name, cells.iter().map(|row| row[col].as_deref()))
                })
                .collect();
            (attributes, (0..headers.len()).collect())
        }
    };

    let relation = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data")
        .to_string();
    let mut dataset = Dataset::new(relation, attributes);

    for (row_no, row) in cells.iter().enumerate() {
        let values: Result<Vec<Value>, String> = dataset
            .attributes
            .iter()
            .zip(columns.iter())
            .map(|(attribute, &col)| cell_value(attribute, row[col].as_deref()))
            .collect();
        if let Err(message) = values.and_then(|values| dataset.push_row(values)) {
            return Err(LoadError::CsvLayout(format!("row {}: {}", row_no + 1, message)));
        }
    }

    Ok(dataset)
}

fn cell_value(attribute: &Attribute, cell: Option<&str>) -> Result<Value, String> {
    let Some(text) = cell else {
        return Ok(Value::Missing);
    };
    let value = if attribute.is_nominal() {
        attribute.value_index(text).map(Value::Nominal)
    } else {
        parse_number(text).map(Value::Numeric)
    };
    value.ok_or_else(|| format!("{:?} is not a valid value of {:?}", text, attribute.name))
}

fn infer_attribute<'a>(
    name: &str,
    column: impl Iterator<Item = Option<&'a str>> + Clone,
) -> Attribute {
    let numeric = column
        .clone()
        .flatten()
        .all(|cell| parse_number(cell).is_some());
    if numeric {
        return Attribute::numeric(name);
    }

    let mut labels: Vec<String> = Vec::new();
    for cell in column.flatten() {
        if !labels.iter().any(|l| l == cell) {
            labels.push(cell.to_string());
        }
    }
    Attribute::nominal(name, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn arff_class_defaults_to_last_attribute() {
        let file = write_temp(
            ".arff",
            "@relation r\n@attribute a numeric\n@attribute b numeric\n\
             @attribute c {x,y}\n@data\n1,2,x\n3,4,y\n",
        );
        let data = load_file(file.path()).unwrap();
        assert_eq!(data.num_rows(), 2);
        assert_eq!(data.num_attributes(), 3);
        assert_eq!(data.class_index, Some(data.num_attributes() - 1));
    }

    #[test]
    fn infers_csv_column_types() {
        let file = write_temp(
            ".csv",
            "outlook,temperature,play\nsunny,85,no\novercast,,yes\nrainy,70.5,?\n",
        );
        let data = load_file(file.path()).unwrap();
        assert_eq!(
            data.attributes,
            vec![
                Attribute::nominal("outlook", vec!["sunny", "overcast", "rainy"]),
                Attribute::numeric("temperature"),
                Attribute::nominal("play", vec!["no", "yes"]),
            ]
        );
        assert_eq!(data.rows[1][1], Value::Missing);
        assert_eq!(data.rows[2][1], Value::Numeric(70.5));
        assert_eq!(data.rows[2][2], Value::Missing);
        assert_eq!(data.class_index, Some(2));
    }

    #[test]
    fn non_finite_cells_make_a_column_nominal() {
        let file = write_temp(".csv", "reading,class\n1.5,a\nnan,b\ninf,a\n");
        let data = load_file(file.path()).unwrap();
        assert_eq!(
            data.attributes[0],
            Attribute::nominal("reading", vec!["1.5", "nan", "inf"])
        );
    }

    fn weather_schema() -> Vec<Attribute> {
        vec![
            Attribute::nominal("outlook", vec!["sunny", "overcast", "rainy"]),
            Attribute::numeric("temperature"),
            Attribute::nominal("play", vec!["yes", "no"]),
        ]
    }

    #[test]
    fn schema_fixes_kinds_and_label_indices() {
        // Only "rainy" appears, and the class column is entirely missing.
        let file = write_temp(".csv", "temperature,outlook,play\n70,rainy,?\n64,rainy,\n");
        let attributes = weather_schema();
        let schema = Schema {
            attributes: &attributes,
            class_index: 2,
        };
        let data = load_file_with_schema(file.path(), schema).unwrap();

        assert_eq!(data.attributes, attributes);
        assert_eq!(data.class_index, Some(2));
        assert_eq!(
            data.rows[0],
            vec![Value::Nominal(2), Value::Numeric(70.0), Value::Missing]
        );
    }

    #[test]
    fn schema_rejects_undeclared_labels_and_bad_numbers() {
        let attributes = weather_schema();
        let schema = Schema {
            attributes: &attributes,
            class_index: 2,
        };

        let file = write_temp(".csv", "outlook,temperature,play\nfoggy,70,?\n");
        assert!(matches!(
            load_file_with_schema(file.path(), schema),
            Err(LoadError::CsvLayout(message)) if message.contains("foggy")
        ));

        let file = write_temp(".csv", "outlook,temperature,play\nsunny,nan,?\n");
        assert!(matches!(
            load_file_with_schema(file.path(), schema),
            Err(LoadError::CsvLayout(_))
        ));

        let file = write_temp(".csv", "outlook,humidity,play\nsunny,70,?\n");
        assert!(matches!(
            load_file_with_schema(file.path(), schema),
            Err(LoadError::CsvLayout(message)) if message.contains("temperature")
        ));
    }

    #[test]
    fn ragged_csv_is_an_error() {
        let file = write_temp(".csv", "a,b\n1,2\n3\n");
        assert!(matches!(load_file(file.path()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.arff")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".xlsx", "");
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }
}
