//! End-to-end integration tests
//!
//! These tests validate the complete file-to-CSV pipeline using predefined
//! fixtures. Each test:
//! 1. Reads the input file from a fixture directory
//! 2. Resolves it into records with the matching record source
//! 3. Encodes and writes the document to a temporary file
//! 4. Compares the written bytes with expected.csv
//!
//! Fixtures are located in tests/fixtures/ and cover named and ordered
//! records, quoting, null handling, ragged rows, CSV input and non-string
//! scalars. Expected files use CRLF line endings.

#[cfg(test)]
mod tests {
    use csv_response::cli::InputFormat;
    use csv_response::io::{create_source, write_csv};
    use csv_response::EncoderConfig;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture through the pipeline and return the written output
    fn encode_fixture(
        fixture_name: &str,
        format: InputFormat,
        include_header: bool,
        config: &EncoderConfig,
    ) -> String {
        let extension = match format {
            InputFormat::Json => "json",
            InputFormat::Csv => "csv",
        };
        let input_path = format!("tests/fixtures/{}/input.{}", fixture_name, extension);
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let records = create_source(format, b',')
            .read(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", input_path, e));

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        write_csv(&records, include_header, config, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to write CSV: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    #[rstest]
    #[case("named_with_header", InputFormat::Json, true)]
    #[case("ordered_rows", InputFormat::Json, true)]
    #[case("quotes_and_nulls", InputFormat::Json, true)]
    #[case("ragged_rows", InputFormat::Json, false)]
    #[case("mixed_scalars", InputFormat::Json, true)]
    #[case("csv_input", InputFormat::Csv, true)]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] format: InputFormat,
        #[case] include_header: bool,
    ) {
        let actual_output =
            encode_fixture(fixture, format, include_header, &EncoderConfig::default());

        let expected_path = format!("tests/fixtures/{}/expected.csv", fixture);
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture, actual_output, expected_output
        );
    }

    #[test]
    fn test_custom_dialect() {
        let config = EncoderConfig::new()
            .separator(';')
            .record_separator("\n")
            .prevent_cast(true)
            .ignore_null_or_undefined(false);

        let output = encode_fixture("quotes_and_nulls", InputFormat::Json, true, &config);
        assert_eq!(
            output,
            "=\"note\";=\"missing\";=\"city\"\n=\"say \"\"hi\"\"\";=\"null\";=\"Paris, FR\"\n"
        );
    }

    #[test]
    fn test_without_header_line_count_matches_records() {
        let output = encode_fixture(
            "named_with_header",
            InputFormat::Json,
            false,
            &EncoderConfig::default(),
        );
        assert_eq!(output, "\"john\",\"1\"\r\n\"jane\",\"2\"\r\n");
    }

    #[test]
    fn test_output_is_repeatable() {
        let config = EncoderConfig::default();
        let first = encode_fixture("mixed_scalars", InputFormat::Json, true, &config);
        let second = encode_fixture("mixed_scalars", InputFormat::Json, true, &config);
        assert_eq!(first, second);
    }
}
