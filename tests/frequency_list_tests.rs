use name_presets::{Error, FrequencyList, FrequencyListConfig};
use test_utils::{frequency_test_fixture, FailingReader, TruncatedReader};

#[cfg(test)]
mod frequency_list_tests {
    use super::*;

    fn list_from_str(data: &str) -> Result<FrequencyList, Error> {
        FrequencyList::from_reader(data.as_bytes())
    }

    fn expect_format_error(data: &str) -> String {
        match list_from_str(data) {
            Err(Error::FormatError(msg)) => msg,
            other => panic!("Expected FormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_top_n() {
        let list = frequency_test_fixture();

        assert_eq!(list.top(1), ["Neo"]);
        assert_eq!(list.top(3), ["Neo", "Morpheus", "Trinity"]);
        assert_eq!(
            list.top(100),
            [
                "Neo",
                "Morpheus",
                "Trinity",
                "Smith",
                "Oracle",
                "Niobe",
                "Cypher",
                "Seraph",
                "Architect"
            ]
        );
    }

    #[test]
    fn test_top_zero_is_empty() {
        let list = frequency_test_fixture();

        assert!(list.top(0).is_empty());
    }

    #[test]
    fn test_top_at_length_returns_whole_list() {
        let list = frequency_test_fixture();

        assert_eq!(list.top(list.len()), list.names());
        assert_eq!(list.top(list.len() + 1), list.names());
        assert_eq!(list.top(usize::MAX).len(), 9);
    }

    #[test]
    fn test_frequency() {
        let list = frequency_test_fixture();

        assert_eq!(list.frequency("Neo"), 0.213);
        assert_eq!(list.frequency("Oracle"), 0.064);
        assert_eq!(list.frequency("Architect"), 0.021);
        assert_eq!(list.frequency("John"), 0.0);
    }

    #[test]
    fn test_frequency_is_case_sensitive() {
        let list = frequency_test_fixture();

        assert_eq!(list.frequency("neo"), 0.0);
        assert_eq!(list.frequency("NEO"), 0.0);
    }

    #[test]
    fn test_inline_data() {
        let list = list_from_str("Neo,0.213\nMorpheus,0.171\nTrinity,0.157").unwrap();

        assert_eq!(list.top(2), ["Neo", "Morpheus"]);
        assert_eq!(list.frequency("Trinity"), 0.157);
        assert_eq!(list.frequency("Unknown"), 0.0);
    }

    #[test]
    fn test_three_columns_is_format_error() {
        let msg = expect_format_error("Name,0.1234,Foo");

        assert!(msg.contains("found 3"), "{}", msg);
        assert!(msg.contains("row 1"), "{}", msg);
    }

    #[test]
    fn test_one_column_is_format_error() {
        let msg = expect_format_error("Neo,0.213\nName");

        assert!(msg.contains("found 1"), "{}", msg);
        assert!(msg.contains("row 2"), "{}", msg);
    }

    #[test]
    fn test_non_numeric_frequency_is_format_error() {
        let msg = expect_format_error("Neo,0.213\nMorpheus,0.171\nName,Foo");

        assert!(msg.contains("\"Foo\""), "{}", msg);
        assert!(msg.contains("row 3"), "{}", msg);
        assert!(msg.contains("invalid float literal"), "{}", msg);
    }

    #[test]
    fn test_frequency_is_not_trimmed() {
        let msg = expect_format_error("Neo, 0.213");

        assert!(msg.contains("\" 0.213\""), "{}", msg);
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let result = FrequencyList::from_reader(FailingReader);

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_read_failure_after_valid_rows_is_io_error() {
        let result = FrequencyList::from_reader(TruncatedReader::new("Neo,0.213\nMorpheus,0.171\n"));

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_quoted_names_may_contain_commas() {
        let list = list_from_str("\"Anderson, Thomas\",0.5\nNeo,0.25").unwrap();

        assert_eq!(list.top(1), ["Anderson, Thomas"]);
        assert_eq!(list.frequency("Anderson, Thomas"), 0.5);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_input_order_is_trusted() {
        let list = list_from_str("Seraph,0.036\nNeo,0.213").unwrap();

        assert_eq!(list.top(1), ["Seraph"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let list = list_from_str("Neo,0.3\nSmith,0.2\nNeo,0.1").unwrap();

        assert_eq!(list.frequency("Neo"), 0.3);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let list = list_from_str("").unwrap();

        assert!(list.is_empty());
        assert!(list.top(5).is_empty());
        assert_eq!(list.frequency("Neo"), 0.0);
    }

    #[test]
    fn test_iter_preserves_order() {
        let list = list_from_str("Neo,0.213\nMorpheus,0.171").unwrap();

        let pairs: Vec<(&str, f32)> = list.iter().collect();

        assert_eq!(pairs, vec![("Neo", 0.213), ("Morpheus", 0.171)]);
        assert_eq!(list.frequencies(), [0.213_f32, 0.171_f32]);
    }

    #[test]
    fn test_custom_delimiter() {
        let config = FrequencyListConfig {
            delimiter: b';',
            quote: b'"',
        };

        let list = FrequencyList::from_reader_with_custom_config(
            &config,
            "Anderson, Thomas;0.5\nNeo;0.25".as_bytes(),
        )
        .unwrap();

        assert_eq!(list.top(2), ["Anderson, Thomas", "Neo"]);
        assert_eq!(list.frequency("Neo"), 0.25);
    }
}
