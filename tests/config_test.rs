//! Tests for loading configuration and question files from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use trivia_board::{BoardShape, CategoryId, InMemorySource, QuestionSource, TriviaConfig};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_config_from_file() {
    let file = write_temp(
        r#"
        categories = 4
        clues_per_category = 3
        pool_size = 50
        source_url = "http://127.0.0.1:9000"
        seed = 1234
        skip_sparse_categories = true
        "#,
    );

    let config = TriviaConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config.shape().unwrap(), BoardShape::new(4, 3).unwrap());
    assert_eq!(*config.pool_size(), 50);
    assert_eq!(config.source_url(), "http://127.0.0.1:9000");
    assert_eq!(*config.seed(), Some(1234));
    assert!(*config.skip_sparse_categories());
}

#[test]
fn test_config_missing_file() {
    let err = TriviaConfig::from_file("/nonexistent/trivia.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_config_invalid_shape_in_file() {
    let file = write_temp("categories = 0\n");
    let err = TriviaConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error:"));
}

#[tokio::test]
async fn test_question_file_round_trip() {
    let file = write_temp(
        r#"[
            {"id": 101, "title": "Planets", "clues": [
                {"question": "Largest planet", "answer": "Jupiter"},
                {"question": "Has the most famous rings", "answer": "Saturn"}
            ]},
            {"id": 202, "title": "Elements", "clues": [
                {"question": "Symbol Fe", "answer": "Iron"}
            ]}
        ]"#,
    );

    let source = InMemorySource::from_file(file.path()).expect("Questions should load");
    let pool = source.list_categories(100).await.unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(*pool[0].clue_count(), 2);
    assert_eq!(pool[1].title(), "Elements");

    let planets = source.get_category(CategoryId::new(101)).await.unwrap();
    assert_eq!(planets.clues()[0].question(), "Largest planet");
}

#[test]
fn test_question_file_missing() {
    let err = InMemorySource::from_file("/nonexistent/questions.json").unwrap_err();
    assert!(err.message.contains("Failed to read question file"));
}

#[tokio::test]
async fn test_bundled_sample_questions_fill_a_classic_board() {
    use rand::SeedableRng;
    use trivia_board::BoardBuilder;

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_questions.json");
    let source = InMemorySource::from_file(path).expect("Sample questions should load");
    let builder = BoardBuilder::new(source, BoardShape::CLASSIC);

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
    let board = builder.build(&mut rng).await.expect("Sample should fill a board");
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 5);
}
