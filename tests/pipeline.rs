use tfidf_recommender::{
    best_matches, Corpus, Document, EngineConfig, MatchReport, SimilarityMatrix, Snapshot, TextTable,
};

const WORDS: [&str; 7] = ["shark", "camel", "shark", "camel", "shark", "kamel", "james"];

/// every word split into single-letter tokens
fn letters() -> Corpus {
    WORDS
        .iter()
        .map(|w| Document::Tokens(w.chars().map(String::from).collect()))
        .collect()
}

fn letter_table() -> TextTable {
    TextTable::new(WORDS)
        .with_field("title", letters())
        .unwrap()
        .with_field("desc", letters())
        .unwrap()
        .with_field("text", letters())
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
}

#[test]
fn letter_corpus_vectors() {
    let vectorized = letter_table().vectorize_all(&EngineConfig::default()).unwrap();
    let title = vectorized.field("title").unwrap();
    for (a, e) in title[0].iter().zip([0.55961579, 0.84729786, 0.0, 0.84729786, 0.55961579]) {
        assert_close(*a, e);
    }
    let text = vectorized.field("text").unwrap();
    for (a, e) in text[5].iter().zip([0.55961579, 0.0, 0.55961579, 0.55961579, 0.84729786]) {
        assert_close(*a, e);
    }
}

#[test]
fn letter_corpus_desc_text_matrix() {
    let config = EngineConfig::default();
    let vectorized = letter_table().vectorize_all(&config).unwrap();
    let matrix = SimilarityMatrix::between(&vectorized, &vectorized, "desc", "text", &config).unwrap();

    // repeated titles collapse into one column each
    assert_eq!(matrix.shape(), (7, 4));
    assert_eq!(matrix.column_keys().collect::<Vec<_>>(), vec!["shark", "camel", "kamel", "james"]);

    let expected = [
        [1.000000, 0.672885, 0.682348, 0.601019],
        [0.672885, 1.000000, 0.930731, 0.953498],
        [1.000000, 0.672885, 0.682348, 0.601019],
        [0.672885, 1.000000, 0.930731, 0.953498],
        [1.000000, 0.672885, 0.682348, 0.601019],
        [0.682348, 0.930731, 1.000000, 0.782295],
        [0.601019, 0.953498, 0.782295, 1.000000],
    ];
    for (row, values) in expected.iter().enumerate() {
        for (key, value) in ["shark", "camel", "kamel", "james"].iter().zip(values) {
            assert_close(matrix.get(row, key).unwrap(), *value);
        }
    }
}

#[test]
fn single_token_corpus_fixture() {
    let corpus = Corpus::from_token_lists(&[
        vec!["shark"],
        vec!["camel"],
        vec!["shark"],
        vec!["camel"],
        vec!["shark"],
        vec!["kamel"],
    ]);
    let table = TextTable::new(["s1", "c1", "s2", "c2", "s3", "k"])
        .with_field("title", corpus)
        .unwrap();
    let vectorized = table.vectorize(&["title"], &EngineConfig::default()).unwrap();
    let kamel = &vectorized.field("title").unwrap()[5];
    assert_eq!(kamel.len(), 1);
    assert_close(kamel[0], 1.791759469228055);
}

#[test]
fn books_for_films_end_to_end() {
    let config = EngineConfig::default().with_top_k(2);
    let books = TextTable::new(["Dune", "The Hobbit", "Untitled"])
        .with_field(
            "title",
            Corpus::from_token_lists(&[vec!["dune"], vec!["the", "hobbit"], vec!["None"]]),
        )
        .unwrap()
        .with_field(
            "desc",
            Corpus::from_token_lists(&[
                vec!["desert", "planet", "spice"],
                vec!["dragon", "gold", "desert"],
                vec!["dragon", "dragon"],
            ]),
        )
        .unwrap()
        .vectorize_all(&config)
        .unwrap();
    let films = TextTable::new(["Desert Storm", "Dragonheart"])
        .with_field(
            "title",
            Corpus::from_token_lists(&[vec!["desert", "storm"], vec!["dragon", "heart"]]),
        )
        .unwrap()
        .with_field(
            "desc",
            Corpus::from_token_lists(&[vec!["war", "desert"], vec!["dragon", "knight", "gold"]]),
        )
        .unwrap()
        .vectorize_all(&config)
        .unwrap();

    let title_desc = SimilarityMatrix::between(&books, &films, "desc", "title", &config).unwrap();
    let desc_desc = SimilarityMatrix::between(&books, &films, "desc", "desc", &config).unwrap();
    let title_title = SimilarityMatrix::between(&books, &films, "title", "title", &config).unwrap();

    let hits = best_matches(&desc_desc, "Dragonheart", config.top_k).unwrap();
    assert_eq!(hits.titles(), vec!["Dune", "The Hobbit"]);
    assert_close(hits.list[0].score, 0.935825876680311);

    // the empty title of "Untitled" compares as zero
    assert_eq!(title_title.get(2, "Desert Storm"), Some(0.0));

    let report = MatchReport::build(
        &[
            ("Title - Description", &title_desc),
            ("All info - All info", &desc_desc),
            ("Title - Title", &title_title),
        ],
        &["Desert Storm", "Dragonheart"],
        &config,
    )
    .unwrap();
    assert_eq!(report.overall.len(), 2);
    assert_eq!(report.per_criterion.len(), 3);
    assert!(report.criterion("Title - Title").unwrap().contains_key("Dragonheart"));

    let restored = SimilarityMatrix::from_cbor(&desc_desc.to_cbor().unwrap()).unwrap();
    assert_eq!(restored, desc_desc);
}
