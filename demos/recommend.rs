use tfidf_recommender::{Corpus, EngineConfig, MatchReport, SimilarityMatrix, TextTable};

fn main() -> tfidf_recommender::Result<()> {
    let config = EngineConfig::default().with_top_k(2);

    // build tables
    let books = TextTable::new(["Dune", "The Hobbit", "Untitled"])
        .with_field(
            "title",
            Corpus::from_token_lists(&[vec!["dune"], vec!["the", "hobbit"], vec!["None"]]),
        )?
        .with_field(
            "desc",
            Corpus::from_token_lists(&[
                vec!["desert", "planet", "spice"],
                vec!["dragon", "gold", "desert"],
                vec!["dragon", "dragon"],
            ]),
        )?;
    let films = TextTable::new(["Desert Storm", "Dragonheart"])
        .with_field(
            "title",
            Corpus::from_token_lists(&[vec!["desert", "storm"], vec!["dragon", "heart"]]),
        )?
        .with_field(
            "desc",
            Corpus::from_token_lists(&[vec!["war", "desert"], vec!["dragon", "knight", "gold"]]),
        )?;

    // vectorize and compare
    let books = books.vectorize_all(&config)?;
    let films = films.vectorize_all(&config)?;
    let title_desc = SimilarityMatrix::between(&books, &films, "desc", "title", &config)?;
    let desc_desc = SimilarityMatrix::between(&books, &films, "desc", "desc", &config)?;
    let title_title = SimilarityMatrix::between(&books, &films, "title", "title", &config)?;

    let report = MatchReport::build(
        &[
            ("Title - Description", &title_desc),
            ("All info - All info", &desc_desc),
            ("Title - Title", &title_title),
        ],
        &["Desert Storm", "Dragonheart"],
        &config,
    )?;

    // print result
    println!("Recommended for your history:\n{}", report.overall);
    for (criterion, per_film) in &report.per_criterion {
        for (film, hits) in per_film {
            println!("[{criterion}] because you watched {film}:\n{hits}");
        }
    }
    Ok(())
}
