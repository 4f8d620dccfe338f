use rs_htmlchunks::{
    to_text_chunks, ArticleChunksExtractor, ArticleDetector, Chunk, ChunkType,
};

fn article_page(paragraph: &str) -> String {
    format!(
        "<html><body>\
         <div>Home</div><div>About</div><div>Contact</div>\
         <div>Unrelated teaser</div>\
         <div>Short blurb</div>\
         <h1>The Real Headline</h1>\
         <p>{paragraph}</p>\
         <p>A short closing remark.</p>\
         </body></html>"
    )
}

#[test]
fn detector_and_extractor_share_one_parse() {
    let paragraph = "word ".repeat(60);
    let html = article_page(paragraph.trim());
    let chunks = to_text_chunks(&html);

    let detector = ArticleDetector::new(200, 50);
    assert!(detector.is_article(&chunks));

    let article = ArticleChunksExtractor::new(200).extract(&chunks);
    assert_eq!(article[0].data, "The Real Headline");
    assert_eq!(article[0].kind, Some(ChunkType::Headline));
    assert_eq!(article.len(), 3);
}

#[test]
fn teaser_headline_outside_the_window_is_not_swept_in() {
    // Six boilerplate chunks separate the teaser headline from the anchor.
    let paragraph = "word ".repeat(60);
    let html = format!(
        "<html><body>\
         <h2>Teaser</h2>\
         <div>a</div><div>b</div><div>c</div><div>d</div><div>e</div><div>f</div>\
         <p>{}</p>\
         </body></html>",
        paragraph.trim()
    );
    let chunks = to_text_chunks(&html);

    let article = ArticleChunksExtractor::new(200).extract(&chunks);
    assert_eq!(article.len(), 1);
    assert!(article[0].data.starts_with("word"));
}

#[test]
fn boilerplate_only_page_is_not_an_article() {
    let html = "<html><body>\
                <div>Home</div><div>Products</div><div>Imprint</div>\
                <ul><li>Login</li><li>Register</li></ul>\
                </body></html>";
    let chunks = to_text_chunks(html);
    assert!(!chunks.is_empty());
    assert!(!ArticleDetector::default().is_article(&chunks));
}

#[test]
fn extractor_without_anchor_returns_the_full_page() {
    let html = "<html><body><div>short</div><div>also short</div></body></html>";
    let chunks = to_text_chunks(html);
    let article = ArticleChunksExtractor::default().extract(&chunks);
    assert_eq!(article, chunks.as_slice());
}

#[test]
fn extraction_is_idempotent_on_its_own_output() {
    let paragraph = "word ".repeat(60);
    let html = article_page(paragraph.trim());
    let chunks = to_text_chunks(&html);

    let extractor = ArticleChunksExtractor::new(200);
    let once = extractor.extract(&chunks).to_vec();
    let twice = extractor.extract(&once).to_vec();
    assert_eq!(once, twice);
}

#[test]
fn detector_verdict_is_monotonic_in_qualifying_chunks() {
    let detector = ArticleDetector::new(30, 10);
    let mut chunks = vec![Chunk::new("x".repeat(15)), Chunk::new("y".repeat(15))];
    assert!(detector.is_article(&chunks));

    // Growing the sequence with qualifying chunks can only keep it true.
    for _ in 0..5 {
        chunks.push(Chunk::new("z".repeat(10)));
        assert!(detector.is_article(&chunks));
    }
}

#[test]
fn chunk_sequences_serialize_for_downstream_consumers() {
    let chunks = to_text_chunks("<body><h1>Title</h1><p>Body</p></body>");
    let json = serde_json::to_string(&chunks).unwrap();
    assert!(json.contains(r#""kind":"headline""#));

    let round_tripped: Vec<Chunk> = serde_json::from_str(&json).unwrap();
    assert_eq!(round_tripped, chunks);
}
