use comment_etl::config::toml_config::TomlConfig;
use comment_etl::{CliConfig, CommentPipeline, EtlEngine, EtlError, LocalStorage, OutputFormat};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const NEWS: &str = "\
IdBerita,Headline,Content
B1,Harga beras naik,Isi berita satu
B2,Timnas menang,Isi berita dua
B3,Jalan tol baru dibuka,Isi berita tiga
B4,Festival budaya,Isi berita empat
";

const COMMENTS: &str = "\
IdKomentar,IdBerita,Komentar,Rating
K1,B2,Mantap,5
K2,B1,Mahal sekali,2
K3,B2,Luar biasa,4
K4,B3,Macet,3
K5,B1,Setuju,4
K6,B9,Salah kamar,5
K7,B3,,
";

fn write_inputs(dir: &Path, news: &str, comments: &str) -> (String, String) {
    let news_path = dir.join("berita.csv");
    let comments_path = dir.join("komentar.csv");
    std::fs::write(&news_path, news).unwrap();
    std::fs::write(&comments_path, comments).unwrap();
    (
        news_path.to_str().unwrap().to_string(),
        comments_path.to_str().unwrap().to_string(),
    )
}

fn cli_config(news: String, comments: String, output_path: String) -> CliConfig {
    CliConfig {
        news,
        comments,
        output_path,
        formats: vec![OutputFormat::Csv, OutputFormat::Json],
        compress: false,
        archive_name: "analysis_output.zip".to_string(),
        verbose: false,
        monitor: false,
        log_json: false,
        quiet: true,
    }
}

#[tokio::test]
async fn test_end_to_end_report_and_exports() {
    let temp_dir = TempDir::new().unwrap();
    let (news, comments) = write_inputs(temp_dir.path(), NEWS, COMMENTS);
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let pipeline = CommentPipeline::new(
        LocalStorage::default(),
        cli_config(news, comments, output_path.clone()),
    );
    let run = EtlEngine::new(pipeline).run().await.unwrap();

    let order: Vec<(&str, usize, f64)> = run
        .report
        .rows
        .iter()
        .map(|r| (r.article_id.as_str(), r.comment_count, r.average_rating))
        .collect();
    // B2 and B1 both have two comments; B2 wins on average. B3 has 3 and a blank (0).
    assert_eq!(
        order,
        vec![("B2", 2, 4.5), ("B1", 2, 3.0), ("B3", 2, 1.5), ("B4", 0, 0.0)]
    );

    assert_eq!(run.report.summary.total_articles, 4);
    assert_eq!(run.report.summary.total_comments, 7);
    assert_eq!(run.report.summary.articles_without_comments, 1);
    assert!(run.warnings.is_empty());
    assert_eq!(run.output_path, output_path);

    let csv = std::fs::read_to_string(Path::new(&output_path).join("report.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID Berita,Headline,Rata-rata Rating,Jumlah Komentar");
    assert_eq!(lines[1], "B2,Timnas menang,4.5,2");
    assert_eq!(lines.len(), 5);

    let json = std::fs::read(Path::new(&output_path).join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["summary"]["total_comments"], 7);
    assert_eq!(value["rows"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_end_to_end_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let (news, comments) = write_inputs(temp_dir.path(), NEWS, COMMENTS);
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let config = cli_config(news, comments, output_path);
    let first = EtlEngine::new(CommentPipeline::new(LocalStorage::default(), config.clone()))
        .run()
        .await
        .unwrap();
    let second = EtlEngine::new(CommentPipeline::new(LocalStorage::default(), config))
        .run()
        .await
        .unwrap();

    assert_eq!(first.report, second.report);
}

#[tokio::test]
async fn test_bad_rating_skips_analysis_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let bad_comments = "IdKomentar,IdBerita,Komentar,Rating\nK1,B1,Oke,4\nK2,B1,Hmm,abc\n";
    let (news, comments) = write_inputs(temp_dir.path(), NEWS, bad_comments);
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let pipeline = CommentPipeline::new(
        LocalStorage::default(),
        cli_config(news, comments, output_path.clone()),
    );
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, EtlError::InsufficientData { .. }));
    assert_eq!(err.exit_code(), 0);
    assert!(err.to_string().contains("Rating"));
    assert!(!Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_missing_input_file_is_reported_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let (news, _) = write_inputs(temp_dir.path(), NEWS, COMMENTS);
    let missing = temp_dir.path().join("tidak_ada.csv").to_str().unwrap().to_string();
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let pipeline = CommentPipeline::new(
        LocalStorage::default(),
        cli_config(news, missing, output_path),
    );
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, EtlError::InsufficientData { .. }));
    assert!(err.to_string().contains("tidak_ada.csv"));
}

#[tokio::test]
async fn test_toml_config_with_compression() {
    let temp_dir = TempDir::new().unwrap();
    let (news, comments) = write_inputs(temp_dir.path(), NEWS, COMMENTS);
    let output_path = temp_dir.path().join("out");
    let normalized_output = output_path.to_str().unwrap().replace('\\', "/");

    let config_content = format!(
        r#"
[pipeline]
name = "zip-test"

[source]
news_file = "{}"
comments_file = "{}"

[load]
output_path = "{}"
output_formats = ["csv", "tsv", "json"]

[load.compression]
enabled = true
filename = "hasil.zip"
"#,
        news.replace('\\', "/"),
        comments.replace('\\', "/"),
        normalized_output
    );
    let config_path = temp_dir.path().join("etl-config.toml");
    tokio::fs::write(&config_path, config_content).await.unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    let engine = EtlEngine::new(CommentPipeline::new(LocalStorage::default(), config));
    let run = engine.run().await.unwrap();

    assert!(run.output_path.ends_with("hasil.zip"));
    let bytes = std::fs::read(&run.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 3);

    let mut tsv = String::new();
    archive
        .by_name("report.tsv")
        .unwrap()
        .read_to_string(&mut tsv)
        .unwrap();
    assert!(tsv.starts_with("ID Berita\tHeadline"));
    assert!(!output_path.join("report.csv").exists());
}
