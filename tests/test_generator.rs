mod common;

use portfolio_site::{SiteGenerator, SiteIndex};
use std::fs;

#[test]
fn test_generates_every_reachable_page() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let config = common::config_in(dir.path());
    let out = config.output_dir.clone();

    let report = SiteGenerator::new(config)?.strict(true).generate()?;

    // Per locale: 4 collapsed listings plus one per visible card (7 + 2 + 1 + 4).
    assert_eq!(report.pages, 2 * 18 + 3);
    assert_eq!(report.issues, 0);

    for path in [
        "index.html",
        "es/index.html",
        "en/index.html",
        "es/portfolio/index.html",
        "en/portfolio/ecom/index.html",
        "en/portfolio/ecom/mutter/index.html",
        "es/portfolio/personal/federico/index.html",
        "es/portfolio/lem/index.html",
        "styles.css",
        "site.json",
    ] {
        assert!(out.join(path).is_file(), "missing {path}");
    }
    assert!(!out.join("es/portfolio/ecom/lem").exists());

    let root = fs::read_to_string(out.join("index.html"))?;
    let es = fs::read_to_string(out.join("es/index.html"))?;
    assert_eq!(root, es);
    Ok(())
}

#[test]
fn test_static_page_expands_one_card() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let config = common::config_in(dir.path());
    let out = config.output_dir.clone();
    SiteGenerator::new(config)?.generate()?;

    let html = fs::read_to_string(out.join("en/portfolio/ecom/mutter/index.html"))?;
    assert_eq!(common::card_keys(&html), ["mutter", "bionova"]);
    assert_eq!(html.matches("card__detail").count(), 1);
    assert!(html.contains("id=\"detail-mutter\""));
    // Closing the open card leads back to the collapsed filter page.
    assert!(html.contains("href=\"/en/portfolio/ecom/\" class=\"card__toggle\""));
    Ok(())
}

#[test]
fn test_copies_assets_and_keeps_their_stylesheet() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let config = common::config_in(dir.path());
    fs::create_dir_all(config.assets_dir.join("img"))?;
    fs::write(config.assets_dir.join("img/lem.png"), b"png")?;
    fs::write(config.assets_dir.join("styles.css"), "body{}")?;
    let out = config.output_dir.clone();

    let report = SiteGenerator::new(config)?.generate()?;
    assert_eq!(report.assets, 2);
    assert_eq!(fs::read(out.join("img/lem.png"))?, b"png");
    assert_eq!(fs::read_to_string(out.join("styles.css"))?, "body{}");
    Ok(())
}

#[test]
fn test_site_index_is_written() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let config = common::config_in(dir.path());
    let out = config.output_dir.clone();
    SiteGenerator::new(config)?.generate()?;

    let index: SiteIndex = serde_json::from_str(&fs::read_to_string(out.join("site.json"))?)?;
    assert_eq!(index.projects.len(), 7);
    assert_eq!(index.highlights.len(), 3);
    Ok(())
}

#[test]
fn test_rejects_output_inside_assets() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let config = portfolio_site::SiteConfig {
        assets_dir: dir.path().to_path_buf(),
        output_dir: dir.path().join("dist"),
        ..portfolio_site::SiteConfig::default()
    };

    let err = SiteGenerator::new(config).err().expect("output inside assets is rejected");
    assert!(matches!(err, portfolio_site::SiteError::OutputInsideAssets { .. }));
    assert!(!dir.path().join("dist").exists());
    Ok(())
}
