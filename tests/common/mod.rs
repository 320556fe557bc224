#![allow(dead_code)]

use portfolio_site::SiteConfig;
use regex::Regex;
use std::path::Path;

/// Config writing into `dir/dist` and reading assets from `dir/static`.
pub fn config_in(dir: &Path) -> SiteConfig {
    SiteConfig {
        output_dir: dir.join("dist"),
        assets_dir: dir.join("static"),
        ..SiteConfig::default()
    }
}

/// Keys of the cards in rendered order, read from `data-project` markers.
pub fn card_keys(html: &str) -> Vec<String> {
    let re = Regex::new(r#"<article [^>]*data-project="([a-z]+)""#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}
