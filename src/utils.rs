use std::io;
use std::path::Path;

/// Site identifier used as the output file prefix.
///
/// The scheme is stripped and everything from the first `/` on is dropped,
/// so `https://docs.example.com/guide/` becomes `docs.example.com`.
pub fn site_name(site: &str) -> String {
    let name = site.replace("https://", "").replace("http://", "");
    name.split('/').next().unwrap_or_default().to_string()
}

/// Location of the sitemap for a site
pub fn sitemap_url(site: &str) -> String {
    format!("{}/sitemap.xml", site.trim_end_matches('/'))
}

/// Creates the directory (and parents) if it does not exist yet
pub fn ensure_directory_exists(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        ::log::debug!("Creating output directory {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
