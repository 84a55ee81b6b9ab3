/// Page generation glue: titles, templating, directory walking
use std::fs;
use std::path::Path;

use crate::error::SiteError;
use crate::markdown_to_html;

/// Extract the page title from the document's first h1 line.
///
/// This is a raw line scan, independent of block segmentation: the first
/// trimmed line that is a single `#` followed by a space (or nothing but
/// whitespace) yields the trimmed remainder.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    for line in markdown.split('\n') {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if rest.starts_with(' ') || rest.trim().is_empty() {
            return Ok(rest.trim().to_string());
        }
    }
    Err(SiteError::MissingTitle)
}

/// Generate one HTML page from a markdown file and a template.
///
/// The template's `{{ Title }}` and `{{ Content }}` placeholders are
/// substituted, then root-relative `href="/..."` / `src="/..."` URLs are
/// rebased onto `basepath` (a basepath of `/` leaves them unchanged).
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    println!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = fs::read_to_string(from_path)?;
    let template = fs::read_to_string(template_path)?;

    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content)
        .replace("href=\"/", &format!("href=\"{}", basepath))
        .replace("src=\"/", &format!("src=\"{}", basepath));

    if let Some(dest_dir) = dest_path.parent() {
        fs::create_dir_all(dest_dir)?;
    }
    fs::write(dest_path, page)?;
    Ok(())
}

/// Generate pages for every `*.md` file under `content_dir`, mirroring the
/// directory layout into `dest_dir` with `.html` extensions.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages_recursive(&path, template_path, &dest_dir.join(entry.file_name()), basepath)?;
        } else if path.extension() == Some(std::ffi::OsStr::new("md")) {
            let dest_path = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template_path, &dest_path, basepath)?;
        }
    }
    Ok(())
}

/// Recursively copy a static-assets directory, replacing the destination
/// wholesale so stale files never survive a rebuild.
pub fn copy_static(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir)?;
    }
    fs::create_dir_all(dest_dir)?;
    if !source_dir.exists() {
        eprintln!(
            "Warning: source directory {} does not exist",
            source_dir.display()
        );
        return Ok(());
    }
    copy_dir_contents(source_dir, dest_dir)
}

fn copy_dir_contents(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let source_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());
        if source_path.is_dir() {
            fs::create_dir_all(&dest_path)?;
            copy_dir_contents(&source_path, &dest_path)?;
        } else {
            fs::copy(&source_path, &dest_path)?;
        }
    }
    Ok(())
}
