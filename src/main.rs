use std::path::PathBuf;
use std::process;

use clap::Parser;

use mdsite::site::{copy_static, generate_pages_recursive};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from markdown content")]
struct Cli {
    /// Directory of markdown content
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Directory of static assets copied into the output as-is
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Output directory (recreated on every run)
    #[arg(long, default_value = "public")]
    output: PathBuf,

    /// Base path the site is served under, e.g. /my-repo/ on GitHub Pages
    #[arg(long, default_value = "/")]
    basepath: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = copy_static(&cli.static_dir, &cli.output) {
        eprintln!("Error copying static files: {}", e);
        process::exit(1);
    }

    if let Err(e) = generate_pages_recursive(&cli.content, &cli.template, &cli.output, &cli.basepath)
    {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Site generated in {}", cli.output.display());
}
