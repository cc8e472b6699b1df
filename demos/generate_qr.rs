//! Generate a couple of QR codes into the current directory
//!
//! Usage: cargo run --example generate_qr

use urlqr::{GeneratorConfig, LoggingOptions, QrGenerator, logging};

fn main() -> urlqr::Result<()> {
    logging::init(&LoggingOptions {
        level: "urlqr=debug".to_string(),
        ..LoggingOptions::default()
    })?;

    let generator = QrGenerator::new(&GeneratorConfig::new("."));

    // Scheme is added and the name is timestamped
    let generated = generator.generate("example.com", None)?;
    generator.verify(&generated)?;
    println!("✓ {} -> {}", generated.url, generated.path.display());

    // Explicit name, extension appended
    let generated = generator.generate("https://www.rust-lang.org", Some("rust-lang"))?;
    generator.verify(&generated)?;
    println!("✓ {} -> {}", generated.url, generated.path.display());

    Ok(())
}
