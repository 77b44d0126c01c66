//! Demonstrates shrink-to-fit and trim reporting, headless.
//!
//! Drives a [`TextBlock`] through the box-size sweep a host layout pass
//! would deliver and prints the fitted font size and trim flag after each
//! step. Run with `RUST_LOG=debug` to watch the fitter's decisions.

use fitblock::{css, Size, TextBlock, TextStyle, TextTrimming, TrimPolicy};
use fitblock_cosmic::CosmicMeasurer;

fn main() {
    env_logger::init();

    let mut measurer = CosmicMeasurer::new();
    let mut block = TextBlock::new("The quick brown fox jumps over the lazy dog")
        .with_style(TextStyle::new().with_color(css::GRAY))
        .with_font_size(32.0)
        .with_min_font_size(9.0)
        .with_shrink_to_fit(true)
        .with_trimming(TextTrimming::Ellipsis)
        .with_trim_policy(TrimPolicy::Width);

    println!("{:>9} | {:>9} | {}", "box width", "font size", "trimmed");
    for width in [900.0, 700.0, 500.0, 300.0, 150.0, 80.0, 500.0, 900.0] {
        let size = Size::new(width, 48.0);
        block.resize(size, size, &mut measurer);
        println!(
            "{:>9} | {:>9.1} | {}",
            width,
            block.font_size(),
            block.is_text_trimmed()
        );
    }

    block.set_text("Shorter text", &mut measurer);
    println!(
        "after set_text: font size {:.1}, trimmed {}",
        block.font_size(),
        block.is_text_trimmed()
    );
}
