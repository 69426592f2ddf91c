use anyhow::{anyhow, Result};
use image::DynamicImage;
use viuer::{print, Config as ViuerConfig};
use std::io::{IsTerminal, Write};

/// Preview width in terminal cells when none is requested
const DEFAULT_PREVIEW_WIDTH: u32 = 48;

pub fn print_image(image: &DynamicImage, width: Option<u32>) -> Result<()> {
    let is_tty = std::io::stdout().is_terminal();

    let config = ViuerConfig {
        width: Some(width.unwrap_or(DEFAULT_PREVIEW_WIDTH)),
        height: None,
        absolute_offset: false,
        use_kitty: is_tty,
        use_iterm: is_tty,
        use_sixel: is_tty,
        ..Default::default()
    };

    std::io::stdout().flush()
        .map_err(|e| anyhow!("Failed to flush stdout: {e}"))?;

    print(image, &config)
        .map_err(|e| anyhow!("Failed to display image: {e}"))?;

    Ok(())
}
