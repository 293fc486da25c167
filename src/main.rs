use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fantasy_gfx::{
    common::{CharCode, FONT_GLYPH_COUNT},
    persist, ColorDisplayTable, Color, Font, GfxConfig, PixelRead, RgbaSurface,
};
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Inspect the fantasy console color table and font")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the native value of every logical color
    Palette,
    /// Print one glyph as hex color indices
    Glyph {
        code: CharCode,
        /// Font atlas PNG (overrides the config)
        #[arg(long)]
        atlas: Option<PathBuf>,
    },
    /// Print every glyph of the font
    Font {
        #[arg(long)]
        atlas: Option<PathBuf>,
    },
    /// Write the default config file
    InitConfig,
}

fn render_glyph(glyph: &impl PixelRead) -> String {
    let mut out = String::new();
    for y in 0..glyph.height() {
        for x in 0..glyph.width() {
            match glyph.get(x, y) {
                Color::Black => out.push('.'),
                c => out.push_str(&format!("{:x}", c as u8)),
            }
        }
        out.push('\n');
    }
    out
}

fn load_font(config: &GfxConfig, atlas: Option<PathBuf>) -> Result<Font> {
    let path = atlas
        .or_else(|| config.font_atlas.clone())
        .context("No font atlas given and none configured.")?;
    let surface = RgbaSurface::open_png(&path)?;
    Ok(Font::from_surface(&surface)?)
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config_path = match args.config {
        Some(p) => p,
        None => persist::default_config_path()?,
    };

    match args.command {
        Command::InitConfig => {
            persist::save_config(&config_path, &GfxConfig::default())?;
        }
        Command::Palette => {
            let config = persist::load_config(&config_path)?;
            let table = ColorDisplayTable::new(config.pixel_format);
            info!("Color table for {:?}", table.format());
            for c in Color::ALL {
                println!("{:2} {:<11} 0x{:08X}", c as u8, format!("{:?}", c), table.get(c));
            }
        }
        Command::Glyph { code, atlas } => {
            let config = persist::load_config(&config_path)?;
            let font = load_font(&config, atlas)?;
            print!("{}", render_glyph(font.glyph(code)?));
        }
        Command::Font { atlas } => {
            let config = persist::load_config(&config_path)?;
            let font = load_font(&config, atlas)?;
            for code in 0..FONT_GLYPH_COUNT {
                let code = code as CharCode;
                println!("{}:", code);
                print!("{}", render_glyph(font.glyph(code)?));
            }
        }
    }
    Ok(())
}
