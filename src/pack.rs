use std::{
    convert::TryFrom,
    env,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use fs_err as fs;
use growpack::{pow2, Block, Heuristic, Packer};

use crate::{
    codegen::c_header,
    config::Config,
    image::Image,
    layout::{Layout, LayoutEntry, Usage},
    options::Options,
    sort::SortOrder,
    sprite::{discover_inputs, Sprite},
};

/// Everything a single run needs to know, after merging the command line
/// with the config file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackSettings {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub pow2: bool,
    pub header: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub text: bool,
    pub verbose: bool,
    pub sort: SortOrder,
    pub heuristic: Heuristic,
}

impl PackSettings {
    /// Options from the command line win over the config file. Paths from the
    /// config file are relative to the file itself.
    pub fn new(options: Options, config: &Config) -> Self {
        let inputs = if options.inputs.is_empty() {
            config.inputs.iter().map(|path| config.resolve(path)).collect()
        } else {
            options.inputs
        };

        let output = options
            .output
            .or_else(|| config.output.as_ref().map(|path| config.resolve(path)))
            .unwrap_or_else(|| PathBuf::from("output.png"));

        Self {
            inputs,
            output,
            pow2: options.pow2 || config.pow2.unwrap_or(false),
            header: options
                .header
                .or_else(|| config.header.as_ref().map(|path| config.resolve(path))),
            json: options
                .json
                .or_else(|| config.json.as_ref().map(|path| config.resolve(path))),
            text: options.text,
            verbose: options.verbose,
            sort: options.sort.or(config.sort).unwrap_or_default(),
            heuristic: options.heuristic.or(config.heuristic).unwrap_or_default(),
        }
    }
}

pub fn pack(options: Options) -> anyhow::Result<()> {
    let config = load_config(options.config.clone())?;
    let settings = PackSettings::new(options, &config);

    run(&settings)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::read_from_folder_or_file(&path)?),
        None => match Config::read_from_folder(env::current_dir()?) {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => Ok(Config::default()),
            Err(err) => Err(err.into()),
        },
    }
}

pub(crate) fn run(settings: &PackSettings) -> anyhow::Result<()> {
    let paths = discover_inputs(&settings.inputs)?;

    if paths.is_empty() {
        bail!("No input images were given");
    }

    let mut sprites = paths
        .iter()
        .map(|path| Sprite::load(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    settings
        .sort
        .sort(&mut sprites, |sprite| sprite.image.size());

    log::info!(
        "Packing {} images with the {} heuristic",
        sprites.len(),
        settings.heuristic
    );

    let mut packer = Packer::new().strategy(settings.heuristic);
    packer.fit(
        sprites
            .into_iter()
            .map(|sprite| Block::new(sprite.image.size(), sprite)),
    )?;

    let packed_size = match packer.size() {
        Some(size) => size,
        None => bail!("No input images were given"),
    };

    let canvas_size = if settings.pow2 {
        (
            u32::try_from(pow2(packed_size.0)).context("Spritesheet is too wide to round")?,
            u32::try_from(pow2(packed_size.1)).context("Spritesheet is too tall to round")?,
        )
    } else {
        packed_size
    };

    let mut canvas = Image::new_empty_rgba8(canvas_size);
    for block in packer.blocks() {
        canvas.blit(&block.payload().image, block.position());
    }

    let mut output = BufWriter::new(fs::File::create(&settings.output)?);
    canvas
        .encode_png(&mut output)
        .with_context(|| format!("Could not encode {}", settings.output.display()))?;
    output.flush()?;

    log::info!(
        "Wrote {}x{} spritesheet to {}",
        canvas_size.0,
        canvas_size.1,
        settings.output.display()
    );

    let layout = Layout {
        size: canvas_size,
        sprites: packer
            .blocks()
            .iter()
            .map(|block| {
                let sprite = block.payload();

                LayoutEntry {
                    name: sprite.name.clone(),
                    path: sprite.path.display().to_string(),
                    x: block.x(),
                    y: block.y(),
                    w: block.width(),
                    h: block.height(),
                }
            })
            .collect(),
    };

    if settings.verbose {
        let sizes: Vec<_> = packer.blocks().iter().map(Block::size).collect();
        println!("{}", Usage::new(packed_size, &sizes));
    }

    if let Some(header_path) = &settings.header {
        fs::write(header_path, c_header(&layout))?;
        log::info!("Wrote header to {}", header_path.display());
    }

    if let Some(json_path) = &settings.json {
        let mut file = BufWriter::new(fs::File::create(json_path)?);
        layout.write_json(&mut file)?;
        file.flush()?;
        log::info!("Wrote layout to {}", json_path.display());
    }

    if settings.text {
        let stdout = io::stdout();
        layout.write_text(stdout.lock())?;
    }

    Ok(())
}
