use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use glassopt::io::export::export;
use glassopt::io::ext_repr::ExtInstance;
use glassopt::io::import::import_instance;
use glassopt::io::svg::{cutting_guide_pages, sheet_to_svg};
use glassopt::packer::MultiSheetPacker;
use gopt::config::GOptConfig;
use gopt::io::cli::Cli;
use gopt::io::output::Output;
use gopt::{EPOCH, io};
use log::{info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GOptConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed GOptConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_json_instance(args.input_file.as_path())?;
    main_gopt(
        ext_instance,
        config,
        input_file_stem,
        &args.solution_folder,
        !args.no_guide,
    )
}

fn main_gopt(
    ext_instance: ExtInstance,
    config: GOptConfig,
    input_stem: &str,
    output_folder: &Path,
    write_guide: bool,
) -> Result<()> {
    let instance = import_instance(&ext_instance)?;
    info!(
        "[MAIN] instance {} imported: {} pieces on {}x{} sheets",
        instance.name,
        instance.total_piece_qty().separate_with_commas(),
        instance.sheet.width,
        instance.sheet.height
    );

    let sol = MultiSheetPacker::new(instance.sheet, config.pack_config).solve(instance.pieces());

    if !sol.is_complete() {
        warn!(
            "[MAIN] {} oversized and {} unplaced pieces are missing from the layouts",
            sol.oversized.len(),
            sol.unplaced.len()
        );
    }

    for (i, sheet) in sol.sheets.iter().enumerate() {
        let svg_path = output_folder.join(format!("sol_{input_stem}_{i}.svg"));
        let title = format!("sheet {}/{}", i + 1, sol.sheets.len());
        let svg = sheet_to_svg(sheet, &instance, config.svg_draw_options, &title);

        io::write_svg(&svg, &svg_path)?;
    }

    if write_guide {
        for (i, page) in cutting_guide_pages(&sol.sheets, &config.page_options)
            .iter()
            .enumerate()
        {
            let page_path = output_folder.join(format!("guide_{input_stem}_{i}.svg"));
            io::write_svg(page, &page_path)?;
        }
    }

    {
        let output = Output {
            instance: ext_instance,
            solution: export(&instance, &sol, *EPOCH),
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
