//! Command-line interface for the Game Boy Camera SAV to PNG Converter
//!
//! Usage: gbcam-sav-to-png-converter [-o <dir>] <savefile> [romfile]
//!
//! This program is unlicensed and dedicated to the public domain.

use std::env;
use std::path::Path;
use std::process;

// Import the library crate modules
use gbcam_sav_to_png_converter::config::{Config, VERSION};
use gbcam_sav_to_png_converter::convert_save::ConvertSave;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut output_dir: Option<String> = None;
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            "-o" | "--output-dir" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: {} requires a directory argument", args[i - 1]);
                    eprintln!();
                    print_usage(&args[0]);
                    process::exit(1);
                }
                output_dir = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unrecognized option: {}", arg);
                eprintln!();
                print_usage(&args[0]);
                process::exit(1);
            }
            arg => positionals.push(arg.to_string()),
        }
        i += 1;
    }

    // One savegame, at most one rom
    if positionals.is_empty() || positionals.len() > 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let save_path = &positionals[0];
    let rom_path = positionals.get(1);

    // Validate input files exist
    if !Path::new(save_path).exists() {
        eprintln!("Error: Savegame not found: {}", save_path);
        eprintln!();
        print_usage(&args[0]);
        process::exit(1);
    }
    if let Some(rom_path) = rom_path {
        if !Path::new(rom_path).exists() {
            eprintln!("Error: Romfile not found: {}", rom_path);
            eprintln!();
            print_usage(&args[0]);
            process::exit(1);
        }
    }

    // Validate input file extensions
    if !save_path.to_lowercase().ends_with(".sav") {
        eprintln!("Warning: Savegame does not have .sav extension");
        eprintln!("         Expected Game Boy Camera save RAM");
        eprintln!();
    }
    if let Some(rom_path) = rom_path {
        if !rom_path.to_lowercase().ends_with(".gb") && !rom_path.to_lowercase().ends_with(".gbc") {
            eprintln!("Warning: Romfile does not have .gb extension");
            eprintln!();
        }
    }

    println!("Game Boy Camera SAV to PNG Converter v{}", VERSION);
    println!();
    println!("Savegame: {}", save_path);
    match rom_path {
        Some(rom_path) => println!("Romfile:  {}", rom_path),
        None => println!("Romfile:  (none - photos are written without border frames)"),
    }
    println!();
    println!("Converting...");

    // Create config with the requested or automatic output directory
    let config = match output_dir {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Error: Failed to create output directory {}: {}", dir, e);
                process::exit(1);
            }
            Config::new(dir)
        }
        None => match Config::auto() {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: Failed to initialize: {}", e);
                process::exit(1);
            }
        },
    };

    // Perform conversion
    let converter = ConvertSave::new(config);
    match converter.convert(save_path, rom_path.map(String::as_str)) {
        Ok(written) => {
            for path in &written {
                println!("  {}", path.display());
            }
            println!();
            println!("✓ Success!");
            println!("  {} photos written", written.len());
            println!();
            process::exit(0);
        }
        Err(e) => {
            eprintln!();
            eprintln!("✗ Conversion failed:");
            eprintln!("  {}", e);
            eprintln!();
            process::exit(1);
        }
    }
}

fn print_usage(program_name: &str) {
    let name = Path::new(program_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("gbcam-sav-to-png-converter");

    println!("Game Boy Camera SAV to PNG Converter v{}", VERSION);
    println!();
    println!("USAGE:");
    println!("  {} [-o <dir>] <savefile> [romfile]", name);
    println!();
    println!("DESCRIPTION:");
    println!("  Extracts the 30 photo slots of a Game Boy Camera save RAM image");
    println!("  (.sav, 128 KiB) into 160x144 grayscale PNG files.");
    println!();
    println!("  When the camera rom (.gb, 1 MiB) is also given, each photo is");
    println!("  framed with the border it was saved with. Both the standard");
    println!("  Game Boy Camera and the Hello Kitty Pocket Camera are supported.");
    println!();
    println!("  Occupied slots are written as IMG_<photo number>.png, deleted");
    println!("  slots as DEL_<slot number>.png. Existing files are overwritten.");
    println!();
    println!("ARGUMENTS:");
    println!("  <savefile>  Path to the camera save RAM image");
    println!("  [romfile]   Path to the camera cartridge rom (optional)");
    println!();
    println!("OPTIONS:");
    println!("  -o, --output-dir <dir>  Write PNG files to <dir> (default: current");
    println!("                          directory, created if missing)");
    println!("  -h, --help              Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  {} camera.sav", name);
    println!("  {} camera.sav gbcamera.gb", name);
    println!("  {} -o photos ./saves/camera.sav ./roms/gbcamera.gb", name);
    println!();
}
